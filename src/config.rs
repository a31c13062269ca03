use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub docs: DocsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub instance_id: String,
}

#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Path Swagger UI is served under
    pub path: String,
    pub swagger_enabled: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            path: "/docs".to_string(),
            swagger_enabled: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let swagger_path =
            docs_path(&env::var("DOCS_PATH").unwrap_or_else(|_| "/docs".to_string()))?;

        Ok(Config {
            server: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("API_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .context("API_PORT must be a valid port number")?,
                // Used only for debugging/observability. Falls back to HOSTNAME
                // (Docker/Kubernetes), otherwise "unknown".
                instance_id: env::var("INSTANCE_ID")
                    .or_else(|_| env::var("HOSTNAME"))
                    .unwrap_or_else(|_| "unknown".to_string()),
            },
            docs: DocsConfig {
                path: swagger_path,
                swagger_enabled: env::var("SWAGGER_ENABLED")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .context("SWAGGER_ENABLED must be true or false")?,
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Swagger UI path without trailing slashes; must not be the root
fn docs_path(raw: &str) -> Result<String> {
    let trimmed = raw.trim_end_matches('/');
    if !trimmed.starts_with('/') {
        anyhow::bail!("DOCS_PATH must be an absolute path such as /docs, got '{}'", raw);
    }
    Ok(trimmed.to_string())
}
