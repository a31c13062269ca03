use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A technology that applications can be tagged with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Technology {
    pub id: Uuid,
    /// Display name (unique, case-insensitive)
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// An application shown in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Application {
    pub id: Uuid,
    /// Display name (unique, case-insensitive)
    pub name: String,
    pub description: Option<String>,
    /// Public link to the running application
    pub url: Option<String>,
    /// Technologies the application is built with
    pub technologies: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a technology
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewTechnology {
    #[schema(example = "Rust")]
    pub name: String,
}

/// Request body for creating an application
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewApplication {
    #[schema(example = "Portfolio API")]
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<Uuid>,
}
