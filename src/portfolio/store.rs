use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Application, NewApplication, NewTechnology, Technology};
use crate::errors::{
    BadRequestException, ConflictException, HttpException, NotFoundException,
    UnprocessableEntityException,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("{entity} named '{name}' already exists")]
    Duplicate { entity: &'static str, name: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Unknown technology: {0}")]
    UnknownTechnology(Uuid),
}

impl From<StoreError> for HttpException {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::Blank(_) => BadRequestException::new(message).into(),
            StoreError::Duplicate { .. } => ConflictException::new(message).into(),
            StoreError::NotFound { .. } => NotFoundException::new(message).into(),
            StoreError::UnknownTechnology(_) => UnprocessableEntityException::new(message).into(),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    applications: HashMap<Uuid, Application>,
    technologies: HashMap<Uuid, Technology>,
}

/// Shared, cloneable handle on the portfolio data
#[derive(Debug, Clone, Default)]
pub struct PortfolioStore {
    inner: Arc<RwLock<Inner>>,
}

fn required(field: &'static str, value: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Blank(field));
    }
    Ok(trimmed.to_string())
}

impl PortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_applications(&self) -> Vec<Application> {
        let inner = self.inner.read().await;
        let mut applications: Vec<Application> = inner.applications.values().cloned().collect();
        applications.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.name.cmp(&b.name)));
        applications
    }

    pub async fn get_application(&self, id: Uuid) -> Result<Application, StoreError> {
        self.inner
            .read()
            .await
            .applications
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "Application",
                id,
            })
    }

    pub async fn create_application(&self, new: NewApplication) -> Result<Application, StoreError> {
        let name = required("name", &new.name)?;
        let mut inner = self.inner.write().await;

        if inner
            .applications
            .values()
            .any(|app| app.name.eq_ignore_ascii_case(&name))
        {
            return Err(StoreError::Duplicate {
                entity: "Application",
                name,
            });
        }
        if let Some(unknown) = new
            .technologies
            .iter()
            .find(|id| !inner.technologies.contains_key(*id))
        {
            return Err(StoreError::UnknownTechnology(*unknown));
        }

        let application = Application {
            id: Uuid::new_v4(),
            name,
            description: new.description,
            url: new.url,
            technologies: new.technologies,
            created_at: Utc::now(),
        };
        inner
            .applications
            .insert(application.id, application.clone());
        Ok(application)
    }

    pub async fn delete_application(&self, id: Uuid) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .applications
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound {
                entity: "Application",
                id,
            })
    }

    pub async fn list_technologies(&self) -> Vec<Technology> {
        let inner = self.inner.read().await;
        let mut technologies: Vec<Technology> = inner.technologies.values().cloned().collect();
        technologies.sort_by(|a, b| a.name.cmp(&b.name));
        technologies
    }

    pub async fn create_technology(&self, new: NewTechnology) -> Result<Technology, StoreError> {
        let name = required("name", &new.name)?;
        let mut inner = self.inner.write().await;

        if inner
            .technologies
            .values()
            .any(|tech| tech.name.eq_ignore_ascii_case(&name))
        {
            return Err(StoreError::Duplicate {
                entity: "Technology",
                name,
            });
        }

        let technology = Technology {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        };
        inner
            .technologies
            .insert(technology.id, technology.clone());
        Ok(technology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str, technologies: Vec<Uuid>) -> NewApplication {
        NewApplication {
            name: name.to_string(),
            description: None,
            url: None,
            technologies,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_application() {
        let store = PortfolioStore::new();
        let rust = store
            .create_technology(NewTechnology { name: "Rust".into() })
            .await
            .unwrap();

        let created = store
            .create_application(app("  Portfolio  ", vec![rust.id]))
            .await
            .unwrap();
        assert_eq!(created.name, "Portfolio");

        let fetched = store.get_application(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(store.list_applications().await.len(), 1);
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let store = PortfolioStore::new();
        assert_eq!(
            store.create_application(app("   ", vec![])).await,
            Err(StoreError::Blank("name"))
        );

        store.create_application(app("Blog", vec![])).await.unwrap();
        assert!(matches!(
            store.create_application(app("blog", vec![])).await,
            Err(StoreError::Duplicate { .. })
        ));

        let missing = Uuid::new_v4();
        assert_eq!(
            store.create_application(app("Shop", vec![missing])).await,
            Err(StoreError::UnknownTechnology(missing))
        );
    }

    #[tokio::test]
    async fn test_delete_application() {
        let store = PortfolioStore::new();
        let created = store.create_application(app("Blog", vec![])).await.unwrap();

        store.delete_application(created.id).await.unwrap();
        assert!(matches!(
            store.delete_application(created.id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_store_error_to_exception() {
        let cases = [
            (StoreError::Blank("name"), 400),
            (
                StoreError::Duplicate {
                    entity: "Technology",
                    name: "Rust".into(),
                },
                409,
            ),
            (
                StoreError::NotFound {
                    entity: "Application",
                    id: Uuid::nil(),
                },
                404,
            ),
            (StoreError::UnknownTechnology(Uuid::nil()), 422),
        ];

        for (err, status) in cases {
            let message = err.to_string();
            let exception = HttpException::from(err);
            assert_eq!(exception.status_code(), status);
            assert_eq!(exception.message_text(), message);
        }
    }
}
