//! Dance class business logic shared by the REST handlers and GraphQL resolvers.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::dance_class::DanceClassRepository,
    error::AppError,
    model::dance_class::{CreateDanceClassParam, DanceClass, UpdateDanceClassParam},
};

pub const DANCE_CLASS_NOT_FOUND: &str = "Dance class not found";

pub struct DanceClassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DanceClassService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every dance class
    pub async fn get_all(&self) -> Result<Vec<DanceClass>, AppError> {
        DanceClassRepository::new(self.db).get_all().await
    }

    /// Gets a dance class by identity, or `AppError::NotFound` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<DanceClass, AppError> {
        DanceClassRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(DANCE_CLASS_NOT_FOUND.to_string()))
    }

    /// Creates a dance class from already validated fields
    pub async fn create(&self, param: CreateDanceClassParam) -> Result<DanceClass, AppError> {
        let class = DanceClassRepository::new(self.db).create(param).await?;

        tracing::debug!(
            "Created dance class {} with {} enrolled dancer(s)",
            class.id,
            class.dancers.len()
        );

        Ok(class)
    }

    /// Merges the supplied fields into the stored dance class
    pub async fn update(
        &self,
        id: i32,
        param: UpdateDanceClassParam,
    ) -> Result<DanceClass, AppError> {
        DanceClassRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(DANCE_CLASS_NOT_FOUND.to_string()))
    }

    /// Deletes a dance class, returning `AppError::NotFound` if nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = DanceClassRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound(DANCE_CLASS_NOT_FOUND.to_string()));
        }

        tracing::debug!("Deleted dance class {}", id);

        Ok(())
    }
}
