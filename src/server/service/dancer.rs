//! Dancer business logic shared by the REST handlers and GraphQL resolvers.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::dancer::DancerRepository,
    error::AppError,
    model::dancer::{CreateDancerParam, Dancer, UpdateDancerParam},
};

pub const DANCER_NOT_FOUND: &str = "Dancer not found";

pub struct DancerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DancerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every dancer
    pub async fn get_all(&self) -> Result<Vec<Dancer>, AppError> {
        Ok(DancerRepository::new(self.db).get_all().await?)
    }

    /// Gets a dancer by identity, or `AppError::NotFound` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Dancer, AppError> {
        DancerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(DANCER_NOT_FOUND.to_string()))
    }

    /// Creates a dancer from already validated fields
    pub async fn create(&self, param: CreateDancerParam) -> Result<Dancer, AppError> {
        let dancer = DancerRepository::new(self.db).create(param).await?;

        tracing::debug!("Created dancer {}", dancer.id);

        Ok(dancer)
    }

    /// Merges the supplied fields into the stored dancer
    pub async fn update(&self, id: i32, param: UpdateDancerParam) -> Result<Dancer, AppError> {
        DancerRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(DANCER_NOT_FOUND.to_string()))
    }

    /// Deletes a dancer, returning `AppError::NotFound` if nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = DancerRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound(DANCER_NOT_FOUND.to_string()));
        }

        tracing::debug!("Deleted dancer {}", id);

        Ok(())
    }
}
