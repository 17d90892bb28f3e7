//! Dance class data repository for database operations
//!
//! Provides the `DanceClassRepository` for managing dance class documents. The days of
//! the week and the embedded dancers are written by value into JSON columns of the
//! class row, so deleting a class discards its embedded dancers with it.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::dance_class::{CreateDanceClassParam, DanceClass, UpdateDanceClassParam},
};

/// Repository providing database operations for dance class management.
pub struct DanceClassRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DanceClassRepository<'a> {
    /// Creates a new DanceClassRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DanceClassRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every dance class in the collection in store order
    ///
    /// # Returns
    /// - `Ok(Vec<DanceClass>)` - All dance classes (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::Internal)` - A stored class has malformed JSON columns
    pub async fn get_all(&self) -> Result<Vec<DanceClass>, AppError> {
        let entities = entity::prelude::DanceClass::find()
            .order_by_asc(entity::dance_class::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(DanceClass::from_entity).collect()
    }

    /// Finds a dance class by identity
    ///
    /// # Arguments
    /// - `id` - Identity assigned to the class on creation
    ///
    /// # Returns
    /// - `Ok(Some(DanceClass))` - The requested dance class
    /// - `Ok(None)` - No dance class with that identity
    /// - `Err(AppError)` - Database error or malformed stored document
    pub async fn find_by_id(&self, id: i32) -> Result<Option<DanceClass>, AppError> {
        entity::prelude::DanceClass::find_by_id(id)
            .one(self.db)
            .await?
            .map(DanceClass::from_entity)
            .transpose()
    }

    /// Creates a new dance class together with its embedded dancers
    ///
    /// # Arguments
    /// - `param` - Fields of the new dance class
    ///
    /// # Returns
    /// - `Ok(DanceClass)` - The stored class including its identity
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateDanceClassParam) -> Result<DanceClass, AppError> {
        let entity = entity::dance_class::ActiveModel {
            name: ActiveValue::Set(param.name),
            semester: ActiveValue::Set(param.semester),
            teacher: ActiveValue::Set(param.teacher),
            teaching_assistant: ActiveValue::Set(param.teaching_assistant),
            class_length: ActiveValue::Set(param.class_length),
            class_type: ActiveValue::Set(param.class_type),
            location: ActiveValue::Set(param.location),
            days_of_week: ActiveValue::Set(serde_json::to_value(param.days_of_week)?),
            dancers: ActiveValue::Set(serde_json::to_value(param.dancers)?),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        DanceClass::from_entity(entity)
    }

    /// Applies a merge-patch update to a dance class
    ///
    /// Supplied fields replace the stored values and omitted fields are retained. A
    /// supplied `dancers` list replaces the embedded dancers as a whole.
    ///
    /// # Arguments
    /// - `id` - Identity of the class to update
    /// - `param` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Some(DanceClass))` - The class after the update
    /// - `Ok(None)` - No dance class with that identity
    /// - `Err(AppError)` - Database error or malformed stored document
    pub async fn update(
        &self,
        id: i32,
        param: UpdateDanceClassParam,
    ) -> Result<Option<DanceClass>, AppError> {
        let Some(existing) = entity::prelude::DanceClass::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();
        let mut changed = false;

        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
            changed = true;
        }
        if let Some(semester) = param.semester {
            active.semester = ActiveValue::Set(semester);
            changed = true;
        }
        if let Some(teacher) = param.teacher {
            active.teacher = ActiveValue::Set(teacher);
            changed = true;
        }
        if let Some(teaching_assistant) = param.teaching_assistant {
            active.teaching_assistant = ActiveValue::Set(Some(teaching_assistant));
            changed = true;
        }
        if let Some(class_length) = param.class_length {
            active.class_length = ActiveValue::Set(class_length);
            changed = true;
        }
        if let Some(class_type) = param.class_type {
            active.class_type = ActiveValue::Set(class_type);
            changed = true;
        }
        if let Some(location) = param.location {
            active.location = ActiveValue::Set(location);
            changed = true;
        }
        if let Some(days_of_week) = param.days_of_week {
            active.days_of_week = ActiveValue::Set(serde_json::to_value(days_of_week)?);
            changed = true;
        }
        if let Some(dancers) = param.dancers {
            active.dancers = ActiveValue::Set(serde_json::to_value(dancers)?);
            changed = true;
        }

        if !changed {
            return DanceClass::from_entity(existing).map(Some);
        }

        match active.update(self.db).await {
            Ok(entity) => DanceClass::from_entity(entity).map(Some),
            // Deleted between the lookup and the update
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a dance class and its embedded dancers
    ///
    /// # Arguments
    /// - `id` - Identity of the class to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The class was deleted
    /// - `Ok(false)` - No dance class with that identity
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::DanceClass::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
