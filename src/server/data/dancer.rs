//! Dancer data repository for database operations
//!
//! Provides the `DancerRepository` for managing top-level dancer documents. Handles
//! listing, lookup by identity, creation, merge-patch updates, and deletion, and
//! converts entity models into domain models at the repository boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::dancer::{CreateDancerParam, Dancer, UpdateDancerParam};

/// Repository providing database operations for dancer management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting dancer records.
pub struct DancerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DancerRepository<'a> {
    /// Creates a new DancerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DancerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every dancer in the collection.
    ///
    /// No pagination is applied. Results come back in store order (ascending identity).
    ///
    /// # Returns
    /// - `Ok(Vec<Dancer>)` - All dancers (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Dancer>, DbErr> {
        let entities = entity::prelude::Dancer::find()
            .order_by_asc(entity::dancer::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Dancer::from_entity).collect())
    }

    /// Finds a dancer by identity.
    ///
    /// # Arguments
    /// - `id` - Identity assigned to the dancer on creation
    ///
    /// # Returns
    /// - `Ok(Some(Dancer))` - Dancer found
    /// - `Ok(None)` - No dancer with that identity
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Dancer>, DbErr> {
        let entity = entity::prelude::Dancer::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Dancer::from_entity))
    }

    /// Creates a new dancer.
    ///
    /// The store assigns the identity.
    ///
    /// # Arguments
    /// - `param` - Fields of the new dancer
    ///
    /// # Returns
    /// - `Ok(Dancer)` - The stored dancer including its identity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateDancerParam) -> Result<Dancer, DbErr> {
        let entity = entity::dancer::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            age: ActiveValue::Set(param.age),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Dancer::from_entity(entity))
    }

    /// Applies a merge-patch update to a dancer.
    ///
    /// Supplied fields replace the stored values; `None` fields are retained.
    ///
    /// # Arguments
    /// - `id` - Identity of the dancer to update
    /// - `param` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Some(Dancer))` - The dancer after the update
    /// - `Ok(None)` - No dancer with that identity
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateDancerParam,
    ) -> Result<Option<Dancer>, DbErr> {
        let Some(existing) = entity::prelude::Dancer::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();
        let mut changed = false;

        if let Some(first_name) = param.first_name {
            active.first_name = ActiveValue::Set(first_name);
            changed = true;
        }
        if let Some(last_name) = param.last_name {
            active.last_name = ActiveValue::Set(last_name);
            changed = true;
        }
        if let Some(age) = param.age {
            active.age = ActiveValue::Set(age);
            changed = true;
        }

        if !changed {
            return Ok(Some(Dancer::from_entity(existing)));
        }

        match active.update(self.db).await {
            Ok(entity) => Ok(Some(Dancer::from_entity(entity))),
            // Deleted between the lookup and the update
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes a dancer by identity.
    ///
    /// # Arguments
    /// - `id` - Identity of the dancer to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The dancer was deleted
    /// - `Ok(false)` - No dancer with that identity
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Dancer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
