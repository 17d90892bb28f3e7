//! Dancer factory for creating test dancer entities.

use crate::factory::helpers::{alphabetic_suffix, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dancers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::dancer::DancerFactory;
///
/// let dancer = DancerFactory::new(&db)
///     .first_name("Alice")
///     .age(12)
///     .build()
///     .await?;
/// ```
pub struct DancerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    age: i32,
}

impl<'a> DancerFactory<'a> {
    /// Creates a new DancerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Dancer"`
    /// - last_name: `"Test{suffix}"` where suffix is unique per factory
    /// - age: `10`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            first_name: "Dancer".to_string(),
            last_name: format!("Test{}", alphabetic_suffix(next_id())),
            age: 10,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Inserts the dancer into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created dancer entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::dancer::Model, DbErr> {
        entity::dancer::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            age: ActiveValue::Set(self.age),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dancer with default values.
pub async fn create_dancer(db: &DatabaseConnection) -> Result<entity::dancer::Model, DbErr> {
    DancerFactory::new(db).build().await
}
