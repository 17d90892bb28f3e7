//! Dance class factory for creating test dance class entities.
//!
//! Days and enrolled dancers are stored as JSON columns; the factory builds those
//! values with `serde_json::json!` in the same camelCase shape the API writes.

use crate::factory::helpers::{alphabetic_suffix, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test dance classes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::dance_class::DanceClassFactory;
///
/// let class = DanceClassFactory::new(&db)
///     .name("Ballet")
///     .days_of_week(&["Monday", "Wednesday"])
///     .dancer("Alice", "Smith", 12)
///     .build()
///     .await?;
/// ```
pub struct DanceClassFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    semester: String,
    teacher: String,
    teaching_assistant: Option<String>,
    class_length: i32,
    class_type: String,
    location: String,
    days_of_week: Value,
    dancers: Vec<Value>,
}

impl<'a> DanceClassFactory<'a> {
    /// Creates a new DanceClassFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Class{suffix}"` where suffix is unique per factory
    /// - semester: `"Fall"`, teacher: `"Ms Smith"`, no teaching assistant
    /// - class_length: `60`, class_type: `"Ballet"`, location: `"Studio A"`
    /// - days_of_week: `["Monday"]`, no enrolled dancers
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Class{}", alphabetic_suffix(next_id())),
            semester: "Fall".to_string(),
            teacher: "Ms Smith".to_string(),
            teaching_assistant: None,
            class_length: 60,
            class_type: "Ballet".to_string(),
            location: "Studio A".to_string(),
            days_of_week: json!(["Monday"]),
            dancers: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = teacher.into();
        self
    }

    pub fn teaching_assistant(mut self, teaching_assistant: impl Into<String>) -> Self {
        self.teaching_assistant = Some(teaching_assistant.into());
        self
    }

    pub fn class_length(mut self, class_length: i32) -> Self {
        self.class_length = class_length;
        self
    }

    pub fn days_of_week(mut self, days: &[&str]) -> Self {
        self.days_of_week = json!(days);
        self
    }

    /// Enrolls a dancer in the class.
    pub fn dancer(mut self, first_name: &str, last_name: &str, age: i32) -> Self {
        self.dancers.push(json!({
            "firstName": first_name,
            "lastName": last_name,
            "age": age,
        }));
        self
    }

    /// Stores an arbitrary JSON value in the dancers column.
    ///
    /// Used to seed documents whose embedded data no longer matches the schema.
    pub fn raw_dancers(mut self, dancers: Value) -> Self {
        self.dancers = match dancers {
            Value::Array(items) => items,
            other => vec![other],
        };
        self
    }

    /// Inserts the dance class into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created dance class entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::dance_class::Model, DbErr> {
        entity::dance_class::ActiveModel {
            name: ActiveValue::Set(self.name),
            semester: ActiveValue::Set(self.semester),
            teacher: ActiveValue::Set(self.teacher),
            teaching_assistant: ActiveValue::Set(self.teaching_assistant),
            class_length: ActiveValue::Set(self.class_length),
            class_type: ActiveValue::Set(self.class_type),
            location: ActiveValue::Set(self.location),
            days_of_week: ActiveValue::Set(self.days_of_week),
            dancers: ActiveValue::Set(Value::Array(self.dancers)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dance class with default values.
pub async fn create_dance_class(
    db: &DatabaseConnection,
) -> Result<entity::dance_class::Model, DbErr> {
    DanceClassFactory::new(db).build().await
}
