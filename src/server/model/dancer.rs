//! Domain & parameter models for dancer operations
//!
//! Defines the dancer domain model, the create/update parameter models, and the
//! conversions from the database entity and into DTOs.

use crate::model::dancer::{CreateDancerDto, DancerDto, UpdateDancerDto};

/// A top-level dancer document with its store-assigned identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Dancer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl Dancer {
    /// Converts an entity model to the dancer domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Dancer` - The converted dancer domain model
    pub fn from_entity(entity: entity::dancer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            age: entity.age,
        }
    }

    /// Converts the dancer domain model to a DTO for API responses.
    pub fn into_dto(self) -> DancerDto {
        DancerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
        }
    }
}

/// Parameters for creating a new dancer
#[derive(Debug, Clone)]
pub struct CreateDancerParam {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl From<CreateDancerDto> for CreateDancerParam {
    fn from(dto: CreateDancerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            age: dto.age,
        }
    }
}

/// Parameters for a merge-patch update of a dancer
///
/// `None` fields are left untouched in the stored document.
#[derive(Debug, Clone, Default)]
pub struct UpdateDancerParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
}

impl From<UpdateDancerDto> for UpdateDancerParam {
    fn from(dto: UpdateDancerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            age: dto.age,
        }
    }
}
