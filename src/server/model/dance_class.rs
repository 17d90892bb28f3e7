//! Domain & parameter models for dance class operations
//!
//! Defines the dance class aggregate together with the dancers embedded inside it.
//! `EnrolledDancer` is a plain value owned by its class: it shares the field shape of
//! the top-level `Dancer` but has no identity and is never stored on its own.

use crate::{
    model::dance_class::{
        CreateDanceClassDto, DanceClassDto, EnrolledDancerDto, UpdateDanceClassDto,
    },
    server::error::{internal::InternalError, AppError},
};

/// A dancer embedded by value inside a dance class.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledDancer {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl From<EnrolledDancerDto> for EnrolledDancer {
    fn from(dto: EnrolledDancerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            age: dto.age,
        }
    }
}

impl From<EnrolledDancer> for EnrolledDancerDto {
    fn from(dancer: EnrolledDancer) -> Self {
        Self {
            first_name: dancer.first_name,
            last_name: dancer.last_name,
            age: dancer.age,
        }
    }
}

/// The dance class domain model
#[derive(Debug, Clone, PartialEq)]
pub struct DanceClass {
    pub id: i32,
    pub name: String,
    pub semester: String,
    pub teacher: String,
    pub teaching_assistant: Option<String>,
    /// Minutes per session
    pub class_length: i32,
    pub class_type: String,
    pub location: String,
    pub days_of_week: Vec<String>,
    pub dancers: Vec<EnrolledDancer>,
}

impl DanceClass {
    /// Converts an entity model to the dance class domain model
    ///
    /// Decodes the JSON columns holding the days of the week and the embedded dancers.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(DanceClass)` - The converted dance class domain model
    /// - `Err(AppError::Internal(MalformedDocument))` - A stored JSON column could not
    ///   be decoded
    pub fn from_entity(entity: entity::dance_class::Model) -> Result<Self, AppError> {
        let id = entity.id;

        let days_of_week = serde_json::from_value(entity.days_of_week).map_err(|source| {
            InternalError::MalformedDocument {
                id,
                field: "days_of_week",
                source,
            }
        })?;
        let dancers = serde_json::from_value(entity.dancers).map_err(|source| {
            InternalError::MalformedDocument {
                id,
                field: "dancers",
                source,
            }
        })?;

        Ok(Self {
            id,
            name: entity.name,
            semester: entity.semester,
            teacher: entity.teacher,
            teaching_assistant: entity.teaching_assistant,
            class_length: entity.class_length,
            class_type: entity.class_type,
            location: entity.location,
            days_of_week,
            dancers,
        })
    }

    /// Converts the dance class domain model to a DTO for API responses.
    pub fn into_dto(self) -> DanceClassDto {
        DanceClassDto {
            id: self.id,
            name: self.name,
            semester: self.semester,
            teacher: self.teacher,
            teaching_assistant: self.teaching_assistant,
            class_length: self.class_length,
            class_type: self.class_type,
            location: self.location,
            days_of_week: self.days_of_week,
            dancers: self.dancers.into_iter().map(EnrolledDancerDto::from).collect(),
        }
    }
}

/// Parameters for creating a new dance class
#[derive(Debug, Clone)]
pub struct CreateDanceClassParam {
    pub name: String,
    pub semester: String,
    pub teacher: String,
    pub teaching_assistant: Option<String>,
    pub class_length: i32,
    pub class_type: String,
    pub location: String,
    pub days_of_week: Vec<String>,
    pub dancers: Vec<EnrolledDancer>,
}

impl From<CreateDanceClassDto> for CreateDanceClassParam {
    fn from(dto: CreateDanceClassDto) -> Self {
        Self {
            name: dto.name,
            semester: dto.semester,
            teacher: dto.teacher,
            teaching_assistant: dto.teaching_assistant,
            class_length: dto.class_length,
            class_type: dto.class_type,
            location: dto.location,
            days_of_week: dto.days_of_week,
            dancers: dto
                .dancers
                .unwrap_or_default()
                .into_iter()
                .map(EnrolledDancer::from)
                .collect(),
        }
    }
}

/// Parameters for a merge-patch update of a dance class
///
/// `None` fields are left untouched. A supplied `dancers` list replaces the embedded
/// dancers as a whole.
#[derive(Debug, Clone, Default)]
pub struct UpdateDanceClassParam {
    pub name: Option<String>,
    pub semester: Option<String>,
    pub teacher: Option<String>,
    pub teaching_assistant: Option<String>,
    pub class_length: Option<i32>,
    pub class_type: Option<String>,
    pub location: Option<String>,
    pub days_of_week: Option<Vec<String>>,
    pub dancers: Option<Vec<EnrolledDancer>>,
}

impl From<UpdateDanceClassDto> for UpdateDanceClassParam {
    fn from(dto: UpdateDanceClassDto) -> Self {
        Self {
            name: dto.name,
            semester: dto.semester,
            teacher: dto.teacher,
            teaching_assistant: dto.teaching_assistant,
            class_length: dto.class_length,
            class_type: dto.class_type,
            location: dto.location,
            days_of_week: dto.days_of_week,
            dancers: dto
                .dancers
                .map(|dancers| dancers.into_iter().map(EnrolledDancer::from).collect()),
        }
    }
}
