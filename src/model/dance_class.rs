use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A dancer embedded inside a dance class document.
///
/// Has no identity of its own; it only exists as part of its class.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledDancerDto {
    #[schema(example = "Cocoa")]
    pub first_name: String,
    #[schema(example = "Douglas")]
    pub last_name: String,
    #[schema(example = 10)]
    pub age: i32,
}

/// A stored dance class.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DanceClassDto {
    pub id: i32,
    #[schema(example = "Intro to Ballet")]
    pub name: String,
    #[schema(example = "Fall 2024")]
    pub semester: String,
    pub teacher: String,
    pub teaching_assistant: Option<String>,
    /// Length of one session in minutes
    #[schema(example = 90)]
    pub class_length: i32,
    pub class_type: String,
    pub location: String,
    pub days_of_week: Vec<String>,
    pub dancers: Vec<EnrolledDancerDto>,
}

/// Request body for creating a dance class.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDanceClassDto {
    #[schema(pattern = "^[A-Za-z\\s]+$")]
    pub name: String,
    pub semester: String,
    pub teacher: String,
    #[serde(default)]
    pub teaching_assistant: Option<String>,
    #[schema(minimum = 1)]
    pub class_length: i32,
    pub class_type: String,
    pub location: String,
    pub days_of_week: Vec<String>,
    #[serde(default)]
    pub dancers: Option<Vec<EnrolledDancerDto>>,
}

/// Request body for updating a dance class. Omitted fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDanceClassDto {
    pub name: Option<String>,
    pub semester: Option<String>,
    pub teacher: Option<String>,
    pub teaching_assistant: Option<String>,
    pub class_length: Option<i32>,
    pub class_type: Option<String>,
    pub location: Option<String>,
    pub days_of_week: Option<Vec<String>>,
    pub dancers: Option<Vec<EnrolledDancerDto>>,
}
