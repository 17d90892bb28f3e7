use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error body returned for server faults and unknown routes.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Message body used for confirmations and not-found responses.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MessageDto {
    pub message: String,
}

/// A single rejected field.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Body of a 400 response listing every field that failed validation.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ValidationErrorsDto {
    pub errors: Vec<FieldErrorDto>,
}
