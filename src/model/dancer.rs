use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored dancer.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DancerDto {
    pub id: i32,
    #[schema(example = "Kate")]
    pub first_name: String,
    #[schema(example = "Douglas")]
    pub last_name: String,
    #[schema(example = 18)]
    pub age: i32,
}

/// Request body for creating a dancer.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDancerDto {
    #[schema(pattern = "^[A-Za-z]+$")]
    pub first_name: String,
    #[schema(pattern = "^[A-Za-z]+$")]
    pub last_name: String,
    #[schema(minimum = 0)]
    pub age: i32,
}

/// Request body for updating a dancer. Omitted fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDancerDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
}
