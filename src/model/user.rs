use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Profile of the signed-in user as shown on the protected landing page.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ProfileDto {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub message: String,
}
