use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::ErrorDto;

/// Tag for grouping the landing endpoint in OpenAPI documentation
pub static HOME_TAG: &str = "home";

/// Landing page.
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    ),
)]
pub async fn home() -> &'static str {
    "Welcome to Dance Academy!"
}

/// Fallback for any path without a route.
pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Route not found".to_string(),
        }),
    )
}
