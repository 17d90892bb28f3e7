use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorsDto},
        dance_class::{CreateDanceClassDto, DanceClassDto, UpdateDanceClassDto},
    },
    server::{
        error::AppError,
        model::dance_class::DanceClass,
        service::dance_class::DanceClassService,
        state::AppState,
        util::parse::{parse_id, parse_json},
        validation::{parse_body, Mode, DANCE_CLASS_RULES},
    },
};

/// Tag for grouping dance class endpoints in OpenAPI documentation
pub static DANCE_CLASS_TAG: &str = "danceclasses";

/// List all dance classes.
///
/// # Returns
/// - `200 OK` - Every stored dance class
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/danceclasses",
    tag = DANCE_CLASS_TAG,
    responses(
        (status = 200, description = "Every stored dance class", body = Vec<DanceClassDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dance_classes(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let classes = DanceClassService::new(&state.db).get_all().await?;

    let dto: Vec<DanceClassDto> = classes.into_iter().map(DanceClass::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a dance class by id.
///
/// # Returns
/// - `200 OK` - The dance class
/// - `404 Not Found` - No dance class with that id
/// - `500 Internal Server Error` - Malformed id or database error
#[utoipa::path(
    get,
    path = "/danceclasses/{id}",
    tag = DANCE_CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Dance class id")
    ),
    responses(
        (status = 200, description = "The dance class", body = DanceClassDto),
        (status = 404, description = "Dance class not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dance_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let class = DanceClassService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// Create a dance class.
///
/// The body is checked against the dance class rules before anything is stored; every
/// offending field is reported at once.
///
/// # Returns
/// - `201 Created` - The stored dance class with its assigned id
/// - `400 Bad Request` - One or more fields failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/danceclasses",
    tag = DANCE_CLASS_TAG,
    request_body = CreateDanceClassDto,
    responses(
        (status = 201, description = "Successfully created dance class", body = DanceClassDto),
        (status = 400, description = "Invalid dance class data", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dance_class(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = parse_json(body)?;
    let payload: CreateDanceClassDto = parse_body(DANCE_CLASS_RULES, body, Mode::Create)?;

    let class = DanceClassService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(class.into_dto())))
}

/// Update a dance class.
///
/// Merge-patch semantics: fields present in the body are checked and replace the
/// stored values, omitted fields are kept.
///
/// # Returns
/// - `200 OK` - The dance class after the update
/// - `400 Bad Request` - A supplied field failed validation
/// - `404 Not Found` - No dance class with that id
/// - `500 Internal Server Error` - Malformed id or database error
#[utoipa::path(
    put,
    path = "/danceclasses/{id}",
    tag = DANCE_CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Dance class id")
    ),
    request_body = UpdateDanceClassDto,
    responses(
        (status = 200, description = "Successfully updated dance class", body = DanceClassDto),
        (status = 400, description = "Invalid dance class data", body = ValidationErrorsDto),
        (status = 404, description = "Dance class not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dance_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let body = parse_json(body)?;
    let payload: UpdateDanceClassDto = parse_body(DANCE_CLASS_RULES, body, Mode::Update)?;

    let class = DanceClassService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// Delete a dance class.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No dance class with that id
/// - `500 Internal Server Error` - Malformed id or database error
#[utoipa::path(
    delete,
    path = "/danceclasses/{id}",
    tag = DANCE_CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Dance class id")
    ),
    responses(
        (status = 200, description = "Dance class deleted", body = MessageDto),
        (status = 404, description = "Dance class not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dance_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    DanceClassService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Dance class deleted successfully".to_string(),
        }),
    ))
}
