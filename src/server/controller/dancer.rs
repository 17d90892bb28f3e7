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
        dancer::{CreateDancerDto, DancerDto, UpdateDancerDto},
    },
    server::{
        error::AppError,
        model::dancer::Dancer,
        service::dancer::DancerService,
        state::AppState,
        util::parse::{parse_id, parse_json},
        validation::{parse_body, Mode, DANCER_RULES},
    },
};

/// Tag for grouping dancer endpoints in OpenAPI documentation
pub static DANCER_TAG: &str = "dancers";

/// List all dancers.
///
/// # Returns
/// - `200 OK` - Every stored dancer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/dancers",
    tag = DANCER_TAG,
    responses(
        (status = 200, description = "Every stored dancer", body = Vec<DancerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dancers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dancers = DancerService::new(&state.db).get_all().await?;

    let dto: Vec<DancerDto> = dancers.into_iter().map(Dancer::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a dancer by id.
///
/// # Returns
/// - `200 OK` - The dancer
/// - `404 Not Found` - No dancer with that id
/// - `500 Internal Server Error` - Malformed id or database error
#[utoipa::path(
    get,
    path = "/dancers/{id}",
    tag = DANCER_TAG,
    params(
        ("id" = i32, Path, description = "Dancer id")
    ),
    responses(
        (status = 200, description = "The dancer", body = DancerDto),
        (status = 404, description = "Dancer not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dancer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let dancer = DancerService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(dancer.into_dto())))
}

/// Create a dancer.
///
/// The body is checked against the dancer rules before anything is stored; every
/// offending field is reported at once.
///
/// # Returns
/// - `201 Created` - The stored dancer with its assigned id
/// - `400 Bad Request` - One or more fields failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/dancers",
    tag = DANCER_TAG,
    request_body = CreateDancerDto,
    responses(
        (status = 201, description = "Successfully created dancer", body = DancerDto),
        (status = 400, description = "Invalid dancer data", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dancer(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = parse_json(body)?;
    let payload: CreateDancerDto = parse_body(DANCER_RULES, body, Mode::Create)?;

    let dancer = DancerService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(dancer.into_dto())))
}

/// Update a dancer.
///
/// Merge-patch semantics: fields present in the body are checked and replace the
/// stored values, omitted fields are kept.
///
/// # Returns
/// - `200 OK` - The dancer after the update
/// - `400 Bad Request` - A supplied field failed validation
/// - `404 Not Found` - No dancer with that id
/// - `500 Internal Server Error` - Malformed id or database error
#[utoipa::path(
    put,
    path = "/dancers/{id}",
    tag = DANCER_TAG,
    params(
        ("id" = i32, Path, description = "Dancer id")
    ),
    request_body = UpdateDancerDto,
    responses(
        (status = 200, description = "Successfully updated dancer", body = DancerDto),
        (status = 400, description = "Invalid dancer data", body = ValidationErrorsDto),
        (status = 404, description = "Dancer not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dancer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let body = parse_json(body)?;
    let payload: UpdateDancerDto = parse_body(DANCER_RULES, body, Mode::Update)?;

    let dancer = DancerService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(dancer.into_dto())))
}

/// Delete a dancer.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No dancer with that id
/// - `500 Internal Server Error` - Malformed id or database error
#[utoipa::path(
    delete,
    path = "/dancers/{id}",
    tag = DANCER_TAG,
    params(
        ("id" = i32, Path, description = "Dancer id")
    ),
    responses(
        (status = 200, description = "Dancer deleted", body = MessageDto),
        (status = 404, description = "Dancer not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dancer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    DancerService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Dancer deleted successfully".to_string(),
        }),
    ))
}
