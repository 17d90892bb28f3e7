//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. The same type is
//! classified for GraphQL clients through `ErrorExtensions` so both transports agree
//! on what is a validation failure, a missing document, or a server fault.

pub mod auth;
pub mod config;
pub mod internal;

use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, MessageDto, ValidationErrorsDto},
    server::{
        error::{auth::AuthError, config::ConfigError, internal::InternalError},
        validation::ValidationErrors,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication handshake error.
    ///
    /// Delegates to `AuthError::into_response()` which redirects to the failure page.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request body failed one or more field rules.
    ///
    /// Results in 400 Bad Request listing every offending field.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication and state management.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// JSON (de)serialization error outside of request body parsing.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Unexpected internal condition such as an unparseable identity.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// I/O error while binding or serving the listener.
    ///
    /// Only raised during startup and shutdown, outside of request handling.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, body `{errors: [...]}`
/// - 404 Not Found - For `NotFound`, body `{message}`
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorsDto::from(errors)),
            )
                .into_response(),
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageDto { message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Classifies application errors for GraphQL clients.
///
/// GraphQL has no status code, so the classification travels in `extensions.code`:
/// - `BAD_USER_INPUT` - Validation failure, with the field list under `extensions.errors`
/// - `NOT_FOUND` - No document for the requested identity
/// - `INTERNAL_SERVER_ERROR` - Everything else; the detail is logged, not returned
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        match self {
            Self::Validation(errors) => {
                let dto = ValidationErrorsDto::from(errors.clone());
                let fields = async_graphql::to_value(dto.errors).unwrap_or_default();

                async_graphql::Error::new("Validation failed").extend_with(|_, ext| {
                    ext.set("code", "BAD_USER_INPUT");
                    ext.set("errors", fields.clone());
                })
            }
            Self::NotFound(message) => async_graphql::Error::new(message.as_str())
                .extend_with(|_, ext| ext.set("code", "NOT_FOUND")),
            err => {
                tracing::error!("{}", err);

                async_graphql::Error::new("Internal server error")
                    .extend_with(|_, ext| ext.set("code", "INTERNAL_SERVER_ERROR"))
            }
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
///
/// # Arguments
/// - `E` - Any type that implements `Display` (typically an error type)
///
/// # Returns
/// A 500 Internal Server Error response with a generic error message JSON body
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
