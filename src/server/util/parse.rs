use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;

use crate::server::{
    error::{internal::InternalError, AppError},
    validation::ValidationErrors,
};

/// Parses a document identity from a path segment or GraphQL `ID`
///
/// # Arguments
/// - `value` - The string to attempt to parse into an `i32` identity
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed identity
/// - `Err(AppError::Internal(ParseStringId))` - The value is not a well-formed
///   identity
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    let id = value
        .parse::<i32>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(id)
}

/// Unwraps an extracted JSON body, turning an extractor rejection into a `body`
/// validation error.
///
/// A missing `Content-Type` or a syntax error is reported with the same 400
/// `{errors}` shape as a failed field rule.
pub fn parse_json(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ValidationErrors::single("body", rejection.body_text()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_identity() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn rejects_malformed_identity_as_internal_error() {
        let result = parse_id("not-an-id");

        assert!(matches!(
            result,
            Err(AppError::Internal(InternalError::ParseStringId { .. }))
        ));
    }
}
