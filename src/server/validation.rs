//! Declarative field rules for request bodies.
//!
//! Each entity declares a table of [`FieldRule`]s mapping a JSON field name to an
//! ordered list of [`Check`]s. The evaluator walks every rule in the table: the first
//! failing check of a field contributes its message, and the remaining fields are
//! still checked so the client sees every offending field at once.
//!
//! REST handlers evaluate the raw JSON body; GraphQL resolvers serialize their input
//! object back to JSON and evaluate the same tables.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::{
    model::api::{FieldErrorDto, ValidationErrorsDto},
    server::error::AppError,
};

static ALPHABETIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
static ALPHABETIC_WITH_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());
static MISSING: Value = Value::Null;

/// Which fields must be present for the evaluation to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every non-optional field must be present and valid.
    Create,
    /// Only fields present in the body are checked (merge-patch updates).
    Update,
}

/// A single predicate paired with the message reported when it fails.
pub struct Check {
    pub predicate: fn(&Value) -> bool,
    pub message: &'static str,
}

impl Check {
    pub const fn new(predicate: fn(&Value) -> bool, message: &'static str) -> Self {
        Self { predicate, message }
    }
}

/// Ordered checks for one field of the request body.
pub struct FieldRule {
    pub field: &'static str,
    pub optional: bool,
    pub checks: &'static [Check],
}

impl FieldRule {
    pub const fn required(field: &'static str, checks: &'static [Check]) -> Self {
        Self {
            field,
            optional: false,
            checks,
        }
    }

    pub const fn optional(field: &'static str, checks: &'static [Check]) -> Self {
        Self {
            field,
            optional: true,
            checks,
        }
    }

    /// Returns the message of the first failing check, if any.
    fn first_failure(&self, value: &Value) -> Option<&'static str> {
        self.checks
            .iter()
            .find(|check| !(check.predicate)(value))
            .map(|check| check.message)
    }
}

pub const DANCER_RULES: &[FieldRule] = &[
    FieldRule::required(
        "firstName",
        &[
            Check::new(is_string, "First name must be a string"),
            Check::new(
                is_alphabetic,
                "First name should only contain alphabetic characters",
            ),
        ],
    ),
    FieldRule::required(
        "lastName",
        &[
            Check::new(is_string, "Last name must be a string"),
            Check::new(
                is_alphabetic,
                "Last name should only contain alphabetic characters",
            ),
        ],
    ),
    FieldRule::required(
        "age",
        &[Check::new(is_non_negative_int, "Age must be a positive integer")],
    ),
];

pub const DANCE_CLASS_RULES: &[FieldRule] = &[
    FieldRule::required(
        "name",
        &[
            Check::new(is_string, "Dance class name must be a string"),
            Check::new(
                is_alphabetic_with_spaces,
                "Dance class name should only contain alphabetic characters",
            ),
        ],
    ),
    FieldRule::required(
        "semester",
        &[Check::new(is_string, "Semester must be a string")],
    ),
    FieldRule::required(
        "teacher",
        &[Check::new(is_string, "Teacher name must be a string")],
    ),
    FieldRule::optional(
        "teachingAssistant",
        &[Check::new(is_string, "Teaching Assistant name must be a string")],
    ),
    FieldRule::required(
        "classLength",
        &[Check::new(
            is_positive_int,
            "Class length must be a positive integer",
        )],
    ),
    FieldRule::required(
        "classType",
        &[Check::new(is_string, "Class type must be a string")],
    ),
    FieldRule::required(
        "location",
        &[Check::new(is_string, "Location must be a string")],
    ),
    FieldRule::required(
        "daysOfWeek",
        &[
            Check::new(is_array, "Days of the week must be an array of strings"),
            Check::new(every_element_is_string, "Each day must be a string"),
            Check::new(is_non_empty_array, "Days of the week must include at least one day"),
        ],
    ),
    FieldRule::optional(
        "dancers",
        &[
            Check::new(is_array, "Dancers must be an array of objects"),
            Check::new(
                every_element_is_enrolled_dancer,
                "Each dancer must have a valid firstName, lastName, and age",
            ),
        ],
    ),
];

/// A rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field that failed validation for one request body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed for {} field(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Creates an error list holding a single field error.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError {
            field: field.into(),
            message: message.into(),
        }])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the rejected fields in rule-table order.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }
}

impl From<ValidationErrors> for ValidationErrorsDto {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            errors: errors
                .0
                .into_iter()
                .map(|e| FieldErrorDto {
                    field: e.field,
                    message: e.message,
                })
                .collect(),
        }
    }
}

/// Evaluates a rule table against a raw JSON body.
///
/// A missing optional field (or one explicitly set to `null`) is skipped. A missing
/// required field is skipped in `Mode::Update` and otherwise evaluated as `null`, so
/// it reports the message of its first check.
///
/// # Arguments
/// - `rules` - Rule table for the target entity
/// - `input` - Raw request body
/// - `mode` - Whether absent required fields are errors
///
/// # Returns
/// - `Ok(())` - Every checked field passed
/// - `Err(ValidationErrors)` - One entry per failing field, in rule-table order
pub fn validate(rules: &[FieldRule], input: &Value, mode: Mode) -> Result<(), ValidationErrors> {
    let Some(body) = input.as_object() else {
        return Err(ValidationErrors::single(
            "body",
            "Request body must be a JSON object",
        ));
    };

    let errors: Vec<FieldError> = rules
        .iter()
        .filter_map(|rule| {
            let value = match body.get(rule.field) {
                None | Some(Value::Null) if rule.optional => return None,
                None if mode == Mode::Update => return None,
                None => &MISSING,
                Some(value) => value,
            };

            rule.first_failure(value).map(|message| FieldError {
                field: rule.field.to_string(),
                message: message.to_string(),
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Validates a raw body and then deserializes it into the typed request DTO.
///
/// # Returns
/// - `Ok(T)` - Body passed every rule and matched the DTO shape
/// - `Err(AppError::Validation)` - Rule failures, or a body the DTO cannot represent
pub fn parse_body<T: DeserializeOwned>(
    rules: &[FieldRule],
    body: Value,
    mode: Mode,
) -> Result<T, AppError> {
    validate(rules, &body, mode)?;

    serde_json::from_value(body)
        .map_err(|e| ValidationErrors::single("body", e.to_string()).into())
}

fn is_string(value: &Value) -> bool {
    value.is_string()
}

fn is_alphabetic(value: &Value) -> bool {
    value.as_str().is_some_and(|s| ALPHABETIC.is_match(s))
}

fn is_alphabetic_with_spaces(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| ALPHABETIC_WITH_SPACES.is_match(s))
}

/// Integer that fits the stored column and is at least `min`.
fn is_int_at_least(value: &Value, min: i32) -> bool {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .is_some_and(|n| n >= min)
}

fn is_non_negative_int(value: &Value) -> bool {
    is_int_at_least(value, 0)
}

fn is_positive_int(value: &Value) -> bool {
    is_int_at_least(value, 1)
}

fn is_array(value: &Value) -> bool {
    value.is_array()
}

fn is_non_empty_array(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

fn every_element_is_string(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

fn every_element_is_enrolled_dancer(value: &Value) -> bool {
    let non_empty = |v: Option<&Value>| v.and_then(Value::as_str).is_some_and(|s| !s.is_empty());

    value.as_array().is_some_and(|items| {
        items.iter().all(|dancer| {
            non_empty(dancer.get("firstName"))
                && non_empty(dancer.get("lastName"))
                && dancer.get("age").is_some_and(|age| is_int_at_least(age, 0))
        })
    })
}
