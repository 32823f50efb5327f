/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>` which converts automatically
/// into the failure envelope `{ "message": …, "errors": […] }`.
///
/// Status mapping:
///
/// - validation failures and duplicate unique fields → 400
/// - bad credentials → 401
/// - entity not found → 404
/// - anything unexpected → 400 with a fixed message; internal detail is
///   logged, never sent to the client
///
/// The `errors` field is present only when there are field-scoped
/// violations, and is always a list when present.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) with a message and no field detail
    BadRequest(String),

    /// Validation failure (400) with per-field violations
    Validation(Vec<FieldError>),

    /// Duplicate unique field (400, field-scoped) - e.g. username taken
    Duplicate {
        message: String,
        field: String,
        field_message: String,
    },

    /// Authentication failure (401) - bad credential
    Unauthorized {
        message: String,
        field: String,
        field_message: String,
    },

    /// Entity not found (404); the message names the lookup key
    NotFound(String),

    /// Unexpected failure - flattened to a generic 400, detail logged only
    Internal(String),
}

/// A single field-scoped violation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field that failed
    pub field: String,

    /// Human-readable message
    pub message: String,
}

/// Failure envelope format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,

    /// Field-scoped violations, when any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Validation(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
            ApiError::Duplicate { message, .. } => write!(f, "Duplicate: {}", message),
            ApiError::Unauthorized { message, .. } => write!(f, "Unauthorized: {}", message),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "validation failed".to_string(),
                Some(errors),
            ),
            ApiError::Duplicate {
                message,
                field,
                field_message,
            } => (
                StatusCode::BAD_REQUEST,
                message,
                Some(vec![FieldError {
                    field,
                    message: field_message,
                }]),
            ),
            ApiError::Unauthorized {
                message,
                field,
                field_message,
            } => (
                StatusCode::UNAUTHORIZED,
                message,
                Some(vec![FieldError {
                    field,
                    message: field_message,
                }]),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::Internal(msg) => {
                // Never expose internal detail to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    "request could not be processed".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse { message, errors });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
///
/// Unique-constraint hits map to the field-scoped duplicate shape so a
/// concurrent double-insert that slips past the service's pre-check still
/// produces the same client-visible error. Everything else is internal.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("username") {
                        return ApiError::Duplicate {
                            message: "account with this username already exists".to_string(),
                            field: "username".to_string(),
                            field_message: "this username is already in use".to_string(),
                        };
                    }
                    if constraint.contains("email") {
                        return ApiError::Duplicate {
                            message: "account with this email address already exists".to_string(),
                            field: "email_address".to_string(),
                            field_message: "this email address is already in use".to_string(),
                        };
                    }
                }

                ApiError::Internal(format!("Database error: {}", db_err))
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert validator errors to the per-field violation list
///
/// Every violation is reported, not just the first; fields are ordered by
/// name so the list is deterministic.
impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut errors: Vec<FieldError> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "validation failed".to_string()),
                })
            })
            .collect();
        errors.sort_by(|a, b| a.field.cmp(&b.field));

        ApiError::Validation(errors)
    }
}

/// Convert password errors to API errors
impl From<ticklist_shared::auth::password::PasswordError> for ApiError {
    fn from(err: ticklist_shared::auth::password::PasswordError) -> Self {
        ApiError::Internal(format!("Password operation failed: {}", err))
    }
}
