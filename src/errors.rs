//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. Status codes are assigned
//! here and nowhere else; services only raise variants.

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// No post exists for the requested id
    #[error("{0}")]
    NotFound(String),

    /// Submitted password does not match the stored hash
    #[error("password does not match")]
    InvalidPassword,

    /// One or more request fields failed static constraints
    #[error("validation failed")]
    Validation(HashMap<String, String>),

    /// Malformed request outside field validation (bad JSON, missing header)
    #[error("{0}")]
    BadRequest(String),

    /// Any underlying persistence failure; never retried
    #[error("database error")]
    Database(#[from] sea_orm::DbErr),

    /// Internal failures (hashing errors and the like)
    #[error("{0}")]
    Internal(String),
}

/// Error body shape: `{"msg": "<human-readable message>"}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    msg: String,
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidPassword => StatusCode::FORBIDDEN,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Field validation failures keep the field -> message map
            AppError::Validation(fields) => {
                (StatusCode::BAD_REQUEST, Json(fields)).into_response()
            }
            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                let body = ErrorBody {
                    msg: "a database error occurred".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                let body = ErrorBody {
                    msg: "an internal error occurred".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            other => {
                let body = ErrorBody {
                    msg: other.to_string(),
                };
                (other.status(), Json(body)).into_response()
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_boundary_contract() {
        assert_eq!(
            AppError::not_found("no post found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::InvalidPassword.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::Validation(HashMap::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::bad_request("password header is required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_password_message_is_fixed() {
        assert_eq!(
            AppError::InvalidPassword.to_string(),
            "password does not match"
        );
    }

    #[test]
    fn not_found_response_has_msg_body() {
        let response = AppError::not_found("no post found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
