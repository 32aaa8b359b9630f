//! Error handling.
//!
//! One application-wide error enum, converted into HTTP responses by the
//! `IntoResponse` impl so handlers can return `AppResult<T>` and use `?`.
//!
//! A deliberate quirk of the API contract: duplicate registrations and other
//! persistence failures surface as 500 with the error detail in the body
//! rather than a 409. That matches the contract this service replaces;
//! callers depend on it, so it is preserved here rather than normalized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database errors (sqlx). Surfaced as 500 with the error detail —
    /// the existing contract returns the raw persistence error to the
    /// caller. Acceptable for an internal tool; a known leakage risk.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt hashing/verification errors (e.g. a malformed stored hash).
    /// A plain password mismatch is *not* an error; see `password::verify`.
    #[error("Hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Session read/write errors from tower-sessions.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Duplicate username on registration. Mapped to 500, not 409,
    /// to preserve the existing API contract.
    #[error("{0}")]
    Conflict(String),

    /// Malformed input (400).
    #[error("{0}")]
    BadRequest(String),

    /// Bad credentials or missing session (401). The message is a fixed
    /// safe string; it never distinguishes unknown users from wrong
    /// passwords.
    #[error("{0}")]
    Unauthorized(String),

    /// Unexpected internal errors (500).
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Hash(e) => {
                tracing::error!("Hash error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Session(e) => {
                tracing::error!("Session error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Session error".to_string(),
                )
            }
            AppError::Conflict(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Internal(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        // Error body shape: { "message": "..." }
        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Convenience alias for handler and storage results.
pub type AppResult<T> = Result<T, AppError>;
