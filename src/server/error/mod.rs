//! Error types for the agrispray server.
//!
//! Domain-specific errors (authentication, configuration, validation) are aggregated
//! into a single [`Error`]. Every error implements `IntoResponse` so handlers can
//! return `Result<impl IntoResponse, Error>` and propagate with `?`.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Main error type for the agrispray server.
///
/// Uses `thiserror`'s `#[from]` so the `?` operator converts underlying errors.
/// Persistence failures are never retried and surface as 500 responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request body failed a write-time rule.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A referenced record does not exist.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in agrispray's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized / 403 Forbidden - For authentication failures
/// - 404 Not Found - For missing records
/// - 422 Unprocessable Entity - For validation failures
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource = %resource, id = %id, "Requested record not found");

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{} not found", resource),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so that
/// implementation details are not leaked.
pub struct InternalServerError<E>(pub E);

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
