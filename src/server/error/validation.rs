use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{field} must be between {min} and {max} characters long")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0}")]
    Rule(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request body: {}", self);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
