use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request is missing a bearer token")]
    MissingToken,
    #[error("Bearer token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("Bearer token subject {0:?} is not a user ID")]
    InvalidSubject(String),
    #[error("User {user_id} lacks a role permitted to {action}")]
    AccessDenied { user_id: i32, action: &'static str },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::InvalidSubject(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
