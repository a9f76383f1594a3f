use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gymdesk_session::SessionError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid request body: {0}")]
    InvalidInput(#[from] JsonRejection),

    #[error("Session error: {0}")]
    SessionError(#[from] SessionError),

    #[error("Password hashing error: {0}")]
    PasswordError(String),

    #[error("Template error: {0}")]
    TemplateError(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::InvalidInput(rejection) => (rejection.status(), rejection.body_text()),
            AppError::SessionError(e) => {
                tracing::error!("Session error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
            AppError::PasswordError(e) => {
                tracing::error!("Password hashing error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
            AppError::TemplateError(e) => {
                tracing::error!("Failed to render page: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
