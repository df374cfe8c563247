use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Pantry(#[from] cookable_shared::Error),

    #[error("{0}")]
    InvalidJson(#[from] JsonRejection),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InvalidJson(rejection) => (rejection.status(), rejection.body_text()),
            AppError::Pantry(cookable_shared::Error::Validate(errors)) => {
                (StatusCode::BAD_REQUEST, errors.to_string())
            }
            AppError::Pantry(cookable_shared::Error::Invalid(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Pantry(cookable_shared::Error::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
            AppError::Pantry(cookable_shared::Error::Server(msg)) => {
                tracing::error!("Server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Pantry(cookable_shared::Error::Unknown(e)) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
