use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shortify_shortener::ShortenerError;
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Shortener(ShortenerError::InvalidUrl(message)) => {
                (StatusCode::BAD_REQUEST, format!("invalid url: {message}"))
            }
            AppError::Shortener(ShortenerError::Storage(e)) => {
                error!(error = %e, "store failure while creating short url");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "store unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
