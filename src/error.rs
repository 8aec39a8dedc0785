// src/error.rs
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

use crate::database::StoreError;
use crate::views::escape;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Store(e) => {
                tracing::error!(error = %e, "Store request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error occurred".to_string())
            }
            AppError::Config(msg) => {
                tracing::error!(%msg, "Configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server misconfigured".to_string())
            }
        };

        let body = Html(format!(r#"<p class="error">{}</p>"#, escape(&error_message)));

        (status, body).into_response()
    }
}
