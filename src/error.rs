//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for every failure an I/O-performing operation can
//! report. Components absorb these at their boundary (empty lists, `None`,
//! guidance strings, HTML fragments), so handlers only return an error for
//! a request body that does not deserialize.
//!
//! Error mappings:
//! - `InvalidInput` → 400
//! - `Http`, `Upstream`, `Inference` → 502
//! - `Json`, `Notebook`, `Internal` → 500

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {url}")]
    Upstream { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Notebook error: {0}")]
    Notebook(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Http(_) | AppError::Upstream { .. } | AppError::Inference(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Json(_) | AppError::Notebook(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
