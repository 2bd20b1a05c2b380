//! Error types for Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    models::view::{ERROR_VIEW, NOT_FOUND_VIEW},
    repository::StoreError,
};

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid page: {0:?}")]
    InvalidPageToken(String),

    #[error("Page {page} is out of range ({pages} pages)")]
    PageOutOfRange { page: u64, pages: u64 },

    #[error("Book {0} not found")]
    RecordNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(e) => AppError::Database(e),
            StoreError::NotFound => AppError::RecordNotFound("record".to_string()),
            StoreError::Validation(messages) => {
                AppError::Internal(format!("Unhandled validation failure: {}", messages.join(", ")))
            }
            StoreError::Other(msg) => AppError::Internal(msg),
        }
    }
}

/// Error page context
#[derive(Serialize)]
pub struct ErrorPage {
    pub status: u16,
    pub message: String,
}

/// Rendered error document
#[derive(Serialize)]
pub struct ErrorResponse {
    pub view: &'static str,
    pub context: ErrorPage,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            AppError::NotFound(path) => {
                tracing::info!("404: {}", path);
                "Page not found".to_string()
            }
            other => {
                tracing::warn!("500: {}", other);
                other.to_string()
            }
        };

        let view = if status == StatusCode::NOT_FOUND {
            NOT_FOUND_VIEW
        } else {
            ERROR_VIEW
        };

        let body = Json(ErrorResponse {
            view,
            context: ErrorPage {
                status: status.as_u16(),
                message,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
