use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

use crate::embedding::EmbeddingError;

/// Application error taxonomy. Everything is caught at the request boundary
/// and converted to a structured response; 5xx detail stays in the server log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("database error")]
    Database(#[from] DbErr),

    #[error("malformed item document")]
    Decode(#[from] serde_json::Error),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("embedding service unavailable")]
    Embedding(#[from] EmbeddingError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Embedding(_) => StatusCode::BAD_GATEWAY,
            AppError::MissingEnv(_) | AppError::Database(_) | AppError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingEnv(_) => "CONFIGURATION_ERROR",
            AppError::Database(_) | AppError::Decode(_) => "QUERY_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Embedding(_) => "EMBEDDING_UNAVAILABLE",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::BadRequest(message) => message.clone(),
            AppError::Embedding(_) => "Embedding service unavailable".to_string(),
            _ => "Failed to fetch items".to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(detail = %self, "request failed");
        }
        (
            status,
            Json(ErrorBody {
                error: self.error_code(),
                message: self.client_message(),
            }),
        )
            .into_response()
    }
}
