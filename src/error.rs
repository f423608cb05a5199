use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Material not found"),
            AppError::Database(e) => {
                error!("database error: {}", e);
                // detail stays in the log, never in the response body
                (StatusCode::INTERNAL_SERVER_ERROR, "Error accessing database")
            }
        };

        (status, message).into_response()
    }
}
