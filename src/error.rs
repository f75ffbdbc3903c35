use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                // Unique-constraint violations surface as 409 so the API never
                // leaks a raw driver error for a duplicate username or email.
                // SQLite reports code 2067, Postgres 23505.
                if let Some(db_err) = e.as_database_error() {
                    let code = db_err.code().unwrap_or_default();
                    if code == "2067" || code == "23505" {
                        return (
                            StatusCode::CONFLICT,
                            Json(json!({ "error": "A record with these values already exists" })),
                        ).into_response();
                    }
                }

                error!("Unhandled database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong".to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
