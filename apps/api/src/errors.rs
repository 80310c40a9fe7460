use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Scoring itself never fails; every variant here belongs to the request
/// boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// A request the extractor refused before it reached a handler
    /// (body too large, wrong content type). Keeps the extractor's status.
    #[error("Rejected request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected { status, .. } => *status,
        }
    }

    fn code(&self) -> String {
        match self {
            AppError::NotFound(_) => "NOT_FOUND".to_string(),
            AppError::Validation(_) => "VALIDATION_ERROR".to_string(),
            AppError::UnprocessableEntity(_) => "UNPROCESSABLE_ENTITY".to_string(),
            AppError::Rejected { status, .. } => status
                .canonical_reason()
                .unwrap_or("BAD_REQUEST")
                .to_uppercase()
                .replace(' ', "_"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        let message = match self {
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::UnprocessableEntity(msg)
            | AppError::Rejected { message: msg, .. } => msg,
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
