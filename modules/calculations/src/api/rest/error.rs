use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Wire shape for every failure: one human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// HTTP-mapped error. The domain layer never sees this type; mapping
/// lives here alone.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let status = match e {
            DomainError::MissingToken
            | DomainError::IncompleteEquation
            | DomainError::DivisionByZero
            | DomainError::Construction(_) => StatusCode::BAD_REQUEST,
            DomainError::NoHistoryFound => StatusCode::NOT_FOUND,
            DomainError::Database(ref err) => {
                tracing::error!(error = %err, "Database error");
                return Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "An internal database error occurred".to_owned(),
                };
            }
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}
