//! HTTP error mapping to `{"error": message}` bodies

use crate::contract::OutcomesError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error response for the REST API
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected path parameter");
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected query string");
        Self::bad_request(rejection.body_text())
    }
}

impl From<OutcomesError> for ApiError {
    fn from(error: OutcomesError) -> Self {
        map_domain_error(error)
    }
}

/// Map domain errors to HTTP statuses
pub fn map_domain_error(error: OutcomesError) -> ApiError {
    let status = match &error {
        OutcomesError::Validation { .. } => StatusCode::BAD_REQUEST,
        OutcomesError::NotFound { .. } => StatusCode::NOT_FOUND,
        OutcomesError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        OutcomesError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    ApiError::new(status, error.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_statuses() {
        let cases = [
            (OutcomesError::validation("Missing required field: year"), StatusCode::BAD_REQUEST),
            (OutcomesError::not_found("submission", 9), StatusCode::NOT_FOUND),
            (OutcomesError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                OutcomesError::Storage {
                    message: "no such table: outcomes".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(map_domain_error(error).status, status);
        }
    }

    #[test]
    fn storage_message_is_surfaced_verbatim() {
        let err = map_domain_error(OutcomesError::Storage {
            message: "FOREIGN KEY constraint failed".into(),
        });
        assert_eq!(err.message, "FOREIGN KEY constraint failed");
    }
}
