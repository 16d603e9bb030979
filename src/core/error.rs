use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

pub const MODEL_UNAVAILABLE_DETAIL: &str = "Error connecting to AI model. Please try again.";
pub const INTERNAL_ERROR_DETAIL: &str = "An unexpected error occurred";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn configuration(message: String) -> Self {
        Self::Configuration(message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn model_unavailable(message: String) -> Self {
        Self::ModelUnavailable(message)
    }

    pub fn internal(message: String) -> Self {
        Self::Internal(message)
    }

    /// HTTP status paired with the user-facing detail. Input errors keep their
    /// specific message; server-side failures are reduced to a generic detail
    /// so backend diagnostics never reach the caller.
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            Self::InvalidInput(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::ModelUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                MODEL_UNAVAILABLE_DETAIL.to_string(),
            ),
            Self::Configuration(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_DETAIL.to_string(),
            ),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Full internal detail goes to the operator log; the response body
        // stays opaque for server-side failures.
        tracing::error!(error = %self, "request failed");

        let (status, detail) = self.status_and_detail();
        let body = Json(ErrorResponse { detail });

        (status, body).into_response()
    }
}
