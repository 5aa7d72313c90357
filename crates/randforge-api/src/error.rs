//! Randforge API — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use randforge_core::error::RandomError;
use serde::Serialize;
use thiserror::Error;

/// Startup errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration file or an environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// Request-handling errors, convertible into HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request violated a sampler, selector or dice contract.
    #[error(transparent)]
    Random(#[from] RandomError),

    /// The shared engine could not be locked.
    #[error("engine unavailable: {0}")]
    EngineUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Self::Random(RandomError::InvalidArgument(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_argument")
            }
            Self::Random(RandomError::Parse { .. }) => (StatusCode::BAD_REQUEST, "parse_error"),
            Self::Random(RandomError::Capacity { .. }) => {
                (StatusCode::BAD_REQUEST, "capacity_error")
            }
            Self::EngineUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "engine_unavailable")
            }
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
