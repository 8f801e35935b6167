//! Application-level error type for HTTP handlers.
//!
//! Wraps [`CoreError`] and implements [`IntoResponse`] so every failure
//! produces the invocation error envelope with a per-variant HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use carledger_core::error::CoreError;

use crate::invocation::InvocationResponse;

/// A domain error on its way out as an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Core(core) = self;

        let status = match &core {
            CoreError::MalformedCredential(_) => StatusCode::UNAUTHORIZED,
            CoreError::Forbidden { .. } => StatusCode::FORBIDDEN,
            CoreError::UnknownOperation(_) | CoreError::InvalidArguments { .. } => {
                StatusCode::BAD_REQUEST
            }
            CoreError::Restricted { .. } => StatusCode::CONFLICT,
            CoreError::StoreUnavailable(_)
            | CoreError::AggregationFailed(_)
            | CoreError::EncodingFailed(_) => {
                tracing::error!(error = %core, "invocation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(InvocationResponse::error(core.to_string()))).into_response()
    }
}
