//! Route definitions for the invocation endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::invoke;
use crate::state::AppState;

/// Routes mounted under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/invoke", post(invoke::invoke))
}
