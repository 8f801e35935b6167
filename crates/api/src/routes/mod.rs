pub mod health;
pub mod invoke;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST /invoke    run one ledger invocation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(invoke::router())
}
