use std::sync::Arc;

use carledger_core::operations::AuthzPolicy;
use carledger_ledger::Ledger;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The ledger backend.
    pub ledger: Arc<dyn Ledger>,
    /// Role-to-organization authorization policy, built once at startup.
    pub policy: Arc<AuthzPolicy>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
