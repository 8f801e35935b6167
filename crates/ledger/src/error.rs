//! Ledger adapter errors.

use carledger_core::error::CoreError;

/// Failure of the underlying key-value backend.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The backend could not serve the request.
    #[error("ledger backend unavailable: {0}")]
    Unavailable(String),
}

impl From<LedgerError> for CoreError {
    fn from(err: LedgerError) -> Self {
        CoreError::StoreUnavailable(err.to_string())
    }
}
