//! Narrow adapter interface to the external key-value ledger.
//!
//! The core consumes the ledger only through the [`Ledger`] trait: point
//! get, point put, and an ordered range scan exposed as a cursor. The real
//! ledger lives outside this process; [`MemoryLedger`] implements the same
//! contract in-process for local runs and tests.

pub mod error;
pub mod memory;

use async_trait::async_trait;

pub use error::LedgerError;
pub use memory::MemoryLedger;

/// One key/value pair yielded by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub key: String,
    pub value: Vec<u8>,
}

/// A range-scan cursor.
///
/// Yields entries one at a time in the backend's iteration order until
/// exhausted. The cursor owns its backend resources and releases them when
/// dropped, so every exit path (normal completion or mid-scan failure)
/// releases the scan.
#[async_trait]
pub trait LedgerCursor: Send {
    /// The next entry, or `None` when the scan is exhausted.
    async fn next(&mut self) -> Result<Option<LedgerEntry>, LedgerError>;
}

/// The key-value ledger as seen by the core.
///
/// Writes are unconditional overwrites: there is no compare-and-swap and no
/// version token. The hosting runtime is assumed to serialize concurrent
/// invocations; two racing writers on one key resolve last-writer-wins.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Point read. `None` means the key has never been written; that is not
    /// an error. Backend failures are errors and must never be conflated
    /// with a missing key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Point write, overwriting any existing value at `key`.
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Ordered scan over the half-open key range `[start, end)`.
    async fn range(&self, start: &str, end: &str)
        -> Result<Box<dyn LedgerCursor>, LedgerError>;

    /// Cheap liveness probe for health reporting.
    async fn ping(&self) -> Result<(), LedgerError>;
}
