//! The carledger contract: car state transitions, range aggregation, and the
//! invocation router, all executed against the [`carledger_ledger::Ledger`]
//! adapter.

pub mod aggregate;
pub mod cars;
pub mod router;

pub use cars::CarRegistry;
pub use router::dispatch;
