//! Car record schema and wire shapes.
//!
//! This is the single source of truth for the persisted record encoding.
//! The lowercase field names on [`Car`] and the `Key`/`Record` names on
//! [`RangeEntry`] are the wire contract; external readers depend on them.

use serde::{Deserialize, Serialize};

/// A car record as stored in the ledger.
///
/// Records are keyed by an opaque string key (`CAR0`, `CAR1`, ... for the
/// seeded family) and overwritten last-writer-wins; there is no version
/// field. `reason` is non-empty iff `restricted` by convention, but that is
/// not enforced at write time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub make: String,
    pub model: String,
    pub color: String,
    /// Current owner display name. Transfer is blocked while `restricted`.
    pub owner: String,
    /// Ownership-transfer lock.
    pub restricted: bool,
    /// Human-readable justification for the restriction.
    pub reason: String,
}

impl Car {
    /// Build an unrestricted car.
    pub fn new(make: &str, model: &str, color: &str, owner: &str) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            color: color.to_string(),
            owner: owner.to_string(),
            restricted: false,
            reason: String::new(),
        }
    }
}

/// One entry of a bulk-read result: the ledger key paired with the decoded
/// record, in the order the scan cursor yielded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Record")]
    pub record: Car,
}
