//! Ordered in-memory ledger backend.
//!
//! Backed by a `BTreeMap`, so range scans yield lexicographic key order.
//! Used by the development binary and by every test; the production ledger
//! is an external system reached through the same [`Ledger`] trait.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Ledger, LedgerCursor, LedgerEntry, LedgerError};

/// In-memory ordered key-value store.
#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    entries: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys. Test convenience.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl Ledger for MemoryLedger {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn LedgerCursor>, LedgerError> {
        // Snapshot under the read lock; the cursor then iterates without
        // holding any lock, so a slow consumer cannot block writers.
        let snapshot: Vec<LedgerEntry> = self
            .entries
            .read()
            .await
            .range(start.to_string()..end.to_string())
            .map(|(key, value)| LedgerEntry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();
        tracing::debug!(start, end, entries = snapshot.len(), "opened range cursor");
        Ok(Box::new(MemoryCursor {
            entries: snapshot.into_iter(),
        }))
    }

    async fn ping(&self) -> Result<(), LedgerError> {
        Ok(())
    }
}

/// Cursor over a snapshot of the map taken at scan-open time.
struct MemoryCursor {
    entries: std::vec::IntoIter<LedgerEntry>,
}

#[async_trait]
impl LedgerCursor for MemoryCursor {
    async fn next(&mut self) -> Result<Option<LedgerEntry>, LedgerError> {
        Ok(self.entries.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_none_for_missing_key() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.get("CAR0").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let ledger = MemoryLedger::new();
        ledger.put("CAR0", b"hello".to_vec()).await.unwrap();
        assert_eq!(ledger.get("CAR0").await.unwrap(), Some(b"hello".to_vec()));
    }

    #[tokio::test]
    async fn put_overwrites_unconditionally() {
        let ledger = MemoryLedger::new();
        ledger.put("CAR0", b"first".to_vec()).await.unwrap();
        ledger.put("CAR0", b"second".to_vec()).await.unwrap();
        assert_eq!(ledger.get("CAR0").await.unwrap(), Some(b"second".to_vec()));
        assert_eq!(ledger.len().await, 1);
    }

    #[tokio::test]
    async fn range_yields_lexicographic_order_over_half_open_bounds() {
        let ledger = MemoryLedger::new();
        for key in ["CAR2", "CAR0", "CAR1", "CAR999", "TRUCK0"] {
            ledger.put(key, key.as_bytes().to_vec()).await.unwrap();
        }

        let mut cursor = ledger.range("CAR0", "CAR999").await.unwrap();
        let mut keys = Vec::new();
        while let Some(entry) = cursor.next().await.unwrap() {
            keys.push(entry.key);
        }

        // End bound is exclusive; keys outside the CAR prefix family are
        // not in range.
        assert_eq!(keys, vec!["CAR0", "CAR1", "CAR2"]);
    }

    #[tokio::test]
    async fn exhausted_cursor_keeps_returning_none() {
        let ledger = MemoryLedger::new();
        ledger.put("CAR0", b"x".to_vec()).await.unwrap();
        let mut cursor = ledger.range("CAR0", "CAR999").await.unwrap();
        assert!(cursor.next().await.unwrap().is_some());
        assert!(cursor.next().await.unwrap().is_none());
        assert!(cursor.next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn cursor_reads_a_snapshot_not_live_state() {
        let ledger = MemoryLedger::new();
        ledger.put("CAR0", b"x".to_vec()).await.unwrap();
        let mut cursor = ledger.range("CAR0", "CAR999").await.unwrap();
        ledger.put("CAR1", b"y".to_vec()).await.unwrap();

        let mut count = 0;
        while cursor.next().await.unwrap().is_some() {
            count += 1;
        }
        assert_eq!(count, 1);
    }
}
