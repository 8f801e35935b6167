//! Range-scan aggregation.

use carledger_core::car::{Car, RangeEntry};
use carledger_core::error::{CoreError, CoreResult};
use carledger_ledger::LedgerCursor;

/// Drain a range cursor into one ordered list of key/record pairs.
///
/// Entries keep the order the cursor yields them. Aggregation is fail-fast:
/// a single undecodable record aborts the whole scan with
/// `AggregationFailed` instead of skipping the entry. The cursor is dropped
/// on every exit path, releasing the scan.
pub async fn collect_range(mut cursor: Box<dyn LedgerCursor>) -> CoreResult<Vec<RangeEntry>> {
    let mut entries = Vec::new();
    while let Some(item) = cursor.next().await? {
        let record: Car = serde_json::from_slice(&item.value).map_err(|e| {
            CoreError::AggregationFailed(format!(
                "record at {} is not decodable: {e}",
                item.key
            ))
        })?;
        entries.push(RangeEntry {
            key: item.key,
            record,
        });
    }
    Ok(entries)
}
