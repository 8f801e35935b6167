//! Car state transitions against the ledger.
//!
//! Every mutation is a get-modify-put with no optimistic-concurrency check:
//! writes overwrite unconditionally and the hosting runtime is assumed to
//! serialize invocations per key. A missing key is not an error on any path
//! here; reads of absent records start from [`Car::default()`], matching the
//! store's read-miss contract, while genuine backend failures always
//! propagate as `StoreUnavailable`.

use carledger_core::car::{Car, RangeEntry};
use carledger_core::error::{CoreError, CoreResult};
use carledger_ledger::Ledger;

use crate::aggregate::collect_range;

/// First key of the seeded car family.
const SCAN_START: &str = "CAR0";
/// Exclusive end of the bulk-scan range.
const SCAN_END: &str = "CAR999";

/// State transitions for car records.
pub struct CarRegistry;

impl CarRegistry {
    /// Write a new unrestricted car at `key`, overwriting any existing
    /// record without conflict detection.
    pub async fn create_car(
        ledger: &dyn Ledger,
        key: &str,
        make: &str,
        model: &str,
        color: &str,
        owner: &str,
    ) -> CoreResult<()> {
        let car = Car::new(make, model, color, owner);
        Self::write(ledger, key, &car).await?;
        tracing::debug!(key, owner, "car created");
        Ok(())
    }

    /// Seed `CAR0`..`CAR9` with the fixed development data set, each write
    /// overwriting unconditionally.
    pub async fn init_ledger(ledger: &dyn Ledger) -> CoreResult<()> {
        for (i, car) in seed_cars().iter().enumerate() {
            let key = format!("CAR{i}");
            Self::write(ledger, &key, car).await?;
            tracing::debug!(key, make = %car.make, "seeded car");
        }
        Ok(())
    }

    /// Point read, returning the stored bytes verbatim.
    ///
    /// A missing key yields an empty payload; it is not distinguishable
    /// from a record whose fields are all empty, and that is deliberate.
    pub async fn query_car(ledger: &dyn Ledger, key: &str) -> CoreResult<Vec<u8>> {
        let bytes = ledger.get(key).await?.unwrap_or_default();
        tracing::debug!(key, bytes = bytes.len(), "car queried");
        Ok(bytes)
    }

    /// Transfer ownership. Fails with `Restricted` (echoing the stored
    /// reason) while the record's transfer lock is set.
    pub async fn change_owner(
        ledger: &dyn Ledger,
        key: &str,
        new_owner: &str,
    ) -> CoreResult<()> {
        let mut car = Self::read_or_default(ledger, key).await?;
        if car.restricted {
            tracing::debug!(key, reason = %car.reason, "ownership transfer blocked");
            return Err(CoreError::Restricted {
                reason: car.reason,
            });
        }
        car.owner = new_owner.to_string();
        Self::write(ledger, key, &car).await?;
        tracing::debug!(key, new_owner, "car owner changed");
        Ok(())
    }

    /// Set the transfer lock and its reason. Idempotent: restricting an
    /// already-restricted car simply rewrites the reason.
    pub async fn add_restriction(
        ledger: &dyn Ledger,
        key: &str,
        reason: &str,
    ) -> CoreResult<()> {
        let mut car = Self::read_or_default(ledger, key).await?;
        car.restricted = true;
        car.reason = reason.to_string();
        Self::write(ledger, key, &car).await?;
        tracing::debug!(key, reason, "restriction added");
        Ok(())
    }

    /// Clear the transfer lock and its reason. Idempotent.
    pub async fn remove_restriction(ledger: &dyn Ledger, key: &str) -> CoreResult<()> {
        let mut car = Self::read_or_default(ledger, key).await?;
        car.restricted = false;
        car.reason = String::new();
        Self::write(ledger, key, &car).await?;
        tracing::debug!(key, "restriction removed");
        Ok(())
    }

    /// Scan the whole car family and aggregate it into one ordered list.
    pub async fn query_all(ledger: &dyn Ledger) -> CoreResult<Vec<RangeEntry>> {
        let cursor = ledger.range(SCAN_START, SCAN_END).await?;
        let entries = collect_range(cursor).await?;
        tracing::debug!(entries = entries.len(), "all cars queried");
        Ok(entries)
    }

    async fn read_or_default(ledger: &dyn Ledger, key: &str) -> CoreResult<Car> {
        match ledger.get(key).await? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                CoreError::EncodingFailed(format!("record at {key} is not decodable: {e}"))
            }),
            None => Ok(Car::default()),
        }
    }

    async fn write(ledger: &dyn Ledger, key: &str, car: &Car) -> CoreResult<()> {
        let bytes = serde_json::to_vec(car)
            .map_err(|e| CoreError::EncodingFailed(e.to_string()))?;
        ledger.put(key, bytes).await?;
        Ok(())
    }
}

/// The fixed ten-car seed data set.
fn seed_cars() -> [Car; 10] {
    [
        Car::new("Toyota", "Prius", "blue", "Tomoko"),
        Car::new("Ford", "Mustang", "red", "Brad"),
        Car::new("Hyundai", "Tucson", "green", "Jin Soo"),
        Car::new("Volkswagen", "Passat", "yellow", "Max"),
        Car::new("Tesla", "S", "black", "Adriana"),
        Car::new("Peugeot", "205", "purple", "Michel"),
        Car::new("Chery", "S22L", "white", "Aarav"),
        Car::new("Fiat", "Punto", "violet", "Pari"),
        Car::new("Tata", "Nano", "indigo", "Valeria"),
        Car::new("Holden", "Barina", "brown", "Shotaro"),
    ]
}
