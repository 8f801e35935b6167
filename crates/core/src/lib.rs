//! Carledger domain core.
//!
//! Shared building blocks used by every other crate: the car record schema,
//! the error taxonomy, caller identity extraction from X.509 credentials,
//! and the operation catalog with its authorization policy. This crate has
//! no I/O; everything here is pure data and pure functions.

pub mod car;
pub mod error;
pub mod identity;
pub mod operations;
