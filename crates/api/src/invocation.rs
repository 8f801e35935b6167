//! Invocation request and response envelopes.
//!
//! The envelope shapes are the wire contract with callers. The credential
//! travels base64-encoded because it is an opaque byte blob (the host
//! runtime's identity envelope with an embedded PEM certificate).

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/invoke`.
#[derive(Debug, Deserialize)]
pub struct InvocationRequest {
    /// Operation name, e.g. `createCar`.
    pub operation: String,
    /// Positional string arguments in catalog order.
    #[serde(default)]
    pub args: Vec<String>,
    /// Base64-encoded caller credential bytes.
    pub credential: String,
}

/// Outcome of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Response envelope for every invocation.
///
/// Success carries the operation's payload bytes (UTF-8) and an empty
/// message; errors carry an empty payload and a human-readable message.
#[derive(Debug, Serialize, Deserialize)]
pub struct InvocationResponse {
    pub status: ResponseStatus,
    pub payload: String,
    pub message: String,
}

impl InvocationResponse {
    pub fn ok(payload: String) -> Self {
        Self {
            status: ResponseStatus::Ok,
            payload,
            message: String::new(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: ResponseStatus::Error,
            payload: String::new(),
            message,
        }
    }
}
