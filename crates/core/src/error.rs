//! Domain error taxonomy.
//!
//! Every error is terminal for the current invocation: there is no retry or
//! local recovery inside the core. The hosting transport decides what, if
//! anything, to do about a failed invocation.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The caller credential could not be parsed into an identity. The
    /// invocation is rejected outright; it is never downgraded to an
    /// unrestricted role.
    #[error("Malformed caller credential: {0}")]
    MalformedCredential(String),

    /// The requested operation name is not in the catalog.
    #[error("Invalid invoke operation name: {0}")]
    UnknownOperation(String),

    /// The operation exists but the caller's organization may not invoke it.
    #[error("Operation {operation} is not permitted for organization {organization}")]
    Forbidden {
        operation: &'static str,
        organization: String,
    },

    /// Argument count does not match the operation's required arity.
    #[error("Incorrect number of arguments. Expecting {expected}")]
    InvalidArguments { expected: usize, actual: usize },

    /// Ownership transfer attempted on a restricted car. Carries the stored
    /// restriction reason so the caller knows why the transfer was denied.
    #[error("Car has restrictions: {reason}")]
    Restricted { reason: String },

    /// The ledger backend failed. Never silently discarded: a store failure
    /// aborts the invocation.
    #[error("Ledger unavailable: {0}")]
    StoreUnavailable(String),

    /// A record yielded by a range scan could not be decoded. The whole
    /// aggregation is aborted rather than skipping the bad entry.
    #[error("Range aggregation failed: {0}")]
    AggregationFailed(String),

    /// A stored record could not be encoded or decoded on a point operation.
    #[error("Record encoding failed: {0}")]
    EncodingFailed(String),
}

/// Convenience alias for core results.
pub type CoreResult<T> = Result<T, CoreError>;
