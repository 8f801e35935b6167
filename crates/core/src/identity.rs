//! Caller identity extraction from a serialized X.509 credential.
//!
//! Each invocation carries a credential blob: a PEM-armored certificate,
//! possibly embedded in a binary envelope produced by the host runtime. The
//! armored block is located by its textual boundary markers, decoded to DER,
//! and two fields are read: the subject common name (display name) and the
//! first organization entry of the issuer (organization label, truncated at
//! the first `.` so `aMSP.example.com` yields `aMSP`).
//!
//! Every failure mode is `MalformedCredential`; a caller whose credential
//! cannot be parsed is rejected, never defaulted to an unrestricted role.

use std::fmt;

use sha2::{Digest, Sha256};
use x509_parser::pem::parse_x509_pem;

use crate::error::{CoreError, CoreResult};

const PEM_BEGIN: &[u8] = b"-----BEGIN CERTIFICATE-----";
const PEM_END: &[u8] = b"-----END CERTIFICATE-----";

/// The resolved caller identity. Derived once per invocation; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Certificate subject common name.
    pub display_name: String,
    /// First issuer organization entry, truncated at the first `.`.
    pub organization: String,
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.display_name, self.organization)
    }
}

/// Extract the caller identity from a credential blob.
///
/// Deterministic: the same bytes always resolve to the same identity.
pub fn extract_identity(credential: &[u8]) -> CoreResult<CallerIdentity> {
    let begin = find(credential, PEM_BEGIN).ok_or_else(|| {
        CoreError::MalformedCredential("certificate boundary marker not found".into())
    })?;
    let tail = &credential[begin..];
    let end = find(tail, PEM_END).ok_or_else(|| {
        CoreError::MalformedCredential("certificate end marker not found".into())
    })?;
    let block = &tail[..end + PEM_END.len()];

    let (_, pem) = parse_x509_pem(block).map_err(|e| {
        CoreError::MalformedCredential(format!("PEM decode failed: {e:?}"))
    })?;
    let cert = pem.parse_x509().map_err(|e| {
        CoreError::MalformedCredential(format!("certificate parse failed: {e:?}"))
    })?;

    let display_name = cert
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .ok_or_else(|| {
            CoreError::MalformedCredential("subject carries no common name".into())
        })?
        .to_string();

    let organization = cert
        .issuer()
        .iter_organization()
        .next()
        .and_then(|org| org.as_str().ok())
        .ok_or_else(|| {
            CoreError::MalformedCredential("issuer carries no organization entry".into())
        })?;
    let organization = organization
        .split('.')
        .next()
        .unwrap_or(organization)
        .to_string();

    let identity = CallerIdentity {
        display_name,
        organization,
    };
    tracing::debug!(caller = %identity, "resolved caller identity");
    Ok(identity)
}

/// Short SHA-256 fingerprint of a credential blob, for diagnostics logging.
/// Never log raw credential bytes.
pub fn credential_fingerprint(credential: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(credential);
    let digest = format!("{:x}", hasher.finalize());
    digest[..12].to_string()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
