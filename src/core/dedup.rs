//! Dedup decision: is a fetched artifact new?
//!
//! Comparison is exact string equality against the configured ignore
//! list. Fingerprints are always lowercase hex, so an uppercase entry in
//! the configuration simply never matches.

use tracing::info;

use crate::domain::{Artifact, Fingerprint};

/// Decide whether `artifact` should be persisted.
///
/// Returns `false` as soon as the fingerprint matches an ignore entry.
/// With `log_hash_check`, every entry checked without matching emits one
/// trace carrying the computed fingerprint, so an operator can copy it
/// into the ignore list.
pub fn should_persist(artifact: &Artifact, ignore_hashes: &[String], log_hash_check: bool) -> bool {
    is_new(&artifact.fingerprint(), ignore_hashes, log_hash_check)
}

/// Same decision for an already computed fingerprint
pub fn is_new(fingerprint: &Fingerprint, ignore_hashes: &[String], log_hash_check: bool) -> bool {
    for ignored in ignore_hashes {
        if fingerprint == ignored {
            return false;
        }
        if log_hash_check {
            info!(hash = %fingerprint, "Hash not in ignore list");
        }
    }
    true
}
