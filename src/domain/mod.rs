//! Domain types for wttrfetch.
//!
//! This module contains the core data structures:
//! - Source: One configured (URL, destination, ignore list) triple
//! - Artifact: Fetched bytes and their fingerprint
//! - Run: Per-source outcomes and the aggregate failure flag

pub mod artifact;
pub mod run;
pub mod source;

// Re-export commonly used types
pub use artifact::{Artifact, Fingerprint};
pub use run::{RunResult, SourceOutcome, SourceReport};
pub use source::SourceDescriptor;
