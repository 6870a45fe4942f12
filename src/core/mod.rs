//! Core pipeline logic.
//!
//! This module contains:
//! - Dedup: Fingerprint comparison against the ignore list
//! - Orchestrator: Sequential fetch → dedup → persist over all sources

pub mod dedup;
pub mod orchestrator;

// Re-export commonly used types
pub use dedup::{is_new, should_persist};
pub use orchestrator::Orchestrator;
