//! wttrfetch - fetch remote weather images, keep only new ones
//!
//! Each configured source is fetched over HTTP, fingerprinted with
//! SHA-512, and written to its output file only when the fingerprint is
//! not in the source's ignore list.
//!
//! # Modules
//!
//! - `adapters`: HTTP fetcher and file sink behind the `Fetcher`/`Sink` traits
//! - `core`: Dedup decision and the Orchestrator
//! - `domain`: Data structures (SourceDescriptor, Artifact, RunResult)
//! - `config`: Source list loading and sample generation
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Write a sample configuration
//! wttrfetch --config-file cities.json --create-config-file
//!
//! # Fetch everything, printing hashes that are not ignored yet
//! wttrfetch --config-file cities.json --log-hash-check
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use adapters::{FetchError, Fetcher, FileSink, HttpFetcher, Sink, WriteError};
pub use crate::core::Orchestrator;
pub use domain::{Artifact, Fingerprint, RunResult, SourceDescriptor, SourceOutcome};
