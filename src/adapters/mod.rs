//! Adapter interfaces for external systems.
//!
//! Adapters sit at the two I/O edges of the pipeline: the remote source
//! (`Fetcher`) and the destination file (`Sink`). The orchestrator only
//! sees the traits, so tests can swap in stubs.

pub mod file;
pub mod http;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Artifact;

// Re-export the concrete adapters
pub use file::FileSink;
pub use http::HttpFetcher;

/// Errors that can occur while fetching a source
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connection, TLS or body-read failure
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Anything other than 200 OK
    #[error("Url {url} returned {status}")]
    UnexpectedStatus { url: String, status: u16 },
}

/// Error writing an artifact to its destination
#[derive(Debug, Error)]
#[error("Could not write file {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Retrieves the current content of a source
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url`, succeeding only on HTTP 200
    async fn fetch(&self, url: &str) -> Result<Artifact, FetchError>;
}

/// Persists an artifact to a named destination
#[async_trait]
pub trait Sink: Send + Sync {
    /// Write the full artifact, replacing any existing file
    async fn persist(&self, artifact: &Artifact, destination: &Path) -> Result<(), WriteError>;
}
