//! Main orchestrator for the fetch pipeline.
//!
//! Walks the configured sources in order and, for each one, wires
//! fetch → dedup → persist. Fetch failures are logged and skipped; write
//! failures are logged and counted. Every source is attempted.

use tracing::{debug, error, info, instrument, warn};

use crate::adapters::{FileSink, Fetcher, HttpFetcher, Sink};
use crate::domain::{RunResult, SourceDescriptor, SourceOutcome, SourceReport};

use super::dedup;

/// Main pipeline orchestrator
pub struct Orchestrator<F, S> {
    fetcher: F,
    sink: S,
    log_hash_check: bool,
}

impl Default for Orchestrator<HttpFetcher, FileSink> {
    fn default() -> Self {
        Self::new(HttpFetcher::new(), FileSink::new())
    }
}

impl<F: Fetcher, S: Sink> Orchestrator<F, S> {
    /// Create an orchestrator from its two adapters
    pub fn new(fetcher: F, sink: S) -> Self {
        Self {
            fetcher,
            sink,
            log_hash_check: false,
        }
    }

    /// Log fingerprints that miss the ignore list
    pub fn with_hash_logging(mut self, enabled: bool) -> Self {
        self.log_hash_check = enabled;
        self
    }

    /// Process every source sequentially and collect the outcomes
    #[instrument(skip_all, fields(sources = sources.len()))]
    pub async fn run(&self, sources: &[SourceDescriptor]) -> RunResult {
        let mut result = RunResult::new();

        for source in sources {
            let outcome = self.process(source).await;
            result.record(SourceReport {
                url: source.url.clone(),
                output: source.output.clone(),
                outcome,
            });
        }

        info!(
            written = result.written(),
            failed = result.failed(),
            "Run finished"
        );
        result
    }

    async fn process(&self, source: &SourceDescriptor) -> SourceOutcome {
        let artifact = match self.fetcher.fetch(&source.url).await {
            Ok(artifact) => artifact,
            Err(e) => {
                warn!(url = %source.url, error = %e, "Error calling url");
                return SourceOutcome::FetchFailed(e.to_string());
            }
        };

        if !dedup::should_persist(&artifact, &source.ignore_hashes, self.log_hash_check) {
            debug!(url = %source.url, "Content already seen, skipping");
            return SourceOutcome::Unchanged;
        }

        match self.sink.persist(&artifact, &source.output).await {
            Ok(()) => {
                info!(output = %source.output.display(), "Wrote file");
                SourceOutcome::Written {
                    bytes: artifact.len(),
                }
            }
            Err(e) => {
                error!(output = %source.output.display(), error = %e, "Could not write file");
                SourceOutcome::WriteFailed(e.to_string())
            }
        }
    }
}
