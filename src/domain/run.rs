//! Outcome of one orchestrator run.
//!
//! Built incrementally, one report per source in configuration order, and
//! read once at the end to decide the exit status.

use std::path::PathBuf;

/// What happened to a single source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// New content was written to the destination
    Written { bytes: usize },

    /// Fingerprint was in the ignore list; nothing written
    Unchanged,

    /// Fetch failed; not counted as a run failure
    FetchFailed(String),

    /// Write failed; counted as a run failure
    WriteFailed(String),
}

impl SourceOutcome {
    /// Whether this outcome flips the aggregate failure flag
    pub fn is_failure(&self) -> bool {
        matches!(self, SourceOutcome::WriteFailed(_))
    }
}

/// Per-source report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub url: String,
    pub output: PathBuf,
    pub outcome: SourceOutcome,
}

/// Aggregate result of processing every configured source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    reports: Vec<SourceReport>,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one source
    pub fn record(&mut self, report: SourceReport) {
        self.reports.push(report);
    }

    /// True if any source failed to write
    pub fn failed(&self) -> bool {
        self.reports.iter().any(|r| r.outcome.is_failure())
    }

    /// Reports in processing order
    pub fn reports(&self) -> &[SourceReport] {
        &self.reports
    }

    /// Number of sources whose content was written
    pub fn written(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, SourceOutcome::Written { .. }))
            .count()
    }
}
