//! Source descriptors decoded from configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One configured source: where to fetch, where to write, what to ignore.
///
/// Field names follow the original JSON layout (`URL`, `Output`,
/// `IgnoreHashes`); snake_case aliases are accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceDescriptor {
    /// Fetch endpoint
    #[serde(rename = "URL", alias = "url")]
    pub url: String,

    /// Destination file
    #[serde(rename = "Output", alias = "output")]
    pub output: PathBuf,

    /// Hex fingerprints of content already seen
    #[serde(rename = "IgnoreHashes", alias = "ignore_hashes", default)]
    pub ignore_hashes: Vec<String>,
}

impl SourceDescriptor {
    /// Create a descriptor with an empty ignore list
    pub fn new(url: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            output: output.into(),
            ignore_hashes: Vec::new(),
        }
    }

    /// Add fingerprints to ignore
    pub fn with_ignored<I, S>(mut self, hashes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_hashes.extend(hashes.into_iter().map(Into::into));
        self
    }
}
