//! HTTP fetcher backed by a shared reqwest client.
//!
//! One GET per call. No retry, no timeout, client-default redirect policy.
//! The body is read fully into memory.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use super::{FetchError, Fetcher};
use crate::domain::Artifact;

/// Fetcher using a pooled `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a default client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher reusing an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Artifact, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        debug!(url, bytes = body.len(), "Fetched source");

        Ok(Artifact::new(body.to_vec()))
    }
}
