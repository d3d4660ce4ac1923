//! Cat fact API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use catfacts_core::{non_empty, FactError};

use super::types::RandomFactResponse;
use super::FactSource;

/// Error type for fact source operations.
#[derive(Debug, thiserror::Error)]
pub enum FactSourceError {
    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("cat fact API returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body was not JSON or had no usable `fact` field.
    #[error("unexpected cat fact response: {0}")]
    Malformed(String),
}

impl From<FactSourceError> for FactError {
    fn from(err: FactSourceError) -> Self {
        match err {
            FactSourceError::Malformed(_) => Self::MalformedUpstreamResponse(err.to_string()),
            FactSourceError::Http(_) | FactSourceError::Status { .. } => {
                Self::Upstream(err.to_string())
            }
        }
    }
}

/// Client for the cat fact API.
#[derive(Debug, Clone)]
pub struct CatFactClient {
    client: Client,
    url: String,
}

impl CatFactClient {
    /// Create a new client for the given fact endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The endpoint this client calls.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FactSource for CatFactClient {
    async fn random_fact(&self) -> Result<String, FactSourceError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactSourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: RandomFactResponse = serde_json::from_slice(&body)
            .map_err(|e| FactSourceError::Malformed(e.to_string()))?;

        let fact = non_empty(parsed.fact)
            .ok_or_else(|| FactSourceError::Malformed("missing `fact` field".into()))?;

        tracing::debug!(chars = fact.chars().count(), "Fetched random cat fact");
        Ok(fact)
    }
}
