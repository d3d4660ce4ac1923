//! Google Translate client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use catfacts_core::FactError;

use super::types::{extract_translation, TranslateQuery};
use super::{Translator, MAX_TEXT_CHARS};

/// Error type for translation operations.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The translation endpoint answered with a non-success status.
    #[error("translation API returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response did not contain a translation.
    #[error("unexpected translation response: {0}")]
    Malformed(String),

    /// The text exceeds what one call can translate.
    #[error("text too long to translate: {len} characters (max {max})")]
    TextTooLong {
        /// Length of the rejected text.
        len: usize,
        /// Accepted maximum.
        max: usize,
    },
}

impl From<TranslateError> for FactError {
    fn from(err: TranslateError) -> Self {
        Self::Translation(err.to_string())
    }
}

/// Translator backed by the public Google Translate endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
    source_lang: String,
    target_lang: String,
}

impl GoogleTranslator {
    /// Create a translator for `source_lang` → `target_lang` (e.g. `"en"` → `"es"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let len = text.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(TranslateError::TextTooLong {
                len,
                max: MAX_TEXT_CHARS,
            });
        }

        let query = TranslateQuery {
            client: "gtx",
            sl: &self.source_lang,
            tl: &self.target_lang,
            dt: "t",
            q: text,
        };

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslateError::Malformed(e.to_string()))?;

        extract_translation(&body)
            .ok_or_else(|| TranslateError::Malformed("no translated segments".into()))
    }
}
