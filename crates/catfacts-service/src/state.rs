//! Application state.

use std::sync::Arc;
use std::time::Duration;

use catfacts_store::FactStore;

use crate::config::ServiceConfig;
use crate::fact_source::{CatFactClient, FactSource};
use crate::facts::FactService;
use crate::translate::{GoogleTranslator, Translator};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Fact operations.
    pub facts: FactService,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create the application state with HTTP clients built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn new(store: Arc<dyn FactStore>, config: ServiceConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.upstream_timeout_seconds);

        let source = CatFactClient::new(&config.catfacts_url, timeout)?;
        tracing::info!(url = %source.url(), "Fact source configured");

        let translator = GoogleTranslator::new(
            &config.translate_url,
            &config.source_lang,
            &config.target_lang,
            timeout,
        )?;
        tracing::info!(
            source_lang = %config.source_lang,
            target_lang = %config.target_lang,
            "Translator configured"
        );

        Ok(Self::with_collaborators(
            store,
            Arc::new(source),
            Arc::new(translator),
            config,
        ))
    }

    /// Create the application state from explicit collaborators.
    #[must_use]
    pub fn with_collaborators(
        store: Arc<dyn FactStore>,
        source: Arc<dyn FactSource>,
        translator: Arc<dyn Translator>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            facts: FactService::new(store, source, translator),
            config,
        }
    }
}
