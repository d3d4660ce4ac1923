//! English to Spanish translation.
//!
//! The production translator calls the public Google Translate `translate_a/single`
//! endpoint. The service only depends on the [`Translator`] trait.

pub mod client;
pub mod types;

use async_trait::async_trait;

pub use client::{GoogleTranslator, TranslateError};

/// Default translation endpoint.
pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Longest text accepted in a single translation call.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Translates text between two fixed languages.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text`, returning the translated string.
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;
}
