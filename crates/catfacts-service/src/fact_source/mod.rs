//! Source of random English cat facts.
//!
//! The production source is the public `catfact.ninja` API. Handlers only see the
//! [`FactSource`] trait so tests can swap in a stub.

pub mod client;
pub mod types;

use async_trait::async_trait;

pub use client::{CatFactClient, FactSourceError};
pub use types::RandomFactResponse;

/// Default endpoint returning one random fact per call.
pub const DEFAULT_CATFACTS_URL: &str = "https://catfact.ninja/fact";

/// Something that hands out one random English fact per call.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Fetch one fact.
    async fn random_fact(&self) -> Result<String, FactSourceError>;
}
