//! Cat facts HTTP API service.
//!
//! Fetches random English cat facts, translates them to Spanish and stores the pairs.
//! The service provides:
//!
//! - Random fact fetch + translate + store
//! - Manual creation with optional automatic translation
//! - Listing, lookup, partial update and deletion
//! - A single-page web UI driven by the JSON API
//!
//! # Auto-translation
//!
//! Spanish text is derived from the English text whenever the caller does not supply
//! it, both on creation and when an update replaces the English text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers must be async for the router

pub mod config;
pub mod error;
pub mod extract;
pub mod fact_source;
pub mod facts;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod translate;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use fact_source::{CatFactClient, FactSource, FactSourceError};
pub use facts::FactService;
pub use routes::create_router;
pub use state::AppState;
pub use translate::{GoogleTranslator, TranslateError, Translator};
