//! Core types for the cat facts service.
//!
//! This crate provides the foundational types shared by the store and the HTTP service:
//!
//! - **Identifiers**: `FactId`
//! - **Records**: `CatFact`, `FactPage`
//! - **Inputs**: `NewFact`, `FactPatch`
//! - **Errors**: `FactError`
//!
//! # Optional text fields
//!
//! Request fields are modelled as `Option<String>`. A value that is present but empty
//! (or only whitespace) is treated exactly like an absent one, see [`non_empty`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fact;
pub mod ids;

pub use error::{FactError, Result};
pub use fact::{non_empty, CatFact, FactPage, FactPatch, NewFact, DEFAULT_PAGE_LIMIT};
pub use ids::FactId;
