//! Storage layer for the cat facts service.
//!
//! Facts live in a single relational table, `cat_facts(id, fact_en, fact_es)`, accessed
//! only through parameterized SQL. Every mutating method is a single statement, so each
//! one is atomic on its own; no multi-statement transactions are used.
//!
//! # Backends
//!
//! - [`PgStore`]: PostgreSQL, configured with a [`PgConfig`].
//! - [`SqliteStore`]: SQLite file or in-memory database, for local runs and tests.
//!
//! # Example
//!
//! ```no_run
//! use catfacts_store::{connect, DatabaseConfig};
//!
//! # async fn example() -> catfacts_store::Result<()> {
//! let store = connect(&DatabaseConfig::Sqlite { url: "sqlite::memory:".into() }).await?;
//!
//! let id = store.insert("Cats sleep a lot.", "Los gatos duermen mucho.").await?;
//! let fact = store.get(id).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod postgres;
pub mod schema;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use catfacts_core::{CatFact, FactId};

pub use config::{DatabaseConfig, PgConfig};
pub use error::{Result, StoreError};
pub use postgres::PgStore;
pub use sqlite::SqliteStore;

/// The storage trait defining all database operations on facts.
///
/// Implementations must be safe to share between concurrent request handlers.
#[async_trait]
pub trait FactStore: Send + Sync {
    /// Create the `cat_facts` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the DDL statement fails.
    async fn init_schema(&self) -> Result<()>;

    /// Insert a fact and return the identifier assigned by the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn insert(&self, fact_en: &str, fact_es: &str) -> Result<FactId>;

    /// Count every stored fact.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn count(&self) -> Result<u64>;

    /// List facts ordered by id, newest first, skipping `offset` and returning at most `limit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<CatFact>>;

    /// Get a fact by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn get(&self, id: FactId) -> Result<Option<CatFact>>;

    /// Overwrite both text fields of an existing fact.
    ///
    /// Returns `false` if no row has `fact.id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn update(&self, fact: &CatFact) -> Result<bool>;

    /// Delete a fact by id.
    ///
    /// Returns `false` if no row had that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn delete(&self, id: FactId) -> Result<bool>;

    /// Delete every fact and return how many rows were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn delete_all(&self) -> Result<u64>;
}

/// Connect to the configured backend and make sure the schema exists.
///
/// # Errors
///
/// Returns an error if the connection or the schema initialization fails.
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn FactStore>> {
    let store: Arc<dyn FactStore> = match config {
        DatabaseConfig::Postgres(pg) => Arc::new(PgStore::connect(pg).await?),
        DatabaseConfig::Sqlite { url } => Arc::new(SqliteStore::connect(url).await?),
    };

    store.init_schema().await?;
    tracing::info!(backend = config.backend_name(), "Fact store ready");

    Ok(store)
}

/// Map a `(id, fact_en, fact_es)` row onto a [`CatFact`].
pub(crate) fn fact_from_row((id, fact_en, fact_es): (i64, String, String)) -> CatFact {
    CatFact {
        id: FactId::new(id),
        fact_en,
        fact_es,
    }
}

/// Convert a `COUNT(*)` result, which the drivers decode as a signed integer.
pub(crate) fn count_from_row(count: i64) -> Result<u64> {
    u64::try_from(count).map_err(|_| StoreError::InvalidData(format!("negative count: {count}")))
}
