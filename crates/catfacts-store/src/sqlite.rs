//! SQLite storage implementation.
//!
//! Used for local development and tests. An in-memory database lives inside a single
//! pooled connection that is never recycled, otherwise each new connection would see
//! an empty database.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use catfacts_core::{CatFact, FactId};

use crate::error::{Result, StoreError};
use crate::schema::SQLITE_INIT;
use crate::{count_from_row, fact_from_row, FactStore};

/// SQLite-backed fact store.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a database from a `sqlite:` URL, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the database cannot be opened.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::Configuration(format!("invalid sqlite url {url}: {e}")))?
            .create_if_missing(true);

        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        tracing::debug!(url = %url, in_memory, "Opening SQLite database");
        let pool = pool_options.connect_with(options).await?;

        Ok(Self { pool })
    }

    /// Open a private in-memory database with the schema already created.
    ///
    /// # Errors
    ///
    /// Returns an error if SQLite cannot be initialized.
    pub async fn in_memory() -> Result<Self> {
        let store = Self::connect("sqlite::memory:").await?;
        store.init_schema().await?;
        Ok(store)
    }
}

#[async_trait]
impl FactStore for SqliteStore {
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(SQLITE_INIT).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, fact_en: &str, fact_es: &str) -> Result<FactId> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO cat_facts (fact_en, fact_es) VALUES (?, ?) RETURNING id",
        )
        .bind(fact_en)
        .bind(fact_es)
        .fetch_one(&self.pool)
        .await?;

        Ok(FactId::new(id))
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cat_facts")
            .fetch_one(&self.pool)
            .await?;

        count_from_row(count)
    }

    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<CatFact>> {
        let rows: Vec<(i64, String, String)> = sqlx::query_as(
            "SELECT id, fact_en, fact_es FROM cat_facts ORDER BY id DESC LIMIT ? OFFSET ?",
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(fact_from_row).collect())
    }

    async fn get(&self, id: FactId) -> Result<Option<CatFact>> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, fact_en, fact_es FROM cat_facts WHERE id = ?")
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(fact_from_row))
    }

    async fn update(&self, fact: &CatFact) -> Result<bool> {
        let result = sqlx::query("UPDATE cat_facts SET fact_en = ?, fact_es = ? WHERE id = ?")
            .bind(&fact.fact_en)
            .bind(&fact.fact_es)
            .bind(fact.id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: FactId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cat_facts WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM cat_facts")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
