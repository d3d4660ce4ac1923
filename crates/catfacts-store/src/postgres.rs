//! PostgreSQL storage implementation.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use catfacts_core::{CatFact, FactId};

use crate::config::PgConfig;
use crate::error::{Result, StoreError};
use crate::schema::POSTGRES_INIT;
use crate::{count_from_row, fact_from_row, FactStore};

/// PostgreSQL-backed fact store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Open a connection pool to the configured server.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool size is zero or the server cannot be reached.
    pub async fn connect(config: &PgConfig) -> Result<Self> {
        if config.max_connections == 0 {
            return Err(StoreError::Configuration(
                "max_connections must be at least 1".into(),
            ));
        }

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FactStore for PgStore {
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(POSTGRES_INIT).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, fact_en: &str, fact_es: &str) -> Result<FactId> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO cat_facts (fact_en, fact_es) VALUES ($1, $2) RETURNING id",
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
            "SELECT id, fact_en, fact_es FROM cat_facts ORDER BY id DESC LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(fact_from_row).collect())
    }

    async fn get(&self, id: FactId) -> Result<Option<CatFact>> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, fact_en, fact_es FROM cat_facts WHERE id = $1")
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(fact_from_row))
    }

    async fn update(&self, fact: &CatFact) -> Result<bool> {
        let result = sqlx::query("UPDATE cat_facts SET fact_en = $1, fact_es = $2 WHERE id = $3")
            .bind(&fact.fact_en)
            .bind(&fact.fact_es)
            .bind(fact.id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: FactId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cat_facts WHERE id = $1")
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
