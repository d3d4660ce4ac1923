//! Service configuration.

use catfacts_store::config::{DEFAULT_MAX_CONNECTIONS, DEFAULT_PG_PORT};
use catfacts_store::{DatabaseConfig, PgConfig};

use crate::fact_source::DEFAULT_CATFACTS_URL;
use crate::translate::DEFAULT_TRANSLATE_URL;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8000").
    pub listen_addr: String,

    /// Database connection settings.
    pub database: DatabaseConfig,

    /// Random fact endpoint.
    pub catfacts_url: String,

    /// Translation endpoint.
    pub translate_url: String,

    /// Language of incoming facts (default: "en").
    pub source_lang: String,

    /// Language facts are translated into (default: "es").
    pub target_lang: String,

    /// Timeout for calls to the fact source and the translator, in seconds.
    pub upstream_timeout_seconds: u64,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// A `DATABASE_URL` starting with `sqlite:` selects the SQLite backend. Otherwise the
    /// PostgreSQL backend is configured from `DB_SERVER`, `DB_PORT`, `DB_NAME`, `DB_USER`,
    /// `DB_PASSWORD` and `DB_MAX_CONNECTIONS`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            database: database_from_env(),
            catfacts_url: std::env::var("CATFACTS_URL").unwrap_or(defaults.catfacts_url),
            translate_url: std::env::var("TRANSLATE_URL").unwrap_or(defaults.translate_url),
            source_lang: std::env::var("TRANSLATE_SOURCE_LANG").unwrap_or(defaults.source_lang),
            target_lang: std::env::var("TRANSLATE_TARGET_LANG").unwrap_or(defaults.target_lang),
            upstream_timeout_seconds: parse_env("UPSTREAM_TIMEOUT_SECONDS")
                .unwrap_or(defaults.upstream_timeout_seconds),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| split_origins(&s))
                .unwrap_or(defaults.cors_origins),
            max_body_bytes: parse_env("MAX_BODY_BYTES").unwrap_or(defaults.max_body_bytes),
            request_timeout_seconds: parse_env("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or(defaults.request_timeout_seconds),
        }
    }
}

/// Read the database settings from the environment.
fn database_from_env() -> DatabaseConfig {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        if url.starts_with("sqlite:") {
            return DatabaseConfig::Sqlite { url };
        }
        tracing::warn!("DATABASE_URL is only used for sqlite; falling back to DB_* variables");
    }

    let defaults = PgConfig::default();
    DatabaseConfig::Postgres(PgConfig {
        host: std::env::var("DB_SERVER").unwrap_or(defaults.host),
        port: parse_env("DB_PORT").unwrap_or(DEFAULT_PG_PORT),
        database: std::env::var("DB_NAME").unwrap_or(defaults.database),
        username: std::env::var("DB_USER").unwrap_or(defaults.username),
        password: std::env::var("DB_PASSWORD").unwrap_or(defaults.password),
        max_connections: parse_env("DB_MAX_CONNECTIONS").unwrap_or(DEFAULT_MAX_CONNECTIONS),
    })
}

/// Parse an environment variable, ignoring it when unset or unparsable.
fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable environment variable");
            None
        }
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".into(),
            database: DatabaseConfig::Postgres(PgConfig::default()),
            catfacts_url: DEFAULT_CATFACTS_URL.into(),
            translate_url: DEFAULT_TRANSLATE_URL.into(),
            source_lang: "en".into(),
            target_lang: "es".into(),
            upstream_timeout_seconds: 30,
            cors_origins: vec!["*".into()],
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 30,
        }
    }
}
