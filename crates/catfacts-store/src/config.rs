//! Connection settings for the store backends.

use std::fmt;

use sqlx::postgres::PgConnectOptions;

/// Default PostgreSQL port.
pub const DEFAULT_PG_PORT: u16 = 5432;

/// Default pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which database backs the store.
#[derive(Debug, Clone)]
pub enum DatabaseConfig {
    /// A PostgreSQL server.
    Postgres(PgConfig),
    /// A SQLite database URL, e.g. `sqlite://facts.db` or `sqlite::memory:`.
    Sqlite {
        /// Connection URL.
        url: String,
    },
}

impl DatabaseConfig {
    /// Short backend name for logs.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite { .. } => "sqlite",
        }
    }
}

/// PostgreSQL connection parameters.
#[derive(Clone)]
pub struct PgConfig {
    /// Server host name.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database name.
    pub database: String,
    /// Login user.
    pub username: String,
    /// Login password.
    pub password: String,
    /// Maximum pooled connections.
    pub max_connections: u32,
}

impl PgConfig {
    /// Build `sqlx` connect options from these parameters.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password)
    }
}

// The password is never printed.
impl fmt::Debug for PgConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl Default for PgConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: DEFAULT_PG_PORT,
            database: "catfacts".into(),
            username: "postgres".into(),
            password: String::new(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}
