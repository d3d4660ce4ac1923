//! Table definitions.
//!
//! Both backends use the same table name and columns; only the identity column syntax
//! differs. Identifiers are never reused, even after every row has been deleted.

/// PostgreSQL DDL for the facts table.
pub const POSTGRES_INIT: &str = "CREATE TABLE IF NOT EXISTS cat_facts (
    id BIGSERIAL PRIMARY KEY,
    fact_en TEXT NOT NULL,
    fact_es TEXT NOT NULL
)";

/// SQLite DDL for the facts table.
///
/// `AUTOINCREMENT` keeps ids monotonic across deletes of the highest row.
pub const SQLITE_INIT: &str = "CREATE TABLE IF NOT EXISTS cat_facts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    fact_en TEXT NOT NULL,
    fact_es TEXT NOT NULL
)";
