//! SQLite quote log.
//!
//! Single append-only table. The pool is opened once at startup and cloned
//! into every handler and persistence task; SQLite serializes the writes.
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use quote_common::Quote;
use quote_common::net::STORE_DEADLINE;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::error::ServerError;

/// DDL run at startup. Safe to repeat against an existing table.
pub const SQLITE_INIT: &str =
    "CREATE TABLE IF NOT EXISTS cotacoes (id INTEGER PRIMARY KEY, bid TEXT, data TIMESTAMP)";

const INSERT_QUOTE: &str = "INSERT INTO cotacoes (bid, data) VALUES (?, ?)";

/// Sink for accepted quotes.
///
/// Implementations must be shareable across tasks; the server holds one
/// instance behind an `Arc` for the whole process lifetime.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Appends one quote.
    async fn insert(&self, quote: &Quote) -> Result<(), ServerError>;
}

/// Row of the `cotacoes` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QuoteRow {
    /// Auto-incremented row id.
    pub id: i64,
    /// Decimal bid as text.
    pub bid: String,
    /// Observation time.
    pub data: DateTime<Utc>,
}

/// `QuoteStore` backed by a SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if missing) the database and ensures the table exists.
    pub async fn open(database_url: &str) -> Result<Self, ServerError> {
        let store = Self::connect(database_url).await?;
        store.init_schema().await?;
        info!("Quote store ready at {}", database_url);
        Ok(store)
    }

    /// Opens the pool without touching the schema.
    ///
    /// SQLite's busy handler gives up after `STORE_DEADLINE`: a statement
    /// abandoned by a timed-out caller keeps running on the connection's
    /// worker thread, and it must fail rather than commit once the lock frees.
    pub async fn connect(database_url: &str) -> Result<Self, ServerError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(STORE_DEADLINE)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self { pool })
    }

    /// Creates the `cotacoes` table if absent.
    pub async fn init_schema(&self) -> Result<(), ServerError> {
        sqlx::query(SQLITE_INIT).execute(&self.pool).await?;
        Ok(())
    }

    /// All rows in insertion order.
    pub async fn rows(&self) -> Result<Vec<QuoteRow>, ServerError> {
        let rows = sqlx::query_as::<_, QuoteRow>("SELECT id, bid, data FROM cotacoes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Number of stored rows.
    pub async fn count(&self) -> Result<i64, ServerError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cotacoes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Closes every pooled connection. Later inserts fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl QuoteStore for SqliteStore {
    async fn insert(&self, quote: &Quote) -> Result<(), ServerError> {
        sqlx::query(INSERT_QUOTE)
            .bind(&quote.bid)
            .bind(quote.observed_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
