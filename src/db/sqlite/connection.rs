//! SQLite database connection and migration management.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::{SqliteCompanyRepository, SqliteIndustryRepository, SqliteInvoiceRepository};
use crate::db::{Database, DbError, DbResult};

/// SQLite database implementation.
///
/// Holds a connection pool; repositories borrow the pool per call.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open a database at the given path, creating the file if missing.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        // sqlx enables PRAGMA foreign_keys by default; the schema documents
        // that foreign keys are declared but not enforced (no cascades,
        // orphaned references allowed), so turn enforcement off.
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(false);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Capped at a single connection: each `:memory:` connection is its
    /// own database, so a larger pool would see different schemas.
    pub async fn in_memory() -> DbResult<Self> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::Connection {
                    message: e.to_string(),
                })?
                .foreign_keys(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Access the underlying pool, for tests that need raw queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Companies<'a> = SqliteCompanyRepository<'a>;
    type Invoices<'a> = SqliteInvoiceRepository<'a>;
    type Industries<'a> = SqliteIndustryRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })
    }

    fn companies(&self) -> Self::Companies<'_> {
        SqliteCompanyRepository { pool: &self.pool }
    }

    fn invoices(&self) -> Self::Invoices<'_> {
        SqliteInvoiceRepository { pool: &self.pool }
    }

    fn industries(&self) -> Self::Industries<'_> {
        SqliteIndustryRepository { pool: &self.pool }
    }
}
