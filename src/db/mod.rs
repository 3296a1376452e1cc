//! Database abstraction layer.
//!
//! Trait-based abstractions for data access, allowing storage backends to
//! be swapped without changing handler logic.
//!
//! - `error`: storage-agnostic error types
//! - `models`: domain entities (Company, Invoice, Industry)
//! - `repository`: trait definitions for data access
//! - `sqlite`: SQLite implementation backed by sqlx

mod error;
mod models;
mod repository;
mod sqlite;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
