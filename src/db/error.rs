//! Database error types.
//!
//! Abstracted error types for storage operations, independent of the
//! backend. Uses miette for diagnostic output and thiserror for derives.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with key '{id}'")]
    #[diagnostic(code(biztime::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Entity already exists: {entity_type} with key '{id}'")]
    #[diagnostic(code(biztime::db::already_exists))]
    AlreadyExists { entity_type: String, id: String },

    #[error("Orphaned reference: {entity_type} '{id}' references missing {missing}")]
    #[diagnostic(code(biztime::db::orphaned_reference))]
    OrphanedReference {
        entity_type: String,
        id: String,
        missing: String,
    },

    #[error("Database error: {message}")]
    #[diagnostic(code(biztime::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(biztime::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(biztime::db::connection_error))]
    Connection { message: String },
}

impl DbError {
    /// Not-found for a named entity type and key.
    pub fn not_found(entity_type: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.into(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
