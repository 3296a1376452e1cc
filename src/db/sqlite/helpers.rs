//! Shared helpers for the SQLite repositories.

use sqlx::error::ErrorKind;

use crate::db::DbError;

/// Map a sqlx error into a `DbError`, surfacing unique-constraint
/// violations as `AlreadyExists` for the given entity and key.
pub fn map_insert_err(err: sqlx::Error, entity_type: &str, id: &str) -> DbError {
    if let sqlx::Error::Database(db_err) = &err
        && matches!(db_err.kind(), ErrorKind::UniqueViolation)
    {
        return DbError::AlreadyExists {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        };
    }
    map_err(err)
}

/// Map any other sqlx error into a generic `DbError::Database`.
pub fn map_err(err: sqlx::Error) -> DbError {
    DbError::Database {
        message: err.to_string(),
    }
}
