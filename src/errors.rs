// src/errors.rs
// DOCUMENTATION: Custom error types for storage operations
// PURPOSE: Centralized error handling for the entire crate

use thiserror::Error;

/// SQLSTATE class for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Storage-specific error types
/// DOCUMENTATION: Every fallible operation in the crate returns one of these.
/// Integrity (duplicate key) failures get their own variant so callers can
/// retry or merge, matching how the social-auth pipeline reacts to races
/// on account creation.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Check whether a raw sqlx error is a unique-constraint (integrity) violation
/// DOCUMENTATION: Exposed so a caller that races on INSERT can distinguish
/// "someone beat me to it" from a real failure.
pub fn is_integrity_error(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err
            .code()
            .map(|code| code == UNIQUE_VIOLATION)
            .unwrap_or(false),
        _ => false,
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if is_integrity_error(&err) {
            return StorageError::AlreadyExists(err.to_string());
        }
        match err {
            sqlx::Error::RowNotFound => StorageError::NotFound(err.to_string()),
            other => StorageError::DatabaseError(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StorageError::MigrationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err: StorageError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[test]
    fn pool_errors_map_to_database_error() {
        let err: StorageError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StorageError::DatabaseError(_)));
    }

    #[test]
    fn non_database_errors_are_not_integrity_errors() {
        assert!(!is_integrity_error(&sqlx::Error::RowNotFound));
        assert!(!is_integrity_error(&sqlx::Error::PoolClosed));
    }

    #[test]
    fn error_messages_are_prefixed() {
        let err = StorageError::NotFound("nonce".into());
        assert_eq!(err.to_string(), "Record not found: nonce");

        let err = StorageError::AlreadyExists("google:42".into());
        assert_eq!(err.to_string(), "Record already exists: google:42");
    }
}
