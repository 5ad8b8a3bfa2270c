//! # Database Error Types
//!
//! ## Error Flow
//! ```text
//! SQLite error (sqlx::Error)
//!      │
//!      ▼
//! DbError (this module)   ← categorized: duplicate code, pool, query, ...
//!      │
//!      ▼
//! ApiError (estoque-web)  ← always a 500 page for the browser
//! ```

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Unique / primary key violation.
    ///
    /// ## When This Occurs
    /// - A generated code already exists (rows removed out of band, or two
    ///   registrations raced on the same count)
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Database file could not be opened or the pool could not be built.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A migration failed to apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// SQL execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// All pooled connections were busy past the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ```text
/// sqlx::Error::Database "UNIQUE constraint failed: t.c" → UniqueViolation { field: "t.c" }
/// sqlx::Error::Database (anything else)                 → QueryFailed
/// sqlx::Error::PoolTimedOut                             → PoolExhausted
/// sqlx::Error::PoolClosed                               → ConnectionFailed
/// Other                                                 → Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();
                match msg.strip_prefix("UNIQUE constraint failed: ") {
                    Some(field) => DbError::duplicate(field, "unknown"),
                    None => DbError::QueryFailed(msg.to_string()),
                }
            }
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message() {
        let err = DbError::duplicate("produtos.codigo", "P00001");
        assert_eq!(
            err.to_string(),
            "Duplicate produtos.codigo: 'P00001' already exists"
        );
    }

    #[test]
    fn test_pool_errors_map() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
    }
}
