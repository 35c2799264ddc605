//! Storage error types.
//!
//! Every public operation of [`crate::MessageLogStore`] reports failures as one of these
//! variants. Engine failures keep the underlying `sqlx::Error` as their source.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Schema error: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("Insert error: {reason}")]
    Insert {
        reason: String,
        #[source]
        source: Option<sqlx::Error>,
    },

    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),

    #[error("Delete error: {0}")]
    Delete(#[source] sqlx::Error),
}

impl StorageError {
    pub(crate) fn insert(source: sqlx::Error) -> Self {
        Self::Insert {
            reason: source.to_string(),
            source: Some(source),
        }
    }

    pub(crate) fn rejected(reason: impl Into<String>) -> Self {
        Self::Insert {
            reason: reason.into(),
            source: None,
        }
    }

    fn engine_error(&self) -> Option<&sqlx::Error> {
        match self {
            Self::Config(_) => None,
            Self::Insert { source, .. } => source.as_ref(),
            Self::Connection(e) | Self::Schema(e) | Self::Query(e) | Self::Delete(e) => Some(e),
        }
    }

    /// Native SQLite result code (e.g. `"2067"` for a unique constraint), when the engine
    /// reported one.
    pub fn engine_code(&self) -> Option<String> {
        match self.engine_error()? {
            sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
            _ => None,
        }
    }
}
