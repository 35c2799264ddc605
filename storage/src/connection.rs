//! Per-operation SQLite connection.
//!
//! Each store operation opens one [`ConnectionScope`], runs its statements on it and hands
//! its result to [`ConnectionScope::finish`], which closes the connection on both the success
//! and the error path. Dropping a scope without finishing it also closes the connection.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use tracing::{debug, warn};

use crate::error::StorageError;

pub(crate) struct ConnectionScope {
    conn: SqliteConnection,
}

impl ConnectionScope {
    /// Opens a connection; creates the database file if missing.
    pub(crate) async fn open(options: &SqliteConnectOptions) -> Result<Self, StorageError> {
        debug!(path = %options.get_filename().display(), "Opening SQLite connection");

        let conn = SqliteConnection::connect_with(options)
            .await
            .map_err(StorageError::Connection)?;

        Ok(Self { conn })
    }

    pub(crate) fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Closes the connection and returns `result`.
    ///
    /// An operation error takes precedence over a close error; the latter is only logged then.
    pub(crate) async fn finish<T>(
        self,
        result: Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let closed = self.conn.close().await;

        match (result, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(StorageError::Connection(e)),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                warn!(error = %close_err, "Failed to close SQLite connection after error");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    #[tokio::test]
    async fn test_finish_returns_value_and_creates_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StoreConfig::new(dir.path());

        let scope = ConnectionScope::open(&config.connect_options())
            .await
            .expect("open");
        let value = scope.finish(Ok(7)).await.expect("finish");

        assert_eq!(value, 7);
        assert!(config.db_path().exists());
    }

    #[tokio::test]
    async fn test_finish_keeps_operation_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StoreConfig::new(dir.path());

        let scope = ConnectionScope::open(&config.connect_options())
            .await
            .expect("open");
        let result: Result<(), _> = scope
            .finish(Err(StorageError::Query(sqlx::Error::RowNotFound)))
            .await;

        assert!(matches!(result, Err(StorageError::Query(_))));
    }

    #[tokio::test]
    async fn test_open_in_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StoreConfig::new(dir.path().join("missing"));

        let result = ConnectionScope::open(&config.connect_options()).await;

        assert!(matches!(result, Err(StorageError::Connection(_))));
    }
}
