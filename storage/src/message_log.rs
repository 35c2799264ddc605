//! Message log store: persistence and queries for [`Record`]s.
//!
//! Uses a fresh [`ConnectionScope`] per operation and the [`RowAccumulator`] for result rows.
//! External: SQLite via sqlx; callers use the [`MessageLog`] operations.

use std::path::PathBuf;

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use tracing::{debug, info, instrument};

use crate::accumulator::RowAccumulator;
use crate::config::StoreConfig;
use crate::connection::ConnectionScope;
use crate::error::StorageError;
use crate::models::Record;
use crate::repository::MessageLog;
use crate::schema;

const INSERT_SQL: &str = r#"
    INSERT INTO message_log (message, category, created_at)
    VALUES (?, ?, strftime('%Y-%m-%d %H-%M', 'now'))
"#;
const SELECT_ALL_SQL: &str =
    "SELECT message, category, created_at, id FROM message_log ORDER BY id DESC";
const SELECT_BY_ID_SQL: &str =
    "SELECT message, category, created_at, id FROM message_log WHERE id = ?";
const DELETE_BY_ID_SQL: &str = "DELETE FROM message_log WHERE id = ?";
const DELETE_ALL_SQL: &str = "DELETE FROM message_log";
const COUNT_SQL: &str = "SELECT COUNT(*) FROM message_log";

/// Handle to the message log file. Holds no open connection; cheap to clone and share.
#[derive(Clone, Debug)]
pub struct MessageLogStore {
    config: StoreConfig,
    options: SqliteConnectOptions,
}

impl MessageLogStore {
    /// Validates `config` and makes sure the table exists.
    pub async fn open(config: StoreConfig) -> Result<Self, StorageError> {
        config.validate()?;
        info!("Opening message log: {}", config.db_path().display());

        let options = config.connect_options();
        let store = Self { config, options };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn db_path(&self) -> PathBuf {
        self.config.db_path()
    }

    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        let mut scope = self.scope().await?;
        let result = schema::ensure_schema(scope.conn()).await;
        scope.finish(result).await
    }

    async fn scope(&self) -> Result<ConnectionScope, StorageError> {
        ConnectionScope::open(&self.options).await
    }

    async fn select(&self, sql: &str, id: Option<i64>) -> Result<Vec<Record>, StorageError> {
        let mut scope = self.scope().await?;

        let mut query = sqlx::query(sql);
        if let Some(id) = id {
            query = query.bind(id);
        }
        let result = RowAccumulator::collect(query.fetch(scope.conn()))
            .await
            .map_err(StorageError::Query);

        let (records, count) = scope.finish(result).await?.finish();
        debug!("Retrieved {} messages", count);
        Ok(records)
    }
}

#[async_trait]
impl MessageLog for MessageLogStore {
    #[instrument(skip(self, message))]
    async fn insert(&self, category: i64, message: &str) -> Result<i64, StorageError> {
        if message.is_empty() {
            return Err(StorageError::rejected("message must not be empty"));
        }

        let mut scope = self.scope().await?;
        let result = sqlx::query(INSERT_SQL)
            .bind(message)
            .bind(category)
            .execute(scope.conn())
            .await
            .map(|done| done.last_insert_rowid())
            .map_err(StorageError::insert);
        let id = scope.finish(result).await?;

        info!(id, category, "Saved message");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn select_all(&self) -> Result<Vec<Record>, StorageError> {
        self.select(SELECT_ALL_SQL, None).await
    }

    #[instrument(skip(self))]
    async fn select_by_id(&self, id: i64) -> Result<Vec<Record>, StorageError> {
        self.select(SELECT_BY_ID_SQL, Some(id)).await
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError> {
        let mut scope = self.scope().await?;
        let result = sqlx::query(DELETE_BY_ID_SQL)
            .bind(id)
            .execute(scope.conn())
            .await
            .map_err(StorageError::Delete);
        let done = scope.finish(result).await?;

        debug!(rows_affected = done.rows_affected(), "Deleted message {}", id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<(), StorageError> {
        let mut scope = self.scope().await?;
        let result = sqlx::query(DELETE_ALL_SQL)
            .execute(scope.conn())
            .await
            .map_err(StorageError::Delete);
        let done = scope.finish(result).await?;

        info!("Deleted all {} messages", done.rows_affected());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<i64, StorageError> {
        let mut scope = self.scope().await?;
        let result = sqlx::query_scalar::<_, i64>(COUNT_SQL)
            .fetch_one(scope.conn())
            .await
            .map_err(StorageError::Query);
        let total = scope.finish(result).await?;

        debug!("Total messages: {}", total);
        Ok(total)
    }
}
