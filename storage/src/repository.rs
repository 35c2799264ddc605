use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::Record;

/// The six message log operations. Each call runs to completion or fails with a typed error.
#[async_trait]
pub trait MessageLog: Send + Sync {
    /// Stores `message` under `category` and returns the id assigned by the store.
    async fn insert(&self, category: i64, message: &str) -> Result<i64, StorageError>;

    /// All records, newest (highest id) first.
    async fn select_all(&self) -> Result<Vec<Record>, StorageError>;

    /// Zero or one record.
    async fn select_by_id(&self, id: i64) -> Result<Vec<Record>, StorageError>;

    /// No-op when `id` does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError>;

    async fn delete_all(&self) -> Result<(), StorageError>;

    async fn count(&self) -> Result<i64, StorageError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Record>, StorageError> {
        Ok(self.select_by_id(id).await?.into_iter().next())
    }
}
