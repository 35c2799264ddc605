//! `message_log` table definition.

use sqlx::sqlite::SqliteConnection;
use tracing::info;

use crate::error::StorageError;

pub const TABLE_NAME: &str = "message_log";

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS message_log (
        message TEXT NOT NULL,
        category INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        id INTEGER PRIMARY KEY AUTOINCREMENT
    )
"#;

/// Creates the table if it does not exist. Safe to run before every operation.
pub(crate) async fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), StorageError> {
    info!("Creating {} table if not exist", TABLE_NAME);

    sqlx::query(CREATE_TABLE_SQL)
        .execute(conn)
        .await
        .map_err(StorageError::Schema)?;

    Ok(())
}
