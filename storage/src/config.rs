//! Store location and connection settings.
//!
//! Loaded from environment variables MSGLOG_DATA_DIR, MSGLOG_DB_FILE and
//! MSGLOG_BUSY_TIMEOUT_MS, or built directly from a data directory.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};

use crate::error::StorageError;

pub const DEFAULT_DB_FILE: &str = "sample.db";
pub const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Where the message log lives and how connections to it behave.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Application-private data directory. Must already exist.
    pub data_dir: PathBuf,
    pub file_name: String,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl StoreConfig {
    /// Uses the default file name and busy timeout inside `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_name: DEFAULT_DB_FILE.to_string(),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    /// Loads from the environment; all three variables are optional.
    pub fn from_env() -> Result<Self, StorageError> {
        let data_dir = env::var("MSGLOG_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let file_name = env::var("MSGLOG_DB_FILE").unwrap_or_else(|_| DEFAULT_DB_FILE.to_string());
        let busy_timeout = match env::var("MSGLOG_BUSY_TIMEOUT_MS") {
            Ok(raw) => parse_timeout_ms(&raw)?,
            Err(_) => Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        };

        let config = Self {
            data_dir: PathBuf::from(data_dir),
            file_name,
            busy_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn validate(&self) -> Result<(), StorageError> {
        if self.file_name.is_empty() {
            return Err(StorageError::Config("database file name is empty".to_string()));
        }
        if Path::new(&self.file_name).components().count() != 1 {
            return Err(StorageError::Config(format!(
                "database file name must not contain a path: {}",
                self.file_name
            )));
        }
        Ok(())
    }

    /// Full path of the backing database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    pub(crate) fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(self.db_path())
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete)
            .busy_timeout(self.busy_timeout)
    }
}

fn parse_timeout_ms(raw: &str) -> Result<Duration, StorageError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| StorageError::Config(format!("invalid MSGLOG_BUSY_TIMEOUT_MS {raw:?}: {e}")))
}
