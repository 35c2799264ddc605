//! CLI configuration: store location plus log file.
//! Loaded from environment variables MSGLOG_DATA_DIR, MSGLOG_DB_FILE, MSGLOG_BUSY_TIMEOUT_MS and LOG_FILE.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use msglog_storage::StoreConfig;

pub const DEFAULT_LOG_FILE: &str = "logs/msglog.log";

pub struct AppConfig {
    pub store: StoreConfig,
    pub log_file: String,
}

impl AppConfig {
    /// Loads from the environment. `data_dir`, if given, overrides MSGLOG_DATA_DIR.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let store = StoreConfig::from_env()?;
        let log_file = env::var("LOG_FILE").ok();

        Ok(Self::build(store, data_dir, log_file))
    }

    /// Applies the command-line override and the log file default to an already loaded store config.
    pub fn build(mut store: StoreConfig, data_dir: Option<PathBuf>, log_file: Option<String>) -> Self {
        if let Some(dir) = data_dir {
            store.data_dir = dir;
        }
        let log_file = log_file.unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        Self { store, log_file }
    }
}
