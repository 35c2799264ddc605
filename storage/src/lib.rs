//! Storage crate: SQLite-backed message log.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`config`] – StoreConfig (data directory, file name, busy timeout)
//! - [`models`] – Record
//! - [`repository`] – MessageLog trait
//! - [`message_log`] – MessageLogStore (SQLite)
//! - [`accumulator`] – RowAccumulator
//! - `connection` – per-operation connection scope
//! - `schema` – `message_log` table creation

mod accumulator;
mod config;
mod connection;
mod error;
mod message_log;
mod models;
mod repository;
mod schema;


pub use accumulator::RowAccumulator;
pub use config::{StoreConfig, DEFAULT_DATA_DIR, DEFAULT_DB_FILE};
pub use error::StorageError;
pub use message_log::MessageLogStore;
pub use models::{Record, CREATED_AT_SQL_FORMAT};
pub use repository::MessageLog;
pub use schema::TABLE_NAME;
