//! # msglog-cli
//!
//! Command-line caller of the message log: argument parsing, config loading, tracing setup
//! and one handler per store operation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logger;

pub use cli::{Cli, Commands};
pub use config::AppConfig;
pub use logger::init_tracing;
