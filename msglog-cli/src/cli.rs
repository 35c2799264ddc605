//! CLI parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "msglog")]
#[command(about = "Message log CLI: add, list, get, delete, clear, count", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the database file (overrides MSGLOG_DATA_DIR).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Store a message under a category.
    Add { category: i64, message: String },
    /// List all messages, newest first.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one message.
    Get { id: i64 },
    /// Delete one message (no-op if absent).
    Delete { id: i64 },
    /// Delete all messages.
    Clear,
    /// Print the number of stored messages.
    Count,
}
