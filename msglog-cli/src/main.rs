//! msglog CLI: add, list, get, delete, clear and count messages. Config from env and optional CLI args.

use anyhow::{Context, Result};
use clap::Parser;
use msglog_cli::{commands, init_tracing, AppConfig, Cli};
use msglog_storage::MessageLogStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.data_dir.clone())?;
    init_tracing(&config.log_file)?;

    std::fs::create_dir_all(&config.store.data_dir).with_context(|| {
        format!(
            "Create data directory {}",
            config.store.data_dir.display()
        )
    })?;

    let store = MessageLogStore::open(config.store)
        .await
        .context("Open message log (check MSGLOG_DATA_DIR and MSGLOG_DB_FILE)")?;

    let mut stdout = std::io::stdout();
    commands::run(&store, cli.command, &mut stdout).await
}
