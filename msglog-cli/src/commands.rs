//! Command handlers: call one message log operation and render its result.

use std::io::Write;

use anyhow::{Context, Result};
use msglog_storage::{MessageLog, Record};
use tracing::info;

use crate::cli::Commands;

const MESSAGE_PREVIEW_LEN: usize = 60;

pub async fn run<L, W>(log: &L, command: Commands, out: &mut W) -> Result<()>
where
    L: MessageLog,
    W: Write,
{
    match command {
        Commands::Add { category, message } => {
            let id = log
                .insert(category, &message)
                .await
                .context("Insert message")?;
            writeln!(out, "Added message {}", id)?;
        }
        Commands::List { json } => {
            let records = log.select_all().await.context("List messages")?;
            info!("Retrieved [{}] rows", records.len());
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
            } else {
                write_table(out, &records)?;
            }
        }
        Commands::Get { id } => match log.find_by_id(id).await.context("Get message")? {
            Some(record) => write_table(out, std::slice::from_ref(&record))?,
            None => writeln!(out, "No message with id {}", id)?,
        },
        Commands::Delete { id } => {
            log.delete_by_id(id).await.context("Delete message")?;
            writeln!(out, "Deleted message {}", id)?;
        }
        Commands::Clear => {
            log.delete_all().await.context("Delete all messages")?;
            writeln!(out, "Deleted all messages")?;
        }
        Commands::Count => {
            let total = log.count().await.context("Count messages")?;
            writeln!(out, "{}", total)?;
        }
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, records: &[Record]) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "No messages.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<8} {:<10} {:<18} {}",
        "id", "category", "created_at", "message"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;

    for r in records {
        let preview: String = r.message.chars().take(MESSAGE_PREVIEW_LEN).collect();
        let preview = preview.replace('\n', " ");
        writeln!(
            out,
            "{:<8} {:<10} {:<18} {}",
            r.id, r.category, r.created_at, preview
        )?;
    }
    Ok(())
}
