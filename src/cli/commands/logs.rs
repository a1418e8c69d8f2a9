use anyhow::Result;
use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::output_empty_collection;
use crate::cli::{render, OutputFormat};
use crate::resource::filter_items;
use crate::resources::{AccessLogEntry, ActivityLogEntry, ErrorLogEntry};

#[derive(Subcommand)]
pub enum LogCommands {
    #[command(about = "Sign-in attempts by source address")]
    Access {
        #[arg(long, help = "Filter by username or address")]
        search: Option<String>,
    },

    #[command(about = "Actions taken by authenticated users")]
    Activity {
        #[arg(long, help = "Filter by username or action")]
        search: Option<String>,
    },

    #[command(about = "Server-side failures")]
    Error {
        #[arg(long, help = "Filter by message")]
        search: Option<String>,
    },
}

pub async fn handle(cmd: LogCommands, output_format: OutputFormat) -> Result<()> {
    match cmd {
        LogCommands::Access { search } => access_command(search, output_format).await,
        LogCommands::Activity { search } => activity_command(search, output_format).await,
        LogCommands::Error { search } => error_command(search, output_format).await,
    }
}

async fn access_command(search: Option<String>, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let entries: Vec<AccessLogEntry> = client.list().await?;

    let rows = filter_items(&entries, search.as_deref().unwrap_or(""));
    if rows.is_empty() {
        return output_empty_collection(&output_format, "entries", "No access log entries found");
    }

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "entries": rows }))?
            );
        }
        OutputFormat::Text => print!("{}", render::access_log_table(&rows)),
    }
    Ok(())
}

async fn activity_command(search: Option<String>, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let entries: Vec<ActivityLogEntry> = client.list().await?;

    let rows = filter_items(&entries, search.as_deref().unwrap_or(""));
    if rows.is_empty() {
        return output_empty_collection(&output_format, "entries", "No activity log entries found");
    }

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "entries": rows }))?
            );
        }
        OutputFormat::Text => print!("{}", render::activity_log_table(&rows)),
    }
    Ok(())
}

async fn error_command(search: Option<String>, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let entries: Vec<ErrorLogEntry> = client.list().await?;

    let rows = filter_items(&entries, search.as_deref().unwrap_or(""));
    if rows.is_empty() {
        return output_empty_collection(&output_format, "entries", "No error log entries found");
    }

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "entries": rows }))?
            );
        }
        OutputFormat::Text => print!("{}", render::error_log_table(&rows)),
    }
    Ok(())
}
