use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{confirm, output_empty_collection, output_success};
use crate::cli::{render, OutputFormat};
use crate::manager::{ManagerError, ResourceManager};
use crate::resource::{matches_term, EntityId, Resource};
use crate::resources::threat::{self, filter_by_status, StatusFilter};
use crate::resources::Threat;

#[derive(Subcommand)]
pub enum ThreatCommands {
    #[command(about = "List threats")]
    List {
        #[arg(
            long,
            default_value = "all",
            help = "Filter by status: active, resolved, or all"
        )]
        status: String,

        #[arg(long, help = "Filter by title or description")]
        search: Option<String>,
    },

    #[command(about = "Show one threat")]
    Show { id: EntityId },

    #[command(about = "Record a threat")]
    Create {
        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a draft field")]
        set: Vec<String>,

        #[arg(long, help = "Read the draft from a YAML or JSON file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Update a threat")]
    Update {
        id: EntityId,

        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a draft field")]
        set: Vec<String>,

        #[arg(long, help = "Read the draft from a YAML or JSON file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete a threat")]
    Delete {
        id: EntityId,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Mark a threat resolved")]
    Resolve { id: EntityId },

    #[command(about = "Reopen a resolved threat")]
    Reopen { id: EntityId },

    #[command(about = "Totals by status and severity")]
    Stats,
}

pub async fn handle(cmd: ThreatCommands, output_format: OutputFormat) -> Result<()> {
    match cmd {
        ThreatCommands::List { status, search } => list_command(status, search, output_format).await,
        ThreatCommands::Show { id } => show_command(id, output_format).await,
        ThreatCommands::Create { set, file } => create_command(set, file, output_format).await,
        ThreatCommands::Update { id, set, file } => {
            update_command(id, set, file, output_format).await
        }
        ThreatCommands::Delete { id, yes } => delete_command(id, yes, output_format).await,
        ThreatCommands::Resolve { id } => resolve_command(id, output_format).await,
        ThreatCommands::Reopen { id } => reopen_command(id, output_format).await,
        ThreatCommands::Stats => stats_command(output_format).await,
    }
}

async fn list_command(
    status: String,
    search: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let filter = StatusFilter::parse(&status).ok_or_else(|| {
        anyhow::anyhow!("unknown status filter '{status}' (use active, resolved, or all)")
    })?;

    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Threat>::new();
    manager.load(&client).await?;

    let term = search.unwrap_or_default();
    let rows: Vec<&Threat> = filter_by_status(manager.items(), filter)
        .into_iter()
        .filter(|item| matches_term(*item, &term))
        .collect();
    if rows.is_empty() {
        return output_empty_collection(&output_format, "threats", "No threats found");
    }

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "threats": rows }))?
            );
        }
        OutputFormat::Text => print!("{}", render::threat_table(&rows)),
    }
    Ok(())
}

async fn show_command(id: EntityId, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let item: Threat = client.fetch(id).await?;

    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "threat": item }))?);
        }
        OutputFormat::Text => print!("{}", render::threat_detail(&item)),
    }
    Ok(())
}

async fn create_command(
    set: Vec<String>,
    file: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Threat>::new();
    manager.load(&client).await?;

    manager.begin_create();
    super::apply_draft_inputs(&mut manager, file, set)?;
    let title = manager
        .draft()
        .map(|draft| draft.title.clone())
        .unwrap_or_default();
    manager.submit(&client).await?;

    output_success(&output_format, &format!("Threat '{}' recorded", title), None)
}

async fn update_command(
    id: EntityId,
    set: Vec<String>,
    file: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Threat>::new();
    manager.load(&client).await?;

    manager.begin_edit(id)?;
    super::apply_draft_inputs(&mut manager, file, set)?;
    manager.submit(&client).await?;

    output_success(&output_format, &format!("Threat {} updated", id), None)
}

async fn delete_command(id: EntityId, yes: bool, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Threat>::new();
    manager.load(&client).await?;

    let Some(item) = manager.find(id) else {
        return Err(ManagerError::NotFound(Threat::NAME, id).into());
    };
    let title = item.title.clone();

    if !yes && !confirm(&format!("Are you sure you want to delete threat '{}'?", title))? {
        println!("Aborted.");
        return Ok(());
    }

    manager.remove(&client, id).await?;
    output_success(&output_format, &format!("Threat '{}' deleted", title), None)
}

async fn resolve_command(id: EntityId, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let current: Threat = client.fetch(id).await?;
    let updated = threat::resolve(&client, &current).await?;

    output_success(
        &output_format,
        &format!("Threat '{}' resolved", updated.title),
        None,
    )
}

async fn reopen_command(id: EntityId, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let current: Threat = client.fetch(id).await?;
    let updated = threat::reopen(&client, &current).await?;

    output_success(
        &output_format,
        &format!("Threat '{}' reopened", updated.title),
        None,
    )
}

async fn stats_command(output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Threat>::new();
    manager.load(&client).await?;

    let stats = threat::stats(manager.items());
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => print!("{}", render::threat_stats(&stats)),
    }
    Ok(())
}
