use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{confirm, output_empty_collection, output_success};
use crate::cli::{render, OutputFormat};
use crate::manager::{ManagerError, ResourceManager};
use crate::resource::{EntityId, Resource};
use crate::resources::AccessLevel;

#[derive(Subcommand)]
pub enum AccessLevelCommands {
    #[command(about = "List access levels")]
    List {
        #[arg(long, help = "Filter by name or description")]
        search: Option<String>,
    },

    #[command(about = "Show one access level")]
    Show { id: EntityId },

    #[command(about = "Create an access level")]
    Create {
        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a draft field")]
        set: Vec<String>,

        #[arg(long, help = "Read the draft from a YAML or JSON file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Update an access level")]
    Update {
        id: EntityId,

        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a draft field")]
        set: Vec<String>,

        #[arg(long, help = "Read the draft from a YAML or JSON file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete an access level")]
    Delete {
        id: EntityId,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

pub async fn handle(cmd: AccessLevelCommands, output_format: OutputFormat) -> Result<()> {
    match cmd {
        AccessLevelCommands::List { search } => list_command(search, output_format).await,
        AccessLevelCommands::Show { id } => show_command(id, output_format).await,
        AccessLevelCommands::Create { set, file } => create_command(set, file, output_format).await,
        AccessLevelCommands::Update { id, set, file } => {
            update_command(id, set, file, output_format).await
        }
        AccessLevelCommands::Delete { id, yes } => delete_command(id, yes, output_format).await,
    }
}

async fn list_command(search: Option<String>, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<AccessLevel>::new();
    manager.load(&client).await?;

    let rows = manager.search(search.as_deref().unwrap_or(""));
    if rows.is_empty() {
        return output_empty_collection(&output_format, "access_levels", "No access levels found");
    }

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "access_levels": rows }))?
            );
        }
        OutputFormat::Text => print!("{}", render::access_level_table(&rows)),
    }
    Ok(())
}

async fn show_command(id: EntityId, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let level: AccessLevel = client.fetch(id).await?;

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "access_level": level }))?
            );
        }
        OutputFormat::Text => print!("{}", render::access_level_detail(&level)),
    }
    Ok(())
}

async fn create_command(
    set: Vec<String>,
    file: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<AccessLevel>::new();
    manager.load(&client).await?;

    manager.begin_create();
    super::apply_draft_inputs(&mut manager, file, set)?;
    let name = manager
        .draft()
        .map(|draft| draft.access_name.clone())
        .unwrap_or_default();
    manager.submit(&client).await?;

    output_success(
        &output_format,
        &format!("Access level '{}' created", name),
        None,
    )
}

async fn update_command(
    id: EntityId,
    set: Vec<String>,
    file: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<AccessLevel>::new();
    manager.load(&client).await?;

    manager.begin_edit(id)?;
    super::apply_draft_inputs(&mut manager, file, set)?;
    manager.submit(&client).await?;

    output_success(&output_format, &format!("Access level {} updated", id), None)
}

async fn delete_command(id: EntityId, yes: bool, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<AccessLevel>::new();
    manager.load(&client).await?;

    let Some(level) = manager.find(id) else {
        return Err(ManagerError::NotFound(AccessLevel::NAME, id).into());
    };
    let name = level.access_name.clone();

    if !yes && !confirm(&format!("Are you sure you want to delete access level '{}'?", name))? {
        println!("Aborted.");
        return Ok(());
    }

    manager.remove(&client, id).await?;
    output_success(
        &output_format,
        &format!("Access level '{}' deleted", name),
        None,
    )
}
