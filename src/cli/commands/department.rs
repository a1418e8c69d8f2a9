use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{confirm, output_empty_collection, output_success};
use crate::cli::{render, OutputFormat};
use crate::manager::{ManagerError, ResourceManager};
use crate::resource::{EntityId, Resource};
use crate::resources::{department, Department};

#[derive(Subcommand)]
pub enum DepartmentCommands {
    #[command(about = "List departments")]
    List {
        #[arg(long, help = "Filter by name or description")]
        search: Option<String>,
    },

    #[command(about = "Show one department and its employee roster")]
    Show { id: EntityId },

    #[command(about = "Create a department")]
    Create {
        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a draft field")]
        set: Vec<String>,

        #[arg(long, help = "Read the draft from a YAML or JSON file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Update a department")]
    Update {
        id: EntityId,

        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a draft field")]
        set: Vec<String>,

        #[arg(long, help = "Read the draft from a YAML or JSON file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete a department")]
    Delete {
        id: EntityId,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

pub async fn handle(cmd: DepartmentCommands, output_format: OutputFormat) -> Result<()> {
    match cmd {
        DepartmentCommands::List { search } => list_command(search, output_format).await,
        DepartmentCommands::Show { id } => show_command(id, output_format).await,
        DepartmentCommands::Create { set, file } => create_command(set, file, output_format).await,
        DepartmentCommands::Update { id, set, file } => {
            update_command(id, set, file, output_format).await
        }
        DepartmentCommands::Delete { id, yes } => delete_command(id, yes, output_format).await,
    }
}

async fn list_command(search: Option<String>, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Department>::new();
    manager.load(&client).await?;

    let rows = manager.search(search.as_deref().unwrap_or(""));
    if rows.is_empty() {
        return output_empty_collection(&output_format, "departments", "No departments found");
    }

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "departments": rows }))?
            );
        }
        OutputFormat::Text => print!("{}", render::department_table(&rows)),
    }
    Ok(())
}

async fn show_command(id: EntityId, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let dept: Department = client.fetch(id).await?;
    let roster = department::employees_of(&client, id).await?;

    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "department": dept,
                "employees": roster,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => print!("{}", render::department_detail(&dept, &roster)),
    }
    Ok(())
}

async fn create_command(
    set: Vec<String>,
    file: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Department>::new();
    manager.load(&client).await?;

    manager.begin_create();
    super::apply_draft_inputs(&mut manager, file, set)?;
    let name = manager
        .draft()
        .map(|draft| draft.dept_name.clone())
        .unwrap_or_default();
    manager.submit(&client).await?;

    output_success(
        &output_format,
        &format!("Department '{}' created", name),
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
    let mut manager = ResourceManager::<Department>::new();
    manager.load(&client).await?;

    manager.begin_edit(id)?;
    super::apply_draft_inputs(&mut manager, file, set)?;
    manager.submit(&client).await?;

    output_success(&output_format, &format!("Department {} updated", id), None)
}

async fn delete_command(id: EntityId, yes: bool, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Department>::new();
    manager.load(&client).await?;

    let Some(dept) = manager.find(id) else {
        return Err(ManagerError::NotFound(Department::NAME, id).into());
    };
    let name = dept.dept_name.clone();

    if !yes && !confirm(&format!("Are you sure you want to delete department '{}'?", name))? {
        println!("Aborted.");
        return Ok(());
    }

    manager.remove(&client, id).await?;
    output_success(
        &output_format,
        &format!("Department '{}' deleted", name),
        None,
    )
}
