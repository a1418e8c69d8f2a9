use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{confirm, output_empty_collection, output_success};
use crate::cli::{render, OutputFormat};
use crate::manager::{ManagerError, ResourceManager};
use crate::resource::{EntityId, Resource};
use crate::resources::Employee;

#[derive(Subcommand)]
pub enum EmployeeCommands {
    #[command(about = "List employees")]
    List {
        #[arg(long, help = "Filter by name, email, or department")]
        search: Option<String>,
    },

    #[command(about = "Show one employee")]
    Show { id: EntityId },

    #[command(about = "Create an employee")]
    Create {
        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a draft field")]
        set: Vec<String>,

        #[arg(long, help = "Read the draft from a YAML or JSON file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Update an employee")]
    Update {
        id: EntityId,

        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a draft field")]
        set: Vec<String>,

        #[arg(long, help = "Read the draft from a YAML or JSON file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete an employee")]
    Delete {
        id: EntityId,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

pub async fn handle(cmd: EmployeeCommands, output_format: OutputFormat) -> Result<()> {
    match cmd {
        EmployeeCommands::List { search } => list_command(search, output_format).await,
        EmployeeCommands::Show { id } => show_command(id, output_format).await,
        EmployeeCommands::Create { set, file } => create_command(set, file, output_format).await,
        EmployeeCommands::Update { id, set, file } => {
            update_command(id, set, file, output_format).await
        }
        EmployeeCommands::Delete { id, yes } => delete_command(id, yes, output_format).await,
    }
}

async fn list_command(search: Option<String>, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Employee>::new();
    manager.load(&client).await?;

    let rows = manager.search(search.as_deref().unwrap_or(""));
    if rows.is_empty() {
        return output_empty_collection(&output_format, "employees", "No employees found");
    }

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "employees": rows }))?
            );
        }
        OutputFormat::Text => print!("{}", render::employee_table(&rows)),
    }
    Ok(())
}

async fn show_command(id: EntityId, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let employee: Employee = client.fetch(id).await?;

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "employee": employee }))?
            );
        }
        OutputFormat::Text => print!("{}", render::employee_detail(&employee)),
    }
    Ok(())
}

async fn create_command(
    set: Vec<String>,
    file: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Employee>::new();
    manager.load(&client).await?;

    manager.begin_create();
    super::apply_draft_inputs(&mut manager, file, set)?;
    let name = manager
        .draft()
        .map(|draft| draft.full_name.clone())
        .unwrap_or_default();
    manager.submit(&client).await?;

    output_success(&output_format, &format!("Employee '{}' created", name), None)
}

async fn update_command(
    id: EntityId,
    set: Vec<String>,
    file: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Employee>::new();
    manager.load(&client).await?;

    manager.begin_edit(id)?;
    super::apply_draft_inputs(&mut manager, file, set)?;
    manager.submit(&client).await?;

    output_success(&output_format, &format!("Employee {} updated", id), None)
}

async fn delete_command(id: EntityId, yes: bool, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<Employee>::new();
    manager.load(&client).await?;

    let Some(employee) = manager.find(id) else {
        return Err(ManagerError::NotFound(Employee::NAME, id).into());
    };
    let name = employee.full_name.clone();

    if !yes && !confirm(&format!("Are you sure you want to delete employee '{}'?", name))? {
        println!("Aborted.");
        return Ok(());
    }

    manager.remove(&client, id).await?;
    output_success(&output_format, &format!("Employee '{}' deleted", name), None)
}
