use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{confirm, output_empty_collection, output_success};
use crate::cli::{render, OutputFormat};
use crate::manager::{ManagerError, ResourceManager};
use crate::resource::{EntityId, Resource};
use crate::resources::compliance::{self, ComplianceCategory, ComplianceStatus};
use crate::resources::{ComplianceFilter, ComplianceRecord};

#[derive(Subcommand)]
pub enum ComplianceCommands {
    #[command(about = "List compliance records")]
    List {
        #[arg(long, help = "Filter by category (e.g. GDPR, PCI-DSS)")]
        category: Option<String>,

        #[arg(long, help = "Filter by status (e.g. compliant, needs_review)")]
        status: Option<String>,

        #[arg(long, help = "Filter by title or description")]
        search: Option<String>,
    },

    #[command(about = "Show one compliance record")]
    Show { id: EntityId },

    #[command(about = "Create a compliance record")]
    Create {
        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a draft field")]
        set: Vec<String>,

        #[arg(long, help = "Read the draft from a YAML or JSON file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Update a compliance record")]
    Update {
        id: EntityId,

        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a draft field")]
        set: Vec<String>,

        #[arg(long, help = "Read the draft from a YAML or JSON file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete a compliance record")]
    Delete {
        id: EntityId,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Change one record's status")]
    SetStatus { id: EntityId, status: String },

    #[command(about = "Explain what a category requires")]
    Explain { category: String },

    #[command(about = "Ask the compliance assistant a question")]
    Ask {
        #[arg(required = true, help = "The question, as free words")]
        question: Vec<String>,
    },
}

pub async fn handle(cmd: ComplianceCommands, output_format: OutputFormat) -> Result<()> {
    match cmd {
        ComplianceCommands::List {
            category,
            status,
            search,
        } => list_command(category, status, search, output_format).await,
        ComplianceCommands::Show { id } => show_command(id, output_format).await,
        ComplianceCommands::Create { set, file } => create_command(set, file, output_format).await,
        ComplianceCommands::Update { id, set, file } => {
            update_command(id, set, file, output_format).await
        }
        ComplianceCommands::Delete { id, yes } => delete_command(id, yes, output_format).await,
        ComplianceCommands::SetStatus { id, status } => {
            set_status_command(id, &status, output_format).await
        }
        ComplianceCommands::Explain { category } => explain_command(&category, output_format).await,
        ComplianceCommands::Ask { question } => ask_command(question, output_format).await,
    }
}

fn parse_category(raw: &str) -> Result<ComplianceCategory> {
    ComplianceCategory::parse(raw).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown category '{raw}' (one of GDPR, HIPAA, PCI-DSS, SOX, ISO27001, NIST, CCPA, OTHER)"
        )
    })
}

fn parse_status(raw: &str) -> Result<ComplianceStatus> {
    ComplianceStatus::parse(raw).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown status '{raw}' (one of COMPLIANT, NON_COMPLIANT, IN_PROGRESS, NOT_APPLICABLE, NEEDS_REVIEW)"
        )
    })
}

async fn list_command(
    category: Option<String>,
    status: Option<String>,
    search: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let mut filter = ComplianceFilter::default();
    if let Some(raw) = &category {
        filter.category = Some(parse_category(raw)?);
    }
    if let Some(raw) = &status {
        filter.status = Some(parse_status(raw)?);
    }

    let client = super::authed_client()?;
    let mut manager = ResourceManager::<ComplianceRecord>::new();
    manager.set_filter(
        filter
            .query()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
    );
    manager.load(&client).await?;

    let rows = manager.search(search.as_deref().unwrap_or(""));
    if rows.is_empty() {
        return output_empty_collection(&output_format, "records", "No compliance records found");
    }

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "records": rows }))?
            );
        }
        OutputFormat::Text => print!("{}", render::compliance_table(&rows)),
    }
    Ok(())
}

async fn show_command(id: EntityId, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let record: ComplianceRecord = client.fetch(id).await?;

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "record": record }))?
            );
        }
        OutputFormat::Text => print!("{}", render::compliance_detail(&record)),
    }
    Ok(())
}

async fn create_command(
    set: Vec<String>,
    file: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<ComplianceRecord>::new();
    manager.load(&client).await?;

    manager.begin_create();
    super::apply_draft_inputs(&mut manager, file, set)?;
    let title = manager
        .draft()
        .map(|draft| draft.title.clone())
        .unwrap_or_default();
    manager.submit(&client).await?;

    output_success(
        &output_format,
        &format!("Compliance record '{}' created", title),
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
    let mut manager = ResourceManager::<ComplianceRecord>::new();
    manager.load(&client).await?;

    manager.begin_edit(id)?;
    super::apply_draft_inputs(&mut manager, file, set)?;
    manager.submit(&client).await?;

    output_success(
        &output_format,
        &format!("Compliance record {} updated", id),
        None,
    )
}

async fn delete_command(id: EntityId, yes: bool, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let mut manager = ResourceManager::<ComplianceRecord>::new();
    manager.load(&client).await?;

    let Some(record) = manager.find(id) else {
        return Err(ManagerError::NotFound(ComplianceRecord::NAME, id).into());
    };
    let title = record.title.clone();

    if !yes
        && !confirm(&format!(
            "Are you sure you want to delete compliance record '{}'?",
            title
        ))?
    {
        println!("Aborted.");
        return Ok(());
    }

    manager.remove(&client, id).await?;
    output_success(
        &output_format,
        &format!("Compliance record '{}' deleted", title),
        None,
    )
}

async fn set_status_command(id: EntityId, status: &str, output_format: OutputFormat) -> Result<()> {
    let status = parse_status(status)?;
    let client = super::authed_client()?;
    let record = compliance::change_status(&client, id, status).await?;

    output_success(
        &output_format,
        &format!("'{}' is now {}", record.title, record.status.label()),
        None,
    )
}

async fn explain_command(category: &str, output_format: OutputFormat) -> Result<()> {
    let category = parse_category(category)?;
    let client = super::authed_client()?;
    let explanation = compliance::explain_category(&client, category).await?;

    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "category": category.as_str(),
                "explanation": explanation,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => println!("{}", explanation),
    }
    Ok(())
}

async fn ask_command(question: Vec<String>, output_format: OutputFormat) -> Result<()> {
    let query = question.join(" ");
    let client = super::authed_client()?;
    let answer = compliance::ask_assistant(&client, &query).await?;

    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "query": query,
                "response": answer,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => println!("{}", answer),
    }
    Ok(())
}
