pub mod commands;
pub mod render;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "aegis")]
#[command(about = "Aegis Console - Command-line interface for the access management API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Authentication and token management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Department management")]
    Department {
        #[command(subcommand)]
        cmd: commands::department::DepartmentCommands,
    },

    #[command(about = "Employee management")]
    Employee {
        #[command(subcommand)]
        cmd: commands::employee::EmployeeCommands,
    },

    #[command(about = "Access level management")]
    AccessLevel {
        #[command(subcommand)]
        cmd: commands::access_level::AccessLevelCommands,
    },

    #[command(about = "Access, activity, and error log feeds")]
    Logs {
        #[command(subcommand)]
        cmd: commands::logs::LogCommands,
    },

    #[command(about = "Threat log management")]
    Threat {
        #[command(subcommand)]
        cmd: commands::threat::ThreatCommands,
    },

    #[command(about = "Compliance tracking and assistant")]
    Compliance {
        #[command(subcommand)]
        cmd: commands::compliance::ComplianceCommands,
    },

    #[command(about = "Threat path analysis")]
    Paths {
        #[command(subcommand)]
        cmd: commands::paths::PathCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Department { cmd } => commands::department::handle(cmd, output_format).await,
        Commands::Employee { cmd } => commands::employee::handle(cmd, output_format).await,
        Commands::AccessLevel { cmd } => commands::access_level::handle(cmd, output_format).await,
        Commands::Logs { cmd } => commands::logs::handle(cmd, output_format).await,
        Commands::Threat { cmd } => commands::threat::handle(cmd, output_format).await,
        Commands::Compliance { cmd } => commands::compliance::handle(cmd, output_format).await,
        Commands::Paths { cmd } => commands::paths::handle(cmd, output_format).await,
    }
}
