use anyhow::Result;
use chrono::Utc;
use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::resolve_password;
use crate::cli::OutputFormat;
use crate::session::{self, Auth};

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Log in and print an access token")]
    Login {
        username: String,

        #[arg(long, help = "Password (falls back to AEGIS_PASSWORD, then a prompt)")]
        password: Option<String>,
    },

    #[command(about = "Register an account and log straight in")]
    Register {
        username: String,
        email: String,

        #[arg(long, help = "Password (falls back to AEGIS_PASSWORD, then a prompt)")]
        password: Option<String>,
    },

    #[command(about = "Show the profile behind the current token")]
    Whoami,

    #[command(about = "Inspect the current token without calling the API")]
    Status,
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> Result<()> {
    match cmd {
        AuthCommands::Login { username, password } => {
            login_command(&username, password, output_format).await
        }
        AuthCommands::Register {
            username,
            email,
            password,
        } => register_command(&username, &email, password, output_format).await,
        AuthCommands::Whoami => whoami_command(output_format).await,
        AuthCommands::Status => status_command(output_format),
    }
}

async fn login_command(
    username: &str,
    password: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let password = resolve_password(password)?;
    let client = super::anon_client()?;
    let tokens = session::login(&client, username, &password).await?;

    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "access": tokens.access,
                "refresh": tokens.refresh,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("Logged in as {}.", username);
            println!();
            println!("export AEGIS_TOKEN={}", tokens.access);
        }
    }
    Ok(())
}

async fn register_command(
    username: &str,
    email: &str,
    password: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let password = resolve_password(password)?;
    let client = super::anon_client()?;
    let tokens = session::register(&client, username, email, &password).await?;

    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "username": username,
                "access": tokens.access,
                "refresh": tokens.refresh,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("Registered {}.", username);
            println!();
            println!("export AEGIS_TOKEN={}", tokens.access);
        }
    }
    Ok(())
}

async fn whoami_command(output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let profile = session::profile(&client).await?;

    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "username": profile.username,
                "email": profile.email,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("{} <{}>", profile.username, profile.email);
        }
    }
    Ok(())
}

fn status_command(output_format: OutputFormat) -> Result<()> {
    let token = match Auth::from_env() {
        Auth::Bearer(token) => token,
        Auth::Anonymous => {
            match output_format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({ "authenticated": false }))?
                    );
                }
                OutputFormat::Text => {
                    println!("Not logged in. Run `aegis auth login <username>` and export AEGIS_TOKEN.");
                }
            }
            return Ok(());
        }
    };

    let info = session::inspect_token(&token)?;
    let expired = info.is_expired(Utc::now());

    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "authenticated": true,
                "token_type": info.token_type,
                "user_id": info.user_id,
                "exp": info.exp,
                "expired": expired,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            if let Some(token_type) = &info.token_type {
                println!("Token type: {}", token_type);
            }
            if let Some(user_id) = info.user_id {
                println!("User id: {}", user_id);
            }
            match info.expires_at() {
                Some(expiry) if expired => println!("Expired: {}", expiry.format("%Y-%m-%d %H:%M %Z")),
                Some(expiry) => println!("Expires: {}", expiry.format("%Y-%m-%d %H:%M %Z")),
                None => println!("No expiry claim."),
            }
        }
    }
    Ok(())
}
