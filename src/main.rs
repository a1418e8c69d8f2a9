use clap::Parser;
use tracing_subscriber::EnvFilter;

use aegis_console::cli::Cli;
use aegis_console::error::ApiError;
use aegis_console::manager::ManagerError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so AEGIS_API_URL, AEGIS_TOKEN etc. are picked up.
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = aegis_console::cli::run(cli).await {
        match std::env::var("AEGIS_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        if is_auth_failure(&e) {
            eprintln!("Run `aegis auth login <username>` and export AEGIS_TOKEN.");
        }
        std::process::exit(1);
    }

    Ok(())
}

fn is_auth_failure(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(cause.downcast_ref::<ApiError>(), Some(ApiError::AuthRequired))
            || matches!(
                cause.downcast_ref::<ManagerError>(),
                Some(ManagerError::AuthRequired)
            )
    })
}
