use anyhow::Result;
use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::utils::output_empty_collection;
use crate::cli::{render, OutputFormat};
use crate::client::ApiClient;
use crate::threat_path::{self, PathView, ThreatData};

#[derive(Subcommand)]
pub enum PathCommands {
    #[command(about = "List charted breach pathways")]
    List,

    #[command(about = "Show one pathway's briefing panel")]
    Show {
        #[arg(help = "Pathway id; defaults to the first")]
        id: Option<String>,
    },

    #[command(about = "Resolve the pathway a graph node belongs to")]
    Focus { node_id: String },

    #[command(about = "Summarize the graph, or emit Graphviz with --dot")]
    Graph {
        #[arg(long, help = "Emit Graphviz DOT instead of a summary")]
        dot: bool,
    },
}

pub async fn handle(cmd: PathCommands, output_format: OutputFormat) -> Result<()> {
    match cmd {
        PathCommands::List => list_command(output_format).await,
        PathCommands::Show { id } => show_command(id, output_format).await,
        PathCommands::Focus { node_id } => focus_command(node_id, output_format).await,
        PathCommands::Graph { dot } => graph_command(dot, output_format).await,
    }
}

/// One fetch, two views of it: the raw JSON for `--json` output and the
/// typed model for everything else.
async fn load_payload(client: &ApiClient) -> Result<(Value, ThreatData)> {
    let raw: Value = client.get_json("api/threat-data").await?;
    let data: ThreatData = serde_json::from_value(raw.clone())
        .map_err(|err| anyhow::anyhow!("malformed threat-data payload: {err}"))?;
    Ok((raw, data))
}

fn raw_path<'a>(raw: &'a Value, id: &str) -> Option<&'a Value> {
    raw.get("paths")?
        .as_array()?
        .iter()
        .find(|path| path.get("id").and_then(Value::as_str) == Some(id))
}

async fn list_command(output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let (raw, data) = load_payload(&client).await?;
    let view = PathView::new(data);

    if view.data().paths.is_empty() {
        return output_empty_collection(&output_format, "paths", "No pathways charted");
    }

    match output_format {
        OutputFormat::Json => {
            let empty = Value::Array(Vec::new());
            let paths = raw.get("paths").unwrap_or(&empty);
            println!("{}", serde_json::to_string_pretty(paths)?);
        }
        OutputFormat::Text => print!("{}", render::path_list(&view)),
    }
    Ok(())
}

async fn show_command(id: Option<String>, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let (raw, data) = load_payload(&client).await?;
    let mut view = PathView::new(data);

    if let Some(id) = &id {
        if !view.select_path(id) {
            anyhow::bail!("no pathway with id '{id}'");
        }
    }
    let Some(panel) = view.panel() else {
        anyhow::bail!("no pathways charted");
    };

    match output_format {
        OutputFormat::Json => {
            let selected = view.selected_id().unwrap_or_default();
            let path = raw_path(&raw, selected).cloned().unwrap_or(Value::Null);
            println!("{}", serde_json::to_string_pretty(&path)?);
        }
        OutputFormat::Text => print!("{}", render::path_panel(&panel)),
    }
    Ok(())
}

async fn focus_command(node_id: String, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let (raw, data) = load_payload(&client).await?;
    let mut view = PathView::new(data);

    if !view.data().nodes.iter().any(|node| node.id == node_id) {
        anyhow::bail!("no node with id '{node_id}'");
    }

    let Some(path_id) = view.path_of_node(&node_id).map(str::to_string) else {
        match output_format {
            OutputFormat::Json => {
                let response = json!({ "node": node_id, "path": Value::Null });
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            OutputFormat::Text => println!("Node '{}' is on no charted pathway.", node_id),
        }
        return Ok(());
    };

    view.focus_node(&node_id);
    match output_format {
        OutputFormat::Json => {
            let path = raw_path(&raw, &path_id).cloned().unwrap_or(Value::Null);
            let response = json!({ "node": node_id, "path": path });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => match view.panel() {
            Some(panel) => print!("{}", render::path_panel(&panel)),
            None => println!("No details recorded for pathway '{}'.", path_id),
        },
    }
    Ok(())
}

async fn graph_command(dot: bool, output_format: OutputFormat) -> Result<()> {
    let client = super::authed_client()?;
    let data = threat_path::fetch(&client).await?;
    let view = PathView::new(data);

    if dot {
        print!("{}", view.to_dot());
        return Ok(());
    }

    let graph = view.to_graph();
    match output_format {
        OutputFormat::Json => {
            let entry_points: Vec<&str> = graph
                .entry_points()
                .iter()
                .map(|node| node.id.as_str())
                .collect();
            let response = json!({
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "entryPoints": entry_points,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => print!("{}", render::graph_summary(&graph)),
    }
    Ok(())
}
