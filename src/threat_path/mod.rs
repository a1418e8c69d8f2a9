pub mod graph;
pub mod model;
pub mod view;

pub use graph::ThreatGraph;
pub use model::{
    NodeKind, SeverityBand, SuspicionLevel, ThreatData, ThreatEdge, ThreatNode, ThreatPath,
};
pub use view::{node_color, palette, short_label, PathPanel, PathView};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Pull the whole graph payload: nodes, edges, and derived pathways.
pub async fn fetch(client: &ApiClient) -> Result<ThreatData, ApiError> {
    client.get_json("api/threat-data").await
}

