use std::collections::HashMap;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use tracing::warn;

use super::model::{ThreatData, ThreatEdge, ThreatNode};
use super::view::{node_color, short_label, PathView};

/// The activity graph in adjacency form, for structural queries and
/// the DOT export. Node and edge weights borrow the wire model.
pub struct ThreatGraph<'a> {
    graph: DiGraph<&'a ThreatNode, &'a ThreatEdge>,
    index: HashMap<&'a str, NodeIndex>,
}

impl<'a> ThreatGraph<'a> {
    /// Edges naming an id absent from the node list are skipped, not
    /// invented.
    pub fn new(data: &'a ThreatData) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();
        for node in &data.nodes {
            let idx = graph.add_node(node);
            index.insert(node.id.as_str(), idx);
        }
        for edge in &data.edges {
            match (index.get(edge.source.as_str()), index.get(edge.target.as_str())) {
                (Some(&source), Some(&target)) => {
                    graph.add_edge(source, target, edge);
                }
                _ => warn!("edge {} has a dangling endpoint, skipping", edge.id),
            }
        }
        ThreatGraph { graph, index }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes with no inbound edges: the places an intrusion can start.
    pub fn entry_points(&self) -> Vec<&'a ThreatNode> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| self.graph[idx])
            .collect()
    }

    /// Graphviz DOT with the screen's palette. Edges of the selected
    /// pathway are drawn heavier, same as on screen.
    pub fn to_dot(&self, view: &PathView) -> String {
        let edge_attrs = |_, edge: petgraph::graph::EdgeReference<'_, &'a ThreatEdge>| {
            let (color, width) = view.edge_style(edge.weight());
            format!(
                "label = \"{}\" color = \"{}\" penwidth = {}",
                dot_escape(&edge.weight().label),
                color,
                width
            )
        };
        let node_attrs = |_, (_, node): (NodeIndex, &&'a ThreatNode)| {
            format!(
                "label = \"{}\" style = filled fillcolor = \"{}\"",
                dot_escape(&short_label(&node.label)),
                node_color(node)
            )
        };
        let dot = Dot::with_attr_getters(
            &self.graph,
            &[Config::NodeNoLabel, Config::EdgeNoLabel],
            &edge_attrs,
            &node_attrs,
        );
        format!("{dot:?}")
    }
}

fn dot_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
