use super::graph::ThreatGraph;
use super::model::{NodeKind, SuspicionLevel, ThreatData, ThreatEdge, ThreatNode, ThreatPath};

/// Screen palette, shared by the terminal renderer and the DOT export.
pub mod palette {
    pub const ACTION_HIGH: &str = "#ef4444";
    pub const ACTION_MEDIUM: &str = "#f59e0b";
    pub const ACTION_LOW: &str = "#3b82f6";
    pub const RESOURCE: &str = "#10b981";
    pub const SYSTEM: &str = "#8b5cf6";
    pub const UNKNOWN: &str = "#6b7280";
    pub const EDGE_SELECTED: &str = "#f43f5e";
    pub const EDGE_DEFAULT: &str = "#64748b";
}

pub const EDGE_SELECTED_WIDTH: f64 = 3.0;
pub const EDGE_DEFAULT_WIDTH: f64 = 1.5;

pub fn node_color(node: &ThreatNode) -> &'static str {
    match node.kind {
        NodeKind::Action => match node.suspicious_level {
            Some(SuspicionLevel::High) => palette::ACTION_HIGH,
            Some(SuspicionLevel::Medium) => palette::ACTION_MEDIUM,
            _ => palette::ACTION_LOW,
        },
        NodeKind::Resource => palette::RESOURCE,
        NodeKind::System => palette::SYSTEM,
        NodeKind::Unknown => palette::UNKNOWN,
    }
}

/// Long labels get cut to their first two words inside a node circle.
pub fn short_label(label: &str) -> String {
    let words: Vec<&str> = label.split(' ').collect();
    if words.len() > 2 {
        format!("{} {}...", words[0], words[1])
    } else {
        label.to_string()
    }
}

/// Selection state for the breach-pathway screen. Holds the fetched
/// data plus which pathway is highlighted; everything rendered derives
/// from these two.
#[derive(Debug, Clone)]
pub struct PathView {
    data: ThreatData,
    selected: Option<String>,
}

/// Detail panel for the selected pathway, fields verbatim from the
/// server except the entry point, which is resolved to its node label.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPanel<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub severity: f64,
    pub entry_point: Option<&'a str>,
    pub critical_resources: &'a [String],
    pub risk_factors: &'a [String],
    pub recommendation: &'a str,
}

impl PathView {
    /// The first pathway starts out selected, when there is one.
    pub fn new(data: ThreatData) -> Self {
        let selected = data.paths.first().map(|path| path.id.clone());
        PathView { data, selected }
    }

    pub fn data(&self) -> &ThreatData {
        &self.data
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected pathway's record, if the selected id resolves to
    /// one. Focusing a node can select an id with no matching pathway;
    /// the detail panel simply stays hidden then.
    pub fn selected_path(&self) -> Option<&ThreatPath> {
        let id = self.selected.as_deref()?;
        self.data.paths.iter().find(|path| path.id == id)
    }

    /// Pick a pathway from the list. Unknown ids are refused, matching
    /// the list buttons which only exist for real pathways.
    pub fn select_path(&mut self, id: &str) -> bool {
        if self.data.paths.iter().any(|path| path.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// The pathway a node belongs to, by the edge-order rule: the first
    /// edge touching the node that carries a pathway id wins.
    pub fn path_of_node(&self, node_id: &str) -> Option<&str> {
        self.data
            .edges
            .iter()
            .filter(|edge| edge.source == node_id || edge.target == node_id)
            .find_map(|edge| edge.path_id.as_deref())
    }

    /// Focusing a node selects whatever pathway it belongs to. A node on
    /// no pathway leaves the selection alone.
    pub fn focus_node(&mut self, node_id: &str) -> Option<&ThreatPath> {
        if let Some(path_id) = self.path_of_node(node_id).map(str::to_string) {
            self.selected = Some(path_id);
        }
        self.selected_path()
    }

    /// An edge is emphasized iff it belongs to the selected pathway.
    pub fn is_edge_selected(&self, edge: &ThreatEdge) -> bool {
        match (&self.selected, &edge.path_id) {
            (Some(selected), Some(path_id)) => selected == path_id,
            _ => false,
        }
    }

    /// Stroke color and width for one edge under the current selection.
    pub fn edge_style(&self, edge: &ThreatEdge) -> (&'static str, f64) {
        if self.is_edge_selected(edge) {
            (palette::EDGE_SELECTED, EDGE_SELECTED_WIDTH)
        } else {
            (palette::EDGE_DEFAULT, EDGE_DEFAULT_WIDTH)
        }
    }

    pub fn entry_point_label(&self, path: &ThreatPath) -> Option<&str> {
        self.data
            .nodes
            .iter()
            .find(|node| node.id == path.entry_point)
            .map(|node| node.label.as_str())
    }

    pub fn panel(&self) -> Option<PathPanel<'_>> {
        let path = self.selected_path()?;
        Some(PathPanel {
            name: &path.name,
            description: &path.description,
            severity: path.severity,
            entry_point: self.entry_point_label(path),
            critical_resources: &path.critical_resources,
            risk_factors: &path.risk_factors,
            recommendation: &path.recommendation,
        })
    }

    pub fn to_graph(&self) -> ThreatGraph<'_> {
        ThreatGraph::new(&self.data)
    }

    /// Graphviz rendering of the graph under the current selection.
    pub fn to_dot(&self) -> String {
        self.to_graph().to_dot(self)
    }
}
