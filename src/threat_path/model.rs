use serde::Deserialize;

/// Payload of the threat-data endpoint: a directed graph of observed
/// activity plus the breach pathways derived from it. Field names are
/// camelCase on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThreatData {
    #[serde(default)]
    pub nodes: Vec<ThreatNode>,
    #[serde(default)]
    pub edges: Vec<ThreatEdge>,
    #[serde(default)]
    pub paths: Vec<ThreatPath>,
}

/// One vertex of the activity graph.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Only meaningful on action nodes.
    #[serde(default)]
    pub suspicious_level: Option<SuspicionLevel>,
    /// Short caption shown under action nodes.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeKind {
    Action,
    Resource,
    System,
    #[default]
    Unknown,
}

impl NodeKind {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "action" => NodeKind::Action,
            "resource" => NodeKind::Resource,
            "system" => NodeKind::System,
            _ => NodeKind::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(NodeKind::from_wire(&raw))
    }
}

/// How suspicious an action looks. Anything outside high/medium counts
/// as low, matching the screen's color rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspicionLevel {
    High,
    Medium,
    Low,
}

impl SuspicionLevel {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "high" => SuspicionLevel::High,
            "medium" => SuspicionLevel::Medium,
            _ => SuspicionLevel::Low,
        }
    }
}

impl<'de> Deserialize<'de> for SuspicionLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(SuspicionLevel::from_wire(&raw))
    }
}

/// One directed edge. `path_id` links the edge to a breach pathway;
/// edges off every pathway carry null.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub path_id: Option<String>,
}

/// A derived breach pathway with its narrative fields, shown verbatim
/// in the detail panel.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatPath {
    pub id: String,
    pub name: String,
    /// 0 to 10 scale.
    pub severity: f64,
    #[serde(default)]
    pub description: String,
    /// Node id where the pathway starts.
    #[serde(default)]
    pub entry_point: String,
    #[serde(default)]
    pub critical_resources: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub recommendation: String,
}

/// Display band for a pathway's severity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityBand {
    High,
    Medium,
    Low,
}

impl SeverityBand {
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityBand::High => "high",
            SeverityBand::Medium => "medium",
            SeverityBand::Low => "low",
        }
    }
}

impl ThreatPath {
    pub fn severity_band(&self) -> SeverityBand {
        if self.severity >= 8.0 {
            SeverityBand::High
        } else if self.severity >= 6.0 {
            SeverityBand::Medium
        } else {
            SeverityBand::Low
        }
    }
}
