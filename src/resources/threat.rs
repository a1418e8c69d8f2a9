use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resource::{Editable, EntityId, MissingField, Resource};

/// A detected threat. `detected_at` is stamped by the backend when the
/// record is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Threat {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub status: ThreatStatus,
    #[serde(default)]
    pub detected_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatStatus {
    #[default]
    Active,
    Resolved,
}

impl ThreatStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "active" => Some(ThreatStatus::Active),
            "resolved" => Some(ThreatStatus::Resolved),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThreatStatus::Active => "active",
            ThreatStatus::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for ThreatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreatDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub status: ThreatStatus,
}

impl Resource for Threat {
    const NAME: &'static str = "threat";
    const COLLECTION: &'static str = "api/logs/threat";

    fn id(&self) -> EntityId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

impl Editable for Threat {
    type Draft = ThreatDraft;

    fn draft_from(&self) -> ThreatDraft {
        ThreatDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            severity: self.severity,
            status: self.status,
        }
    }

    fn set_field(draft: &mut ThreatDraft, field: &str, value: &str) -> bool {
        match field {
            "title" => draft.title = value.to_string(),
            "description" => draft.description = value.to_string(),
            "severity" => match Severity::parse(value) {
                Some(severity) => draft.severity = severity,
                None => return false,
            },
            "status" => match ThreatStatus::parse(value) {
                Some(status) => draft.status = status,
                None => return false,
            },
            _ => return false,
        }
        true
    }

    fn validate(draft: &ThreatDraft) -> Result<(), MissingField> {
        if draft.title.trim().is_empty() {
            return Err(MissingField("title"));
        }
        Ok(())
    }
}

/// Status tab on the threat screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Resolved,
}

impl StatusFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "all" => Some(StatusFilter::All),
            "active" => Some(StatusFilter::Active),
            "resolved" => Some(StatusFilter::Resolved),
            _ => None,
        }
    }

    pub fn accepts(self, threat: &Threat) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => threat.status == ThreatStatus::Active,
            StatusFilter::Resolved => threat.status == ThreatStatus::Resolved,
        }
    }
}

/// Filter the threat list by status tab. Like search, this is a view:
/// `items` is left untouched.
pub fn filter_by_status(items: &[Threat], filter: StatusFilter) -> Vec<&Threat> {
    items.iter().filter(|threat| filter.accepts(threat)).collect()
}

/// Headline numbers for the threat screen's summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThreatStats {
    pub total: usize,
    pub active: usize,
    pub high_severity: usize,
}

pub fn stats(items: &[Threat]) -> ThreatStats {
    ThreatStats {
        total: items.len(),
        active: items.iter().filter(|t| t.status == ThreatStatus::Active).count(),
        high_severity: items.iter().filter(|t| t.severity == Severity::High).count(),
    }
}

/// The backend has no dedicated status endpoint for threats; a status
/// change is a full update with every other field carried over.
pub async fn set_status(
    client: &ApiClient,
    threat: &Threat,
    status: ThreatStatus,
) -> Result<Threat, ApiError> {
    let mut draft = threat.draft_from();
    draft.status = status;
    client.update::<Threat>(threat.id, &draft).await
}

pub async fn resolve(client: &ApiClient, threat: &Threat) -> Result<Threat, ApiError> {
    set_status(client, threat, ThreatStatus::Resolved).await
}

pub async fn reopen(client: &ApiClient, threat: &Threat) -> Result<Threat, ApiError> {
    set_status(client, threat, ThreatStatus::Active).await
}
