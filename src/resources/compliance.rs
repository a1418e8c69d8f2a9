use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resource::{Editable, EntityId, MissingField, Resource};

/// A tracked compliance requirement (GDPR, HIPAA, ...) with its current
/// audit status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceRecord {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub category: ComplianceCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub status: ComplianceStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceCategory {
    #[default]
    Gdpr,
    Hipaa,
    #[serde(rename = "PCI-DSS")]
    PciDss,
    Sox,
    Iso27001,
    Nist,
    Ccpa,
    Other,
}

impl ComplianceCategory {
    pub const ALL: [ComplianceCategory; 8] = [
        ComplianceCategory::Gdpr,
        ComplianceCategory::Hipaa,
        ComplianceCategory::PciDss,
        ComplianceCategory::Sox,
        ComplianceCategory::Iso27001,
        ComplianceCategory::Nist,
        ComplianceCategory::Ccpa,
        ComplianceCategory::Other,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        let token = value.trim().to_uppercase();
        Self::ALL.iter().copied().find(|c| c.as_str() == token)
    }

    /// Wire token, also what the backend stores.
    pub fn as_str(self) -> &'static str {
        match self {
            ComplianceCategory::Gdpr => "GDPR",
            ComplianceCategory::Hipaa => "HIPAA",
            ComplianceCategory::PciDss => "PCI-DSS",
            ComplianceCategory::Sox => "SOX",
            ComplianceCategory::Iso27001 => "ISO27001",
            ComplianceCategory::Nist => "NIST",
            ComplianceCategory::Ccpa => "CCPA",
            ComplianceCategory::Other => "OTHER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplianceCategory::Gdpr => "General Data Protection Regulation",
            ComplianceCategory::Hipaa => "Health Insurance Portability and Accountability Act",
            ComplianceCategory::PciDss => "Payment Card Industry Data Security Standard",
            ComplianceCategory::Sox => "Sarbanes-Oxley Act",
            ComplianceCategory::Iso27001 => "ISO 27001",
            ComplianceCategory::Nist => "National Institute of Standards and Technology",
            ComplianceCategory::Ccpa => "California Consumer Privacy Act",
            ComplianceCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ComplianceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    InProgress,
    NotApplicable,
    #[default]
    NeedsReview,
}

impl ComplianceStatus {
    pub const ALL: [ComplianceStatus; 5] = [
        ComplianceStatus::Compliant,
        ComplianceStatus::NonCompliant,
        ComplianceStatus::InProgress,
        ComplianceStatus::NotApplicable,
        ComplianceStatus::NeedsReview,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        let token = value.trim().to_uppercase().replace('-', "_");
        Self::ALL.iter().copied().find(|s| s.as_str() == token)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "COMPLIANT",
            ComplianceStatus::NonCompliant => "NON_COMPLIANT",
            ComplianceStatus::InProgress => "IN_PROGRESS",
            ComplianceStatus::NotApplicable => "NOT_APPLICABLE",
            ComplianceStatus::NeedsReview => "NEEDS_REVIEW",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NonCompliant => "Non-Compliant",
            ComplianceStatus::InProgress => "In Progress",
            ComplianceStatus::NotApplicable => "Not Applicable",
            ComplianceStatus::NeedsReview => "Needs Review",
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceDraft {
    pub title: String,
    #[serde(default)]
    pub category: ComplianceCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub status: ComplianceStatus,
    // Serialized as an explicit null when unset so an update can clear it.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

impl Default for ComplianceDraft {
    fn default() -> Self {
        ComplianceDraft {
            title: String::new(),
            category: ComplianceCategory::Gdpr,
            description: String::new(),
            requirements: String::new(),
            status: ComplianceStatus::NeedsReview,
            due_date: None,
            notes: String::new(),
        }
    }
}

impl Resource for ComplianceRecord {
    const NAME: &'static str = "compliance record";
    const COLLECTION: &'static str = "api/security/compliance";

    fn id(&self) -> EntityId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.requirements]
    }
}

impl Editable for ComplianceRecord {
    type Draft = ComplianceDraft;

    fn draft_from(&self) -> ComplianceDraft {
        ComplianceDraft {
            title: self.title.clone(),
            category: self.category,
            description: self.description.clone(),
            requirements: self.requirements.clone(),
            status: self.status,
            due_date: self.due_date,
            notes: self.notes.clone(),
        }
    }

    fn set_field(draft: &mut ComplianceDraft, field: &str, value: &str) -> bool {
        match field {
            "title" => draft.title = value.to_string(),
            "category" => match ComplianceCategory::parse(value) {
                Some(category) => draft.category = category,
                None => return false,
            },
            "description" => draft.description = value.to_string(),
            "requirements" => draft.requirements = value.to_string(),
            "status" => match ComplianceStatus::parse(value) {
                Some(status) => draft.status = status,
                None => return false,
            },
            "due_date" => {
                if value.trim().is_empty() {
                    draft.due_date = None;
                } else {
                    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
                        Ok(date) => draft.due_date = Some(date),
                        Err(_) => return false,
                    }
                }
            }
            "notes" => draft.notes = value.to_string(),
            _ => return false,
        }
        true
    }

    fn validate(draft: &ComplianceDraft) -> Result<(), MissingField> {
        if draft.title.trim().is_empty() {
            return Err(MissingField("title"));
        }
        Ok(())
    }
}

/// Category and status filters for the list endpoint. `None` means the
/// screen's "all" option and sends no parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplianceFilter {
    pub category: Option<ComplianceCategory>,
    pub status: Option<ComplianceStatus>,
}

impl ComplianceFilter {
    pub fn query(&self) -> Vec<(&'static str, &'static str)> {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(("category", category.as_str()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str()));
        }
        params
    }
}

/// Flip one record's status without touching the rest of it. Returns the
/// updated record.
pub async fn change_status(
    client: &ApiClient,
    id: EntityId,
    status: ComplianceStatus,
) -> Result<ComplianceRecord, ApiError> {
    #[derive(Serialize)]
    struct Body {
        status: ComplianceStatus,
    }
    let path = format!("{}/{id}/change_status", ComplianceRecord::COLLECTION);
    client.post_json(&path, &Body { status }).await
}

/// Free-form question to the compliance assistant.
pub async fn ask_assistant(client: &ApiClient, query: &str) -> Result<String, ApiError> {
    #[derive(Serialize)]
    struct Question<'a> {
        query: &'a str,
    }
    #[derive(Deserialize)]
    struct Answer {
        response: String,
    }
    let answer: Answer = client
        .post_json("api/security/chatbot", &Question { query })
        .await?;
    Ok(answer.response)
}

/// Plain-language summary of what a category requires.
pub async fn explain_category(
    client: &ApiClient,
    category: ComplianceCategory,
) -> Result<String, ApiError> {
    #[derive(Deserialize)]
    struct Explanation {
        explanation: String,
    }
    let explanation: Explanation = client
        .get_json_where(
            "api/security/explain-compliance",
            &[("category", category.as_str())],
        )
        .await?;
    Ok(explanation.explanation)
}
