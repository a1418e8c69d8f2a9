use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resource::{coerce_number, Editable, EntityId, MissingField, Resource};
use crate::resources::Employee;

/// One department and its breach-risk posture. `employee_count` is derived
/// server-side and never written by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub dept_id: EntityId,
    pub dept_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub access_level: AccessTier,
    /// 0..=100, higher is worse.
    #[serde(default)]
    pub breach_risk_score: u32,
    #[serde(default)]
    pub employee_count: u32,
}

/// Department-wide access tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    Low,
    #[default]
    Standard,
    Medium,
    High,
}

impl AccessTier {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(AccessTier::Low),
            "standard" => Some(AccessTier::Standard),
            "medium" => Some(AccessTier::Medium),
            "high" => Some(AccessTier::High),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessTier::Low => "low",
            AccessTier::Standard => "standard",
            AccessTier::Medium => "medium",
            AccessTier::High => "high",
        }
    }
}

impl std::fmt::Display for AccessTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentDraft {
    pub dept_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub access_level: AccessTier,
    #[serde(default)]
    pub breach_risk_score: u32,
}

impl Resource for Department {
    const NAME: &'static str = "department";
    const COLLECTION: &'static str = "api/access/departments";

    fn id(&self) -> EntityId {
        self.dept_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.dept_name, &self.description]
    }
}

impl Editable for Department {
    type Draft = DepartmentDraft;

    fn draft_from(&self) -> DepartmentDraft {
        DepartmentDraft {
            dept_name: self.dept_name.clone(),
            description: self.description.clone(),
            access_level: self.access_level,
            breach_risk_score: self.breach_risk_score,
        }
    }

    fn set_field(draft: &mut DepartmentDraft, field: &str, value: &str) -> bool {
        match field {
            "dept_name" => draft.dept_name = value.to_string(),
            "description" => draft.description = value.to_string(),
            "access_level" => match AccessTier::parse(value) {
                Some(tier) => draft.access_level = tier,
                None => return false,
            },
            "breach_risk_score" => draft.breach_risk_score = coerce_number(value),
            _ => return false,
        }
        true
    }

    fn validate(draft: &DepartmentDraft) -> Result<(), MissingField> {
        if draft.dept_name.trim().is_empty() {
            return Err(MissingField("dept_name"));
        }
        Ok(())
    }
}

/// Current roster of one department, from its employee sub-collection.
pub async fn employees_of(
    client: &ApiClient,
    dept_id: EntityId,
) -> Result<Vec<Employee>, ApiError> {
    client
        .list_at(&format!("{}/{dept_id}/employees", Department::COLLECTION))
        .await
}
