use serde::{Deserialize, Serialize};

use crate::resource::{Editable, EntityId, MissingField, Resource};

/// A named access level that departments and employees can be granted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLevel {
    pub access_id: EntityId,
    pub access_name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessLevelDraft {
    pub access_name: String,
    #[serde(default)]
    pub description: String,
}

impl Resource for AccessLevel {
    const NAME: &'static str = "access level";
    const COLLECTION: &'static str = "api/access/access-levels";

    fn id(&self) -> EntityId {
        self.access_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.access_name, &self.description]
    }
}

impl Editable for AccessLevel {
    type Draft = AccessLevelDraft;

    fn draft_from(&self) -> AccessLevelDraft {
        AccessLevelDraft {
            access_name: self.access_name.clone(),
            description: self.description.clone(),
        }
    }

    fn set_field(draft: &mut AccessLevelDraft, field: &str, value: &str) -> bool {
        match field {
            "access_name" => draft.access_name = value.to_string(),
            "description" => draft.description = value.to_string(),
            _ => return false,
        }
        true
    }

    fn validate(draft: &AccessLevelDraft) -> Result<(), MissingField> {
        if draft.access_name.trim().is_empty() {
            return Err(MissingField("access_name"));
        }
        if draft.description.trim().is_empty() {
            return Err(MissingField("description"));
        }
        Ok(())
    }
}
