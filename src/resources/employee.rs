use serde::{Deserialize, Serialize};

use crate::resource::{coerce_number, Editable, EntityId, MissingField, Resource};

/// An employee record. Reads carry the department as a nested reference;
/// writes address it by identifier under the same `department` key, which
/// is how the backend's serializer is wired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: EntityId,
    pub full_name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
    /// Computed server-side from activity logs; display only.
    #[serde(default)]
    pub risk_score: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentRef {
    pub dept_id: EntityId,
    pub dept_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub full_name: String,
    pub email: String,
    pub role: String,
    /// Department identifier; 0 means not chosen yet.
    #[serde(default)]
    pub department: EntityId,
}

impl Resource for Employee {
    const NAME: &'static str = "employee";
    const COLLECTION: &'static str = "api/access/employees";

    fn id(&self) -> EntityId {
        self.employee_id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.full_name.as_str(), self.email.as_str()];
        if let Some(dept) = &self.department {
            fields.push(dept.dept_name.as_str());
        }
        fields
    }
}

impl Editable for Employee {
    type Draft = EmployeeDraft;

    fn draft_from(&self) -> EmployeeDraft {
        EmployeeDraft {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            department: self.department.as_ref().map(|d| d.dept_id).unwrap_or(0),
        }
    }

    fn set_field(draft: &mut EmployeeDraft, field: &str, value: &str) -> bool {
        match field {
            "full_name" => draft.full_name = value.to_string(),
            "email" => draft.email = value.to_string(),
            "role" => draft.role = value.to_string(),
            "department" => draft.department = coerce_number(value),
            _ => return false,
        }
        true
    }

    fn validate(draft: &EmployeeDraft) -> Result<(), MissingField> {
        if draft.full_name.trim().is_empty() {
            return Err(MissingField("full_name"));
        }
        if draft.email.trim().is_empty() {
            return Err(MissingField("email"));
        }
        if draft.role.trim().is_empty() {
            return Err(MissingField("role"));
        }
        if draft.department == 0 {
            return Err(MissingField("department"));
        }
        Ok(())
    }
}
