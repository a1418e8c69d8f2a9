//! Read-only log feeds. These implement [`Resource`] for listing and
//! search but not [`Editable`]: log rows are produced by the backend's
//! own middleware and are never written from the console.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{EntityId, Resource};

/// Successful and failed sign-ins, by source address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLogEntry {
    pub id: EntityId,
    pub username: String,
    pub ip_address: String,
    pub timestamp: DateTime<Utc>,
}

/// What an authenticated user did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: EntityId,
    pub username: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

/// Server-side failures, with the captured trace when one was recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorLogEntry {
    pub id: EntityId,
    pub message: String,
    #[serde(default)]
    pub stack_trace: String,
    pub timestamp: DateTime<Utc>,
}

impl Resource for AccessLogEntry {
    const NAME: &'static str = "access log entry";
    const COLLECTION: &'static str = "api/logs/access";

    fn id(&self) -> EntityId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.username, &self.ip_address]
    }
}

impl Resource for ActivityLogEntry {
    const NAME: &'static str = "activity log entry";
    const COLLECTION: &'static str = "api/logs/activity";

    fn id(&self) -> EntityId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.username, &self.action]
    }
}

impl Resource for ErrorLogEntry {
    const NAME: &'static str = "error log entry";
    const COLLECTION: &'static str = "api/logs/error";

    fn id(&self) -> EntityId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.message]
    }
}
