pub mod access_level;
pub mod compliance;
pub mod department;
pub mod employee;
pub mod log;
pub mod threat;

pub use access_level::{AccessLevel, AccessLevelDraft};
pub use compliance::{
    ComplianceCategory, ComplianceDraft, ComplianceFilter, ComplianceRecord, ComplianceStatus,
};
pub use department::{AccessTier, Department, DepartmentDraft};
pub use employee::{DepartmentRef, Employee, EmployeeDraft};
pub use log::{AccessLogEntry, ActivityLogEntry, ErrorLogEntry};
pub use threat::{Severity, StatusFilter, Threat, ThreatDraft, ThreatStats, ThreatStatus};
