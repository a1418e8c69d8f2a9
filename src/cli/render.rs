//! Text renderer for CLI outputs.
//!
//! This module is pure formatting; handlers gather any extra data needed.

use crate::resources::{
    AccessLevel, AccessLogEntry, ActivityLogEntry, ComplianceRecord, Department, Employee,
    ErrorLogEntry, Threat, ThreatStats,
};
use crate::threat_path::{PathPanel, PathView, ThreatGraph};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn department_table(rows: &[&Department]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<22} {:<10} {:<6} {:<6} {}\n",
        "ID", "NAME", "TIER", "RISK", "STAFF", "DESCRIPTION"
    ));
    out.push_str(&format!("{}\n", "-".repeat(80)));
    for dept in rows {
        out.push_str(&format!(
            "{:<6} {:<22} {:<10} {:<6} {:<6} {}\n",
            dept.dept_id,
            dept.dept_name,
            dept.access_level,
            dept.breach_risk_score,
            dept.employee_count,
            dept.description
        ));
    }
    out
}

pub fn department_detail(dept: &Department, roster: &[Employee]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Department {}: {}\n", dept.dept_id, dept.dept_name));
    out.push_str(&format!("  Access tier: {}\n", dept.access_level));
    out.push_str(&format!("  Breach risk: {}/100\n", dept.breach_risk_score));
    if !dept.description.is_empty() {
        out.push_str(&format!("  Description: {}\n", dept.description));
    }
    out.push_str(&format!("  Employees: {}\n", roster.len()));
    for employee in roster {
        out.push_str(&format!(
            "    {:<6} {:<24} {}\n",
            employee.employee_id, employee.full_name, employee.role
        ));
    }
    out
}

pub fn employee_table(rows: &[&Employee]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<22} {:<28} {:<18} {:<16} {}\n",
        "ID", "NAME", "EMAIL", "ROLE", "DEPARTMENT", "RISK"
    ));
    out.push_str(&format!("{}\n", "-".repeat(100)));
    for employee in rows {
        let department = employee
            .department
            .as_ref()
            .map(|d| d.dept_name.as_str())
            .unwrap_or("-");
        let risk = employee
            .risk_score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<6} {:<22} {:<28} {:<18} {:<16} {}\n",
            employee.employee_id, employee.full_name, employee.email, employee.role, department, risk
        ));
    }
    out
}

pub fn employee_detail(employee: &Employee) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Employee {}: {}\n",
        employee.employee_id, employee.full_name
    ));
    out.push_str(&format!("  Email: {}\n", employee.email));
    out.push_str(&format!("  Role: {}\n", employee.role));
    if let Some(dept) = &employee.department {
        out.push_str(&format!(
            "  Department: {} (id {})\n",
            dept.dept_name, dept.dept_id
        ));
    }
    if let Some(score) = employee.risk_score {
        out.push_str(&format!("  Risk score: {}/100\n", score));
    }
    out
}

pub fn access_level_table(rows: &[&AccessLevel]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<6} {:<22} {}\n", "ID", "NAME", "DESCRIPTION"));
    out.push_str(&format!("{}\n", "-".repeat(60)));
    for level in rows {
        out.push_str(&format!(
            "{:<6} {:<22} {}\n",
            level.access_id, level.access_name, level.description
        ));
    }
    out
}

pub fn access_level_detail(level: &AccessLevel) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Access level {}: {}\n",
        level.access_id, level.access_name
    ));
    out.push_str(&format!("  Description: {}\n", level.description));
    out
}

pub fn threat_table(rows: &[&Threat]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<30} {:<10} {:<10} {}\n",
        "ID", "TITLE", "SEVERITY", "STATUS", "DETECTED"
    ));
    out.push_str(&format!("{}\n", "-".repeat(78)));
    for threat in rows {
        let detected = threat
            .detected_at
            .map(|at| at.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<6} {:<30} {:<10} {:<10} {}\n",
            threat.id, threat.title, threat.severity, threat.status, detected
        ));
    }
    out
}

pub fn threat_detail(threat: &Threat) -> String {
    let mut out = String::new();
    out.push_str(&format!("Threat {}: {}\n", threat.id, threat.title));
    out.push_str(&format!("  Severity: {}\n", threat.severity));
    out.push_str(&format!("  Status: {}\n", threat.status));
    if let Some(at) = threat.detected_at {
        out.push_str(&format!("  Detected: {}\n", at.format(DATE_FORMAT)));
    }
    if !threat.description.is_empty() {
        out.push_str(&format!("  Description: {}\n", threat.description));
    }
    out
}

pub fn threat_stats(stats: &ThreatStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total threats:  {}\n", stats.total));
    out.push_str(&format!("Active:         {}\n", stats.active));
    out.push_str(&format!("High severity:  {}\n", stats.high_severity));
    out
}

pub fn compliance_table(rows: &[&ComplianceRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<30} {:<10} {:<16} {}\n",
        "ID", "TITLE", "CATEGORY", "STATUS", "DUE"
    ));
    out.push_str(&format!("{}\n", "-".repeat(78)));
    for record in rows {
        let due = record
            .due_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<6} {:<30} {:<10} {:<16} {}\n",
            record.id,
            record.title,
            record.category,
            record.status.label(),
            due
        ));
    }
    out
}

pub fn compliance_detail(record: &ComplianceRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("Compliance {}: {}\n", record.id, record.title));
    out.push_str(&format!(
        "  Category: {} ({})\n",
        record.category,
        record.category.label()
    ));
    out.push_str(&format!("  Status: {}\n", record.status.label()));
    if let Some(date) = record.due_date {
        out.push_str(&format!("  Due: {}\n", date.format("%Y-%m-%d")));
    }
    if !record.description.is_empty() {
        out.push_str(&format!("  Description: {}\n", record.description));
    }
    if !record.requirements.is_empty() {
        out.push_str(&format!("  Requirements: {}\n", record.requirements));
    }
    if !record.notes.is_empty() {
        out.push_str(&format!("  Notes: {}\n", record.notes));
    }
    out
}

pub fn access_log_table(rows: &[&AccessLogEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<18} {:<16} {}\n",
        "ID", "USER", "IP", "WHEN"
    ));
    out.push_str(&format!("{}\n", "-".repeat(60)));
    for entry in rows {
        out.push_str(&format!(
            "{:<6} {:<18} {:<16} {}\n",
            entry.id,
            entry.username,
            entry.ip_address,
            entry.timestamp.format(DATE_FORMAT)
        ));
    }
    out
}

pub fn activity_log_table(rows: &[&ActivityLogEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<18} {:<30} {}\n",
        "ID", "USER", "ACTION", "WHEN"
    ));
    out.push_str(&format!("{}\n", "-".repeat(72)));
    for entry in rows {
        out.push_str(&format!(
            "{:<6} {:<18} {:<30} {}\n",
            entry.id,
            entry.username,
            entry.action,
            entry.timestamp.format(DATE_FORMAT)
        ));
    }
    out
}

pub fn error_log_table(rows: &[&ErrorLogEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<6} {:<50} {}\n", "ID", "MESSAGE", "WHEN"));
    out.push_str(&format!("{}\n", "-".repeat(78)));
    for entry in rows {
        out.push_str(&format!(
            "{:<6} {:<50} {}\n",
            entry.id,
            entry.message,
            entry.timestamp.format(DATE_FORMAT)
        ));
    }
    out
}

pub fn path_list(view: &PathView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<1} {:<10} {:<30} {:<18} {}\n",
        "", "ID", "NAME", "SEVERITY", "BAND"
    ));
    out.push_str(&format!("{}\n", "-".repeat(70)));
    for path in &view.data().paths {
        let marker = if view.selected_id() == Some(path.id.as_str()) {
            "*"
        } else {
            " "
        };
        out.push_str(&format!(
            "{:<1} {:<10} {:<30} Severity: {}/10    {}\n",
            marker,
            path.id,
            path.name,
            path.severity,
            path.severity_band().as_str()
        ));
    }
    out
}

pub fn path_panel(panel: &PathPanel<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", panel.name));
    if !panel.description.is_empty() {
        out.push_str(&format!("{}\n", panel.description));
    }
    out.push_str(&format!("Severity: {}/10\n", panel.severity));
    out.push_str(&format!(
        "Entry point: {}\n",
        panel.entry_point.unwrap_or("unknown")
    ));
    if !panel.critical_resources.is_empty() {
        out.push_str("Critical resources:\n");
        for resource in panel.critical_resources {
            out.push_str(&format!("  - {}\n", resource));
        }
    }
    if !panel.risk_factors.is_empty() {
        out.push_str("Risk factors:\n");
        for factor in panel.risk_factors {
            out.push_str(&format!("  - {}\n", factor));
        }
    }
    if !panel.recommendation.is_empty() {
        out.push_str(&format!("Recommendation: {}\n", panel.recommendation));
    }
    out
}

pub fn graph_summary(graph: &ThreatGraph<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} nodes, {} edges\n",
        graph.node_count(),
        graph.edge_count()
    ));
    let entries = graph.entry_points();
    if !entries.is_empty() {
        out.push_str("Entry points:\n");
        for node in entries {
            out.push_str(&format!("  - {} ({})\n", node.label, node.id));
        }
    }
    out
}
