mod common;

use anyhow::Result;
use chrono::NaiveDate;

use aegis_console::manager::ResourceManager;
use aegis_console::resources::compliance::{
    self, ComplianceCategory, ComplianceFilter, ComplianceStatus,
};
use aegis_console::resources::ComplianceRecord;

fn seed(server: &common::StubServer) {
    server.state.seed(
        common::COMPLIANCE,
        vec![
            common::compliance_record(1, "Record of processing activities", "GDPR", "COMPLIANT"),
            common::compliance_record(2, "Right-to-erasure workflow", "GDPR", "IN_PROGRESS"),
            common::compliance_record(3, "PHI access audit", "HIPAA", "NEEDS_REVIEW"),
        ],
    );
}

fn owned(params: Vec<(&'static str, &'static str)>) -> Vec<(String, String)> {
    params
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn category_filtering_happens_on_the_server() -> Result<()> {
    let server = common::StubServer::start().await?;
    seed(&server);
    let client = server.api_client();

    let mut manager = ResourceManager::<ComplianceRecord>::new();
    let filter = ComplianceFilter {
        category: Some(ComplianceCategory::Gdpr),
        status: None,
    };
    manager.set_filter(owned(filter.query()));
    manager.load(&client).await?;

    assert_eq!(manager.items().len(), 2);
    assert!(manager
        .items()
        .iter()
        .all(|r| r.category == ComplianceCategory::Gdpr));

    // Narrow further by status; takes effect on the next load.
    let filter = ComplianceFilter {
        category: Some(ComplianceCategory::Gdpr),
        status: Some(ComplianceStatus::InProgress),
    };
    manager.set_filter(owned(filter.query()));
    manager.load(&client).await?;
    assert_eq!(manager.items().len(), 1);
    assert_eq!(manager.items()[0].title, "Right-to-erasure workflow");
    Ok(())
}

#[tokio::test]
async fn change_status_touches_nothing_else() -> Result<()> {
    let server = common::StubServer::start().await?;
    seed(&server);
    let client = server.api_client();

    let updated = compliance::change_status(&client, 3, ComplianceStatus::NonCompliant).await?;
    assert_eq!(updated.status, ComplianceStatus::NonCompliant);
    assert_eq!(updated.title, "PHI access audit");
    assert_eq!(updated.category, ComplianceCategory::Hipaa);

    let stored: ComplianceRecord = client.fetch(3).await?;
    assert_eq!(stored.status, ComplianceStatus::NonCompliant);
    assert_eq!(
        server
            .state
            .request_count("POST /api/security/compliance/3/change_status/"),
        1
    );
    Ok(())
}

#[tokio::test]
async fn a_due_date_can_be_set_and_cleared() -> Result<()> {
    let server = common::StubServer::start().await?;
    seed(&server);
    let client = server.api_client();

    let mut manager = ResourceManager::<ComplianceRecord>::new();
    manager.load(&client).await?;

    manager.begin_create();
    assert!(manager.set_field("title", "Key rotation evidence"));
    assert!(manager.set_field("category", "pci-dss"));
    assert!(manager.set_field("due_date", "2026-12-01"));
    manager.submit(&client).await?;

    let created_id = manager
        .items()
        .iter()
        .find(|r| r.title == "Key rotation evidence")
        .map(|r| r.id)
        .ok_or_else(|| anyhow::anyhow!("created record missing"))?;
    let created = manager.find(created_id).ok_or_else(|| anyhow::anyhow!("missing"))?;
    assert_eq!(created.category, ComplianceCategory::PciDss);
    assert_eq!(created.due_date, NaiveDate::from_ymd_opt(2026, 12, 1));

    // Clearing sends an explicit null, so the stored date goes away.
    manager.begin_edit(created_id)?;
    assert!(manager.set_field("due_date", ""));
    manager.submit(&client).await?;
    let cleared = manager.find(created_id).ok_or_else(|| anyhow::anyhow!("missing"))?;
    assert_eq!(cleared.due_date, None);
    Ok(())
}

#[tokio::test]
async fn the_assistant_answers_questions() -> Result<()> {
    let server = common::StubServer::start().await?;
    let client = server.api_client();

    let answer =
        compliance::ask_assistant(&client, "Which records are overdue?").await?;
    assert_eq!(answer, "stub answer: Which records are overdue?");
    Ok(())
}

#[tokio::test]
async fn categories_come_with_an_explanation() -> Result<()> {
    let server = common::StubServer::start().await?;
    let client = server.api_client();

    let explanation =
        compliance::explain_category(&client, ComplianceCategory::Gdpr).await?;
    assert_eq!(explanation, "GDPR requires periodic review.");
    Ok(())
}
