//! Tests for the task document wire format and task snapshot rules.

use super::support::login;
use crate::task::domain::{
    SharePerformer, StateCode, Task, TaskDocument, TaskDomainError, TaskStatus, TenantDomain,
};
use eyre::{Result, ensure};
use rstest::rstest;

const DOCUMENT: &str = r#"{
    "id": "5f0c2b52-9a4e-4d8e-9d0e-7c5b1f4a2b10",
    "status": "open",
    "stateCode": 12,
    "performers": ["bob"],
    "authorLogin": "carol",
    "checkers": ["dave"],
    "deadlineRequested": "20240601",
    "deadlineConfirmed": "  ",
    "workStartedAt": "2024-05-01T09:00:00Z",
    "completionNotified": true,
    "shareFrom": "Partner.Org"
}"#;

#[rstest]
fn document_decodes_into_task() -> Result<()> {
    let task = Task::try_from(TaskDocument::from_json(DOCUMENT)?)?;

    ensure!(task.status() == &TaskStatus::Open);
    ensure!(task.state_code() == StateCode::PATCH_REQUESTED);
    ensure!(task.primary_performer() == Some(&login("bob")));
    ensure!(task.checkers() == [login("dave")]);
    ensure!(task.deadline_requested() == Some("20240601"));
    ensure!(task.deadline_confirmed().is_none(), "blank dates are absent");
    ensure!(task.work_started_at().is_some());
    ensure!(task.completion_notified());
    ensure!(task.share_from() == Some(&TenantDomain::new("partner.org")));
    Ok(())
}

#[rstest]
#[case::completed("completed", TaskStatus::Completed)]
#[case::closed("Close", TaskStatus::Closed)]
#[case::done("done", TaskStatus::Other("done".to_owned()))]
#[case::check("CHECK", TaskStatus::Other("check".to_owned()))]
fn every_non_open_status_decodes_as_terminal(
    #[case] status: &str,
    #[case] expected: TaskStatus,
) -> Result<()> {
    let json = format!(
        r#"{{"id": "5f0c2b52-9a4e-4d8e-9d0e-7c5b1f4a2b10", "status": "{status}", "authorLogin": "carol"}}"#
    );

    let task = Task::try_from(TaskDocument::from_json(&json)?)?;

    ensure!(task.status() == &expected, "decoded {:?}", task.status());
    ensure!(!task.status().is_open());
    ensure!(TaskDocument::from(&task).status == expected.as_str());
    Ok(())
}

#[rstest]
#[case(r#"{"id": "5f0c2b52-9a4e-4d8e-9d0e-7c5b1f4a2b10", "status": " ", "authorLogin": "carol"}"#)]
#[case(r#"{"id": "5f0c2b52-9a4e-4d8e-9d0e-7c5b1f4a2b10", "status": "open", "authorLogin": " "}"#)]
#[case(r#"{"id": "5f0c2b52-9a4e-4d8e-9d0e-7c5b1f4a2b10", "status": "open", "authorLogin": "carol", "completedAt": "later"}"#)]
fn malformed_documents_are_rejected(#[case] json: &str) -> Result<()> {
    let document = TaskDocument::from_json(json)?;

    ensure!(Task::try_from(document).is_err());
    Ok(())
}

#[rstest]
fn non_json_document_is_invalid_input() {
    assert!(matches!(
        TaskDocument::from_json("not json"),
        Err(TaskDomainError::InvalidInput(_))
    ));
}

#[rstest]
fn document_from_task_always_carries_dependent_collections() -> Result<()> {
    let task = Task::new(login("carol"));

    let document = TaskDocument::from(&task);
    let value: serde_json::Value = serde_json::from_str(&document.to_json()?)?;

    ensure!(value["attachments"] == serde_json::json!([]));
    ensure!(value["sharePerformers"] == serde_json::json!([]));
    ensure!(value["performers"] == serde_json::json!([]));
    Ok(())
}

#[rstest]
fn replacing_the_desired_date_leaves_the_original_untouched() {
    let original = Task::new(login("carol"))
        .with_deadline_requested("20240601")
        .with_share_performers([SharePerformer::new(
            login("erin"),
            TenantDomain::new("remote.team"),
        )]);

    let edited = original.with_replaced_deadline_requested(Some("20240715".to_owned()));
    let cleared = original.with_replaced_deadline_requested(None);

    assert_eq!(original.deadline_requested(), Some("20240601"));
    assert_eq!(edited.deadline_requested(), Some("20240715"));
    assert_eq!(cleared.deadline_requested(), None);
    assert_eq!(edited.share_performers(), original.share_performers());
}
