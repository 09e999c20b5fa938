//! Tests for caller-side action submission.

use std::sync::Arc;

use super::support::{actor, config, login, open_task};
use crate::task::{
    adapters::memory::InMemoryTaskActionService,
    domain::{
        ActionAvailabilitySet, Facet, LatchSlot, SharePerformer, StateCode, Task, TaskAction,
        TenantDomain,
    },
    ports::{ActionRequest, TaskActionError},
    services::{
        TaskActionDispatcher, TaskPresentationConfig, availability::evaluate_availability,
        deadline_request, performer_change_request,
    },
};
use chrono::NaiveDate;
use eyre::{Result, bail, ensure};
use rstest::rstest;
use serde_json::json;

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap_or_default()
}

fn offered(task: &Task, viewer: &str, config: &TaskPresentationConfig) -> ActionAvailabilitySet {
    evaluate_availability(task, &actor(viewer), config)
}

#[rstest]
fn deadline_request_commits_first_then_changes(open_task: Task, config: TaskPresentationConfig) {
    let committed = open_task.clone().with_deadline_confirmed("20240610");

    let first = deadline_request(&open_task, &offered(&open_task, "bob", &config), june(12));
    let later = deadline_request(&committed, &offered(&committed, "bob", &config), june(20));

    assert_eq!(first.action(), TaskAction::TakeToWork);
    assert_eq!(later.action(), TaskAction::SetDeadline);
    assert_eq!(
        later.params(),
        json!({"difficulty": "", "dEndFinish": "20240620", "expectedStatus": 0})
    );
    assert_eq!(later.code(), "DEADLINE_SET");
}

#[rstest]
fn performer_change_request_is_skipped_when_nothing_changed(open_task: Task) {
    let remote = SharePerformer::new(login("erin"), TenantDomain::new("remote.team"));

    assert_eq!(performer_change_request(&open_task, None, None), None);
    assert_eq!(
        performer_change_request(&open_task, Some(login("bob")), None),
        None
    );
    let to_remote = performer_change_request(&open_task, None, Some(remote));
    assert_eq!(
        to_remote.map(|request| request.params()),
        Some(json!({"performer": null, "sharePerformer": {"remote.team": ["erin"]}}))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submit_records_available_actions(
    open_task: Task,
    config: TaskPresentationConfig,
) -> Result<()> {
    let service = Arc::new(InMemoryTaskActionService::new());
    let dispatcher = TaskActionDispatcher::new(Arc::clone(&service));
    let availability = offered(&open_task, "bob", &config);

    let outcome = dispatcher
        .submit(&open_task, &availability, &ActionRequest::Complete)
        .await?;

    ensure!(outcome.success);
    let submitted = service.submitted_actions()?;
    ensure!(submitted.len() == 1);
    ensure!(submitted.first().map(|action| &action.request) == Some(&ActionRequest::Complete));
    ensure!(!dispatcher.is_pending(LatchSlot::Lifecycle(TaskAction::Complete)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submit_refuses_unavailable_actions(
    open_task: Task,
    config: TaskPresentationConfig,
) -> Result<()> {
    let service = Arc::new(InMemoryTaskActionService::new());
    let dispatcher = TaskActionDispatcher::new(Arc::clone(&service));
    let availability = offered(&open_task, "zoe", &config);

    let result = dispatcher
        .submit(&open_task, &availability, &ActionRequest::Cancel)
        .await;

    let Err(TaskActionError::ActionNotAvailable(action)) = result else {
        bail!("expected ActionNotAvailable, got {result:?}");
    };
    ensure!(action == TaskAction::Cancel);
    ensure!(service.submitted_actions()?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refused_submission_releases_the_latch_for_retry(
    open_task: Task,
    config: TaskPresentationConfig,
) -> Result<()> {
    let service = Arc::new(InMemoryTaskActionService::refusing("stale state"));
    let dispatcher = TaskActionDispatcher::new(Arc::clone(&service));
    let availability = offered(&open_task, "carol", &config);

    for _ in 0..2 {
        let result = dispatcher
            .submit(&open_task, &availability, &ActionRequest::Cancel)
            .await;
        let Err(TaskActionError::Rejected { action, reason }) = result else {
            bail!("expected Rejected, got {result:?}");
        };
        ensure!(action == TaskAction::Cancel);
        ensure!(reason == "stale state");
        ensure!(!dispatcher.is_pending(LatchSlot::Lifecycle(TaskAction::Cancel)));
    }
    ensure!(service.submitted_actions()?.len() == 2, "one attempt per call");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_desired_date_sends_a_complete_document(
    open_task: Task,
    config: TaskPresentationConfig,
) -> Result<()> {
    let service = Arc::new(InMemoryTaskActionService::new());
    let dispatcher = TaskActionDispatcher::new(Arc::clone(&service));
    let availability = offered(&open_task, "carol", &config);

    dispatcher
        .save_desired_date(&open_task, &availability, Some(june(1)))
        .await?;
    dispatcher
        .save_desired_date(&open_task, &availability, None)
        .await?;

    let documents = service.saved_documents()?;
    let requested: Vec<_> = documents
        .iter()
        .map(|document| document.deadline_requested.as_deref())
        .collect();
    ensure!(requested == [Some("20240601"), None]);
    for document in &documents {
        let value = serde_json::to_value(document)?;
        ensure!(value["attachments"].is_array());
        ensure!(value["sharePerformers"].is_array());
        ensure!(value["performers"] == json!(["bob"]));
    }
    ensure!(open_task.deadline_requested().is_none(), "snapshot is untouched");
    ensure!(!dispatcher.is_pending(LatchSlot::Facet(Facet::DesiredDate)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_the_author_may_save_the_desired_date(
    open_task: Task,
    config: TaskPresentationConfig,
) -> Result<()> {
    let service = Arc::new(InMemoryTaskActionService::new());
    let dispatcher = TaskActionDispatcher::new(Arc::clone(&service));
    let availability = offered(&open_task, "bob", &config);

    let result = dispatcher
        .save_desired_date(&open_task, &availability, Some(june(1)))
        .await;

    ensure!(matches!(
        result,
        Err(TaskActionError::ActionNotAvailable(TaskAction::RequestDesiredDate))
    ));
    ensure!(service.saved_documents()?.is_empty());
    Ok(())
}

#[rstest]
fn latch_slots_group_requests_by_facet() {
    let request = ActionRequest::ChangePerformer {
        performer: Some(login("alice")),
        share_performer: None,
    };
    let take = ActionRequest::TakeToWork {
        deadline: june(1),
        expected_state: StateCode::default(),
    };

    assert_eq!(request.latch_slot(), LatchSlot::Facet(Facet::Performer));
    assert_eq!(take.latch_slot(), LatchSlot::Facet(Facet::Deadline));
    assert_eq!(
        ActionRequest::Cancel.latch_slot(),
        LatchSlot::Lifecycle(TaskAction::Cancel)
    );
}
