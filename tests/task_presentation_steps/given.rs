//! Given steps for task presentation BDD scenarios.

use super::world::PresentationWorld;
use chrono::{DateTime, TimeZone, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklens::task::{
    adapters::memory::InMemoryTaskActionService,
    domain::{
        HistoryEntry, HistoryEntryKind, PerformerIdentity, StateCode, StatusChange, Task,
        TaskStatus, UserLogin,
    },
};

fn login(value: &str) -> Result<UserLogin, eyre::Report> {
    UserLogin::new(value).wrap_err_with(|| format!("invalid login {value:?}"))
}

#[given(r#"an open task authored by "{author}" and performed by "{performer}""#)]
fn open_task(
    world: &mut PresentationWorld,
    author: String,
    performer: String,
) -> Result<(), eyre::Report> {
    world.task = Some(
        Task::new(login(&author)?)
            .with_status(TaskStatus::Open)
            .with_performers([login(&performer)?]),
    );
    Ok(())
}

#[given(r#"the author requested the date "{date}""#)]
fn author_requested_date(world: &mut PresentationWorld, date: String) -> Result<(), eyre::Report> {
    let task = world.task()?.clone().with_deadline_requested(date);
    world.task = Some(task);
    Ok(())
}

#[given(r#"the performer was changed from "{previous}" to "{current}""#)]
fn performer_was_changed(
    world: &mut PresentationWorld,
    previous: String,
    current: String,
) -> Result<(), eyre::Report> {
    let author = world.task()?.author_login().clone();
    let changed_at = Utc
        .with_ymd_and_hms(2024, 6, 3, 9, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid change timestamp"))?;
    let entry = HistoryEntry::new(
        HistoryEntryKind::PerformerChanged {
            previous: PerformerIdentity::local(login(&previous)?),
            current: PerformerIdentity::local(login(&current)?),
        },
        changed_at,
        author,
    );
    world.history = std::mem::take(&mut world.history).appended(entry);
    Ok(())
}

#[given(r#"the task was cancelled by "{author}" on "{timestamp}""#)]
fn task_was_cancelled(
    world: &mut PresentationWorld,
    author: String,
    timestamp: String,
) -> Result<(), eyre::Report> {
    let cancelled_at = DateTime::parse_from_rfc3339(&timestamp)
        .wrap_err("parse cancellation timestamp")?
        .with_timezone(&Utc);
    let task = world
        .task()?
        .clone()
        .with_state_code(StateCode::CANCELLED);
    let entry = HistoryEntry::new(
        HistoryEntryKind::StatusChange(StatusChange::Cancelled),
        cancelled_at,
        login(&author)?,
    );
    world.task = Some(task);
    world.history = std::mem::take(&mut world.history).appended(entry);
    Ok(())
}

#[given(r#"the action endpoint refuses submissions with "{reason}""#)]
fn endpoint_refuses(world: &mut PresentationWorld, reason: String) {
    world.use_service(InMemoryTaskActionService::refusing(reason));
}
