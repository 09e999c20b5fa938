//! Shared fixtures for task unit tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

use crate::task::{
    adapters::memory::{CatalogTranslator, InMemoryRoster, LastVisitRecency},
    domain::{
        Actor, HistoryEntry, HistoryEntryKind, Role, Task, TaskStatus, UserLogin,
    },
    ports::{Gender, RecencyOracle},
    services::{DateFormatter, TaskPresentationConfig, TaskPresenter, facets::RenderContext},
};

/// Clock frozen at noon on 15 June of a chosen year.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub(super) fn in_year(year: i32) -> Self {
        Self(at(year, 6, 15, 12))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Recency oracle that reports every entry as new.
pub(super) struct AlwaysNew;

impl RecencyOracle for AlwaysNew {
    fn is_new(&self, _entry: &HistoryEntry, _task: &Task) -> bool {
        true
    }
}

pub(super) const CURRENT_YEAR: i32 = 2024;

pub(super) fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

pub(super) fn login(value: &str) -> UserLogin {
    UserLogin::new(value).expect("test logins are non-empty")
}

pub(super) fn entry(kind: HistoryEntryKind, author: &str, created_at: DateTime<Utc>) -> HistoryEntry {
    HistoryEntry::new(kind, created_at, login(author))
}

pub(super) fn actor(value: &str) -> Actor {
    Actor::new(login(value))
}

pub(super) fn project_manager(value: &str) -> Actor {
    actor(value).with_roles([Role::new("PM")])
}

#[fixture]
pub(super) fn config() -> TaskPresentationConfig {
    TaskPresentationConfig::default()
}

#[fixture]
pub(super) fn roster() -> InMemoryRoster {
    InMemoryRoster::new()
        .with_user(login("alice"), "Ivanova Alice Petrovna", Gender::Female)
        .with_user(login("bob"), "Petrov Bob Ivanovich", Gender::Male)
        .with_user(login("carol"), "Smirnova Carol", Gender::Female)
        .with_user(login("dave"), "Kuznetsov Dave", Gender::Male)
}

#[fixture]
pub(super) fn translator() -> CatalogTranslator {
    CatalogTranslator::english()
}

/// Open task authored by `carol` and performed by `bob`.
#[fixture]
pub(super) fn open_task() -> Task {
    Task::new(login("carol"))
        .with_status(TaskStatus::Open)
        .with_performers([login("bob")])
}

pub(super) type TestPresenter =
    TaskPresenter<InMemoryRoster, CatalogTranslator, AlwaysNew, FixedClock>;

#[fixture]
pub(super) fn presenter(roster: InMemoryRoster, translator: CatalogTranslator) -> TestPresenter {
    TaskPresenter::new(
        Arc::new(roster),
        Arc::new(translator),
        Arc::new(AlwaysNew),
        Arc::new(FixedClock::in_year(CURRENT_YEAR)),
    )
}

/// Borrowed collaborators for rendering a single facet.
pub(super) struct Harness {
    pub(super) roster: InMemoryRoster,
    pub(super) translator: CatalogTranslator,
    pub(super) recency: LastVisitRecency,
    pub(super) config: TaskPresentationConfig,
}

impl Harness {
    pub(super) fn context<'a>(&'a self, task: &'a Task, viewer: &'a Actor) -> RenderContext<'a> {
        RenderContext {
            task,
            actor: viewer,
            config: &self.config,
            roster: &self.roster,
            translator: &self.translator,
            recency: &self.recency,
            dates: DateFormatter::for_year(CURRENT_YEAR),
        }
    }
}

/// Harness whose recency oracle treats entries after 1 June as unseen by
/// `carol`.
#[fixture]
pub(super) fn harness(
    roster: InMemoryRoster,
    translator: CatalogTranslator,
    config: TaskPresentationConfig,
) -> Harness {
    Harness {
        roster,
        translator,
        recency: LastVisitRecency::new(login("carol"), Some(at(CURRENT_YEAR, 6, 1, 0))),
        config,
    }
}
