//! Shared world state for task presentation BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use tasklens::task::{
    adapters::memory::{
        CatalogTranslator, InMemoryRoster, InMemoryTaskActionService, LastVisitRecency,
    },
    domain::{HistoryLog, Task, UserLogin},
    ports::{ActionOutcome, Gender, TaskActionResult},
    services::{
        TaskActionDispatcher, TaskPresentation, TaskPresentationError, TaskPresenter,
    },
};

/// Clock frozen in the middle of a chosen year.
#[derive(Debug, Clone, Copy)]
pub struct YearClock(DateTime<Utc>);

impl YearClock {
    /// Creates a clock reading 15 June of `year`.
    #[must_use]
    pub fn in_year(year: i32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, 6, 15, 12, 0, 0)
                .single()
                .unwrap_or_default(),
        )
    }
}

impl Clock for YearClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Presenter type used by the BDD world.
pub type WorldPresenter =
    TaskPresenter<InMemoryRoster, CatalogTranslator, LastVisitRecency, YearClock>;

/// Scenario world for task presentation behaviour tests.
pub struct PresentationWorld {
    pub roster: InMemoryRoster,
    pub task: Option<Task>,
    pub history: HistoryLog,
    pub service: Arc<InMemoryTaskActionService>,
    pub dispatcher: TaskActionDispatcher<InMemoryTaskActionService>,
    pub viewer: Option<UserLogin>,
    pub presentation: Option<Result<TaskPresentation, TaskPresentationError>>,
    pub submission: Option<TaskActionResult<ActionOutcome>>,
}

impl PresentationWorld {
    /// Creates a world with a small roster and an accepting endpoint.
    #[must_use]
    pub fn new() -> Self {
        let service = Arc::new(InMemoryTaskActionService::new());
        Self {
            roster: roster(),
            task: None,
            history: HistoryLog::new(),
            dispatcher: TaskActionDispatcher::new(Arc::clone(&service)),
            service,
            viewer: None,
            presentation: None,
            submission: None,
        }
    }

    /// Replaces the action endpoint.
    pub fn use_service(&mut self, service: InMemoryTaskActionService) {
        self.service = Arc::new(service);
        self.dispatcher = TaskActionDispatcher::new(Arc::clone(&self.service));
    }

    /// Builds a presenter for `viewer` evaluating in `year`.
    #[must_use]
    pub fn presenter(&self, viewer: UserLogin, year: i32) -> WorldPresenter {
        TaskPresenter::new(
            Arc::new(self.roster.clone()),
            Arc::new(CatalogTranslator::english()),
            Arc::new(LastVisitRecency::new(viewer, None)),
            Arc::new(YearClock::in_year(year)),
        )
    }

    /// Returns the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task was set up.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Returns the latest presentation.
    ///
    /// # Errors
    ///
    /// Returns an error when the task was not viewed or presentation failed.
    pub fn presentation(&self) -> Result<&TaskPresentation, eyre::Report> {
        self.presentation
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing presentation in scenario world"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("presentation failed: {err}"))
    }
}

impl Default for PresentationWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn roster() -> InMemoryRoster {
    let people = [
        ("alice", "Ivanova Alice Petrovna", Gender::Female),
        ("bob", "Petrov Bob Ivanovich", Gender::Male),
        ("carol", "Smirnova Carol", Gender::Female),
    ];
    people
        .into_iter()
        .filter_map(|(login, name, gender)| Some((UserLogin::new(login).ok()?, name, gender)))
        .fold(InMemoryRoster::new(), |roster, (login, name, gender)| {
            roster.with_user(login, name, gender)
        })
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PresentationWorld {
    PresentationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
