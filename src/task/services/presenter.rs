//! Presentation service: derives the action set and every facet for one
//! (task, history, actor) snapshot.

use super::{
    DateFormatter, TaskPresentationConfig,
    availability::evaluate_availability,
    facets::{
        RenderContext, render_cancellation, render_deadline, render_desired_date,
        render_performer,
    },
};
use crate::task::{
    domain::{
        ActionAvailabilitySet, Actor, Facet, FacetPresentation, HistoryLog, Task, TaskDocument,
        TaskDomainError,
    },
    ports::{RecencyOracle, Roster, Translator},
};
use chrono::Locale;
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task presentation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskPresentationError {
    /// The task or actor cannot be evaluated.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Decoding or domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Result type for task presentation.
pub type TaskPresentationResult<T> = Result<T, TaskPresentationError>;

/// Fully resolved view of a task for one actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPresentation {
    /// Lifecycle actions and facet visibility.
    pub availability: ActionAvailabilitySet,
    /// Committed deadline facet.
    pub deadline: FacetPresentation,
    /// Author-desired date facet.
    pub desired_date: FacetPresentation,
    /// Performer facet.
    pub performer: FacetPresentation,
    /// Cancellation facet.
    pub cancellation: FacetPresentation,
}

impl TaskPresentation {
    /// Returns the presentation of `facet`.
    #[must_use]
    pub const fn facet(&self, facet: Facet) -> &FacetPresentation {
        match facet {
            Facet::Deadline => &self.deadline,
            Facet::DesiredDate => &self.desired_date,
            Facet::Performer => &self.performer,
            Facet::Cancellation => &self.cancellation,
        }
    }

    /// Returns the facets the actor should see, in display order.
    pub fn visible_facets(&self) -> impl Iterator<Item = (Facet, &FacetPresentation)> + '_ {
        [
            Facet::Deadline,
            Facet::DesiredDate,
            Facet::Performer,
            Facet::Cancellation,
        ]
        .into_iter()
        .filter(|facet| self.availability.visibility.is_visible(*facet))
        .map(|facet| (facet, self.facet(facet)))
    }
}

/// Stateless task presentation engine.
///
/// Every call is evaluated against its own snapshot; the service holds only
/// shared, read-only collaborators and may be used from several threads.
#[derive(Clone)]
pub struct TaskPresenter<R, T, N, C>
where
    R: Roster,
    T: Translator,
    N: RecencyOracle,
    C: Clock + Send + Sync,
{
    roster: Arc<R>,
    translator: Arc<T>,
    recency: Arc<N>,
    clock: Arc<C>,
    config: TaskPresentationConfig,
    date_locale: Locale,
}

impl<R, T, N, C> TaskPresenter<R, T, N, C>
where
    R: Roster,
    T: Translator,
    N: RecencyOracle,
    C: Clock + Send + Sync,
{
    /// Creates a presenter with the default configuration.
    #[must_use]
    pub fn new(roster: Arc<R>, translator: Arc<T>, recency: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            roster,
            translator,
            recency,
            clock,
            config: TaskPresentationConfig::default(),
            date_locale: Locale::en_US,
        }
    }

    /// Replaces the locale used for month names in rendered dates.
    #[must_use]
    pub const fn with_date_locale(mut self, locale: Locale) -> Self {
        self.date_locale = locale;
        self
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: TaskPresentationConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskPresentationConfig {
        &self.config
    }

    /// Evaluates the action set alone. History plays no part in it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPresentationError::InvalidInput`] when the task is
    /// structurally unusable.
    pub fn availability(
        &self,
        task: &Task,
        actor: &Actor,
    ) -> TaskPresentationResult<ActionAvailabilitySet> {
        self.validate(task)?;
        Ok(evaluate_availability(task, actor, &self.config))
    }

    /// Evaluates the action set and every facet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPresentationError::InvalidInput`] when the task is
    /// structurally unusable.
    pub fn present(
        &self,
        task: &Task,
        history: &HistoryLog,
        actor: &Actor,
    ) -> TaskPresentationResult<TaskPresentation> {
        let availability = self.availability(task, actor)?;
        let context = RenderContext {
            task,
            actor,
            config: &self.config,
            roster: &*self.roster,
            translator: &*self.translator,
            recency: &*self.recency,
            dates: DateFormatter::from_clock(&*self.clock).with_locale(self.date_locale),
        };
        let entries = history.entries();

        Ok(TaskPresentation {
            availability,
            deadline: render_deadline(&context, entries),
            desired_date: render_desired_date(&context),
            performer: render_performer(&context, entries),
            cancellation: render_cancellation(&context, entries),
        })
    }

    /// Decodes a task document and its history log, then presents them.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPresentationError::Domain`] when either payload cannot
    /// be decoded, or [`TaskPresentationError::InvalidInput`] when the
    /// decoded task is unusable.
    pub fn present_document(
        &self,
        document_json: &str,
        history_json: &str,
        actor: &Actor,
    ) -> TaskPresentationResult<TaskPresentation> {
        let task = Task::try_from(TaskDocument::from_json(document_json)?)?;
        let history = HistoryLog::from_json(history_json)?;
        self.present(&task, &history, actor)
    }

    fn validate(&self, task: &Task) -> TaskPresentationResult<()> {
        let shared_without_target = task
            .primary_performer()
            .is_some_and(|login| self.config.is_share_marker(login))
            && task.share_performers().is_empty();
        if shared_without_target {
            return Err(TaskPresentationError::InvalidInput(format!(
                "task {} is shared to another tenant but names no share performer",
                task.id()
            )));
        }
        Ok(())
    }
}
