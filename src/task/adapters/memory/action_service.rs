//! Recording action endpoint.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskDocument, TaskId},
    ports::{ActionOutcome, ActionRequest, TaskActionError, TaskActionResult, TaskActionService},
};

/// Action submission captured by [`InMemoryTaskActionService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedAction {
    /// Task the action targeted.
    pub task_id: TaskId,
    /// Submitted request.
    pub request: ActionRequest,
}

#[derive(Debug, Default)]
struct RecordedState {
    actions: Vec<SubmittedAction>,
    documents: Vec<TaskDocument>,
    refusal: Option<String>,
}

/// Thread-safe action endpoint that records every call.
///
/// By default every submission succeeds; [`Self::refusing`] makes the
/// endpoint report `success = false` with the given reason.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskActionService {
    state: Arc<RwLock<RecordedState>>,
}

impl InMemoryTaskActionService {
    /// Creates an endpoint that accepts every submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an endpoint that refuses every submission with `reason`.
    #[must_use]
    pub fn refusing(reason: impl Into<String>) -> Self {
        let state = RecordedState {
            refusal: Some(reason.into()),
            ..RecordedState::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the recorded action submissions in call order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskActionError::Transport`] when the recording lock is
    /// poisoned.
    pub fn submitted_actions(&self) -> TaskActionResult<Vec<SubmittedAction>> {
        let state = self.state.read().map_err(|err| {
            TaskActionError::transport(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.actions.clone())
    }

    /// Returns the recorded document saves in call order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskActionError::Transport`] when the recording lock is
    /// poisoned.
    pub fn saved_documents(&self) -> TaskActionResult<Vec<TaskDocument>> {
        let state = self.state.read().map_err(|err| {
            TaskActionError::transport(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.documents.clone())
    }

    fn outcome(refusal: Option<&String>) -> ActionOutcome {
        refusal.map_or_else(ActionOutcome::succeeded, ActionOutcome::failed)
    }
}

#[async_trait]
impl TaskActionService for InMemoryTaskActionService {
    async fn submit_action(
        &self,
        task: &Task,
        request: &ActionRequest,
    ) -> TaskActionResult<ActionOutcome> {
        let mut state = self.state.write().map_err(|err| {
            TaskActionError::transport(std::io::Error::other(err.to_string()))
        })?;
        state.actions.push(SubmittedAction {
            task_id: task.id(),
            request: request.clone(),
        });
        Ok(Self::outcome(state.refusal.as_ref()))
    }

    async fn save_document(&self, document: &TaskDocument) -> TaskActionResult<ActionOutcome> {
        let mut state = self.state.write().map_err(|err| {
            TaskActionError::transport(std::io::Error::other(err.to_string()))
        })?;
        state.documents.push(document.clone());
        Ok(Self::outcome(state.refusal.as_ref()))
    }
}
