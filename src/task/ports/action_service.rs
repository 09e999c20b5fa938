//! Action endpoint port: submits lifecycle actions and document saves.
//!
//! Effects are applied remotely and arrive back as document updates; the
//! caller only observes success or failure of the submission itself.

use crate::task::domain::{
    LatchSlot, SharePerformer, StateCode, Task, TaskAction, TaskDocument, UserLogin,
    date::compact_date,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use thiserror::Error;

/// Result type for action submissions.
pub type TaskActionResult<T> = Result<T, TaskActionError>;

/// Lifecycle action request with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    /// Commit to a first deadline.
    TakeToWork {
        /// Committed deadline.
        deadline: NaiveDate,
        /// State code the caller observed; the server rejects stale requests.
        expected_state: StateCode,
    },
    /// Change the committed deadline.
    SetDeadline {
        /// New deadline.
        deadline: NaiveDate,
        /// State code the caller observed.
        expected_state: StateCode,
    },
    /// Replace the performer.
    ChangePerformer {
        /// New same-tenant performer.
        performer: Option<UserLogin>,
        /// New cross-tenant performer.
        share_performer: Option<SharePerformer>,
    },
    /// Notify the author of completion.
    Complete,
    /// Ask for a patch to be applied.
    RequestPatch {
        /// Programmer section the request is routed to.
        programmer_section: String,
    },
    /// Apply a requested patch.
    ApplyPatch {
        /// Programmer section applying the patch.
        programmer_section: String,
    },
    /// Accept and close the task.
    Close,
    /// Return the task for rework.
    Reject {
        /// Explanation for the performer.
        comment: Option<String>,
    },
    /// Hand the task to a checker.
    SendToCheck {
        /// Note for the checker.
        comment: Option<String>,
    },
    /// Cancel the task.
    Cancel,
}

impl ActionRequest {
    /// Returns the lifecycle action this request performs.
    #[must_use]
    pub const fn action(&self) -> TaskAction {
        match self {
            Self::TakeToWork { .. } => TaskAction::TakeToWork,
            Self::SetDeadline { .. } => TaskAction::SetDeadline,
            Self::ChangePerformer { .. } => TaskAction::ChangePerformer,
            Self::Complete => TaskAction::Complete,
            Self::RequestPatch { .. } => TaskAction::RequestPatch,
            Self::ApplyPatch { .. } => TaskAction::ApplyPatch,
            Self::Close => TaskAction::Close,
            Self::Reject { .. } => TaskAction::Reject,
            Self::SendToCheck { .. } => TaskAction::SendToCheck,
            Self::Cancel => TaskAction::Cancel,
        }
    }

    /// Returns the latch slot guarding this request.
    #[must_use]
    pub const fn latch_slot(&self) -> LatchSlot {
        self.action().latch_slot()
    }

    /// Returns the endpoint action code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TakeToWork { .. } | Self::SetDeadline { .. } => "DEADLINE_SET",
            Self::ChangePerformer { .. } => "PERFORMER_CHANGE",
            Self::Complete => "COMPLETE",
            Self::RequestPatch { .. } => "APPLY",
            Self::ApplyPatch { .. } => "APPLY_COMPLETE",
            Self::Close => "CLOSE",
            Self::Reject { .. } => "REJECT",
            Self::SendToCheck { .. } => "CHECK",
            Self::Cancel => "CANCEL",
        }
    }

    /// Returns the endpoint parameter payload.
    #[must_use]
    pub fn params(&self) -> Value {
        match self {
            Self::TakeToWork {
                deadline,
                expected_state,
            }
            | Self::SetDeadline {
                deadline,
                expected_state,
            } => json!({
                "difficulty": "",
                "dEndFinish": compact_date(*deadline),
                "expectedStatus": expected_state.value(),
            }),
            Self::ChangePerformer {
                performer,
                share_performer,
            } => {
                let share = share_performer.as_ref().map(|share| {
                    let mut by_domain = Map::new();
                    by_domain.insert(
                        share.domain.to_string(),
                        json!([share.login.as_str()]),
                    );
                    Value::Object(by_domain)
                });
                json!({
                    "performer": performer.as_ref().map(UserLogin::as_str),
                    "sharePerformer": share,
                })
            }
            Self::RequestPatch { programmer_section }
            | Self::ApplyPatch { programmer_section } => {
                json!({ "programmerSection": programmer_section })
            }
            Self::Reject { comment } | Self::SendToCheck { comment } => {
                json!({ "comment": comment })
            }
            Self::Complete | Self::Close | Self::Cancel => json!({}),
        }
    }
}

/// Result reported by the action endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Whether the endpoint accepted the submission.
    pub success: bool,
    /// Optional message from the endpoint.
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionOutcome {
    /// Creates a successful outcome.
    #[must_use]
    pub const fn succeeded() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Creates a failed outcome with a reason.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(reason.into()),
        }
    }
}

/// Action endpoint contract.
#[async_trait]
pub trait TaskActionService: Send + Sync {
    /// Submits a lifecycle action for `task`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskActionError::Transport`] when the endpoint cannot be
    /// reached. A reachable endpoint that refuses the action reports
    /// `success = false` in the outcome instead.
    async fn submit_action(
        &self,
        task: &Task,
        request: &ActionRequest,
    ) -> TaskActionResult<ActionOutcome>;

    /// Saves an edited task document.
    ///
    /// # Errors
    ///
    /// Returns [`TaskActionError::Transport`] when the endpoint cannot be
    /// reached.
    async fn save_document(&self, document: &TaskDocument) -> TaskActionResult<ActionOutcome>;
}

/// Errors returned while submitting task actions.
#[derive(Debug, Clone, Error)]
pub enum TaskActionError {
    /// The action is not available to the actor for the current snapshot.
    #[error("action not available: {0}")]
    ActionNotAvailable(TaskAction),

    /// Another submission for the same slot is still in flight.
    #[error("submission already pending for {0}")]
    SubmissionPending(LatchSlot),

    /// The endpoint refused the submission.
    #[error("action {action} rejected: {reason}")]
    Rejected {
        /// Refused action.
        action: TaskAction,
        /// Reason reported by the endpoint.
        reason: String,
    },

    /// The endpoint could not be reached.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskActionError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
