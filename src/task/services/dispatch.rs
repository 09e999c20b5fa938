//! Caller-side action submission.
//!
//! The presentation engine is stateless; guarding against duplicate
//! submissions is the caller's job. [`TaskActionDispatcher`] owns that state
//! as a set of latched slots: one in-flight submission per facet, and one
//! per lifecycle action that has no facet. A slot is released whether the
//! submission succeeds or fails so the user can retry. Each call makes a
//! single attempt.

use crate::task::{
    domain::{
        ActionAvailabilitySet, LatchSlot, SharePerformer, Task, TaskAction, TaskDocument,
        UserLogin, date::compact_date,
    },
    ports::{ActionOutcome, ActionRequest, TaskActionError, TaskActionResult, TaskActionService},
};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Builds the deadline request matching the current snapshot: a first
/// commitment while take-to-work is offered, a change otherwise.
#[must_use]
pub fn deadline_request(
    task: &Task,
    availability: &ActionAvailabilitySet,
    deadline: NaiveDate,
) -> ActionRequest {
    let expected_state = task.state_code();
    if availability.take_to_work {
        ActionRequest::TakeToWork {
            deadline,
            expected_state,
        }
    } else {
        ActionRequest::SetDeadline {
            deadline,
            expected_state,
        }
    }
}

/// Builds a performer change request from the user's selection.
///
/// Returns `None` when neither selection differs from the task's current
/// performers, in which case nothing should be submitted.
#[must_use]
pub fn performer_change_request(
    task: &Task,
    performer: Option<UserLogin>,
    share_performer: Option<SharePerformer>,
) -> Option<ActionRequest> {
    let performer_changed = performer
        .as_ref()
        .is_some_and(|login| task.primary_performer() != Some(login));
    let share_changed = share_performer
        .as_ref()
        .is_some_and(|share| task.share_performers().first() != Some(share));
    if !performer_changed && !share_changed {
        return None;
    }
    Some(ActionRequest::ChangePerformer {
        performer,
        share_performer,
    })
}

#[derive(Debug, Default)]
struct SubmissionLatch {
    pending: Mutex<HashSet<LatchSlot>>,
}

impl SubmissionLatch {
    fn acquire(&self, slot: LatchSlot) -> TaskActionResult<LatchGuard<'_>> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if !pending.insert(slot) {
            return Err(TaskActionError::SubmissionPending(slot));
        }
        Ok(LatchGuard { latch: self, slot })
    }

    fn is_pending(&self, slot: LatchSlot) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&slot)
    }
}

struct LatchGuard<'a> {
    latch: &'a SubmissionLatch,
    slot: LatchSlot,
}

impl Drop for LatchGuard<'_> {
    fn drop(&mut self) {
        self.latch
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.slot);
    }
}

/// Submits lifecycle actions and desired-date edits on behalf of a user.
pub struct TaskActionDispatcher<S>
where
    S: TaskActionService,
{
    service: Arc<S>,
    latch: SubmissionLatch,
}

impl<S> TaskActionDispatcher<S>
where
    S: TaskActionService,
{
    /// Creates a dispatcher with no pending submissions.
    #[must_use]
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            latch: SubmissionLatch::default(),
        }
    }

    /// Returns whether a submission for `slot` is in flight.
    #[must_use]
    pub fn is_pending(&self, slot: LatchSlot) -> bool {
        self.latch.is_pending(slot)
    }

    /// Submits `request` for `task`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskActionError::ActionNotAvailable`] when `availability`
    /// does not offer the action, [`TaskActionError::SubmissionPending`] when
    /// the slot is already in flight, [`TaskActionError::Rejected`] when the
    /// endpoint refuses it, and [`TaskActionError::Transport`] when the
    /// endpoint cannot be reached.
    pub async fn submit(
        &self,
        task: &Task,
        availability: &ActionAvailabilitySet,
        request: &ActionRequest,
    ) -> TaskActionResult<ActionOutcome> {
        let action = request.action();
        if !availability.is_available(action) {
            return Err(TaskActionError::ActionNotAvailable(action));
        }
        let _guard = self.latch.acquire(request.latch_slot())?;

        tracing::info!(
            task_id = %task.id(),
            action = action.as_str(),
            code = request.code(),
            "submitting task action"
        );
        let result = self.service.submit_action(task, request).await;
        settle(action, task, result)
    }

    /// Saves a new author-desired date, or clears it when `date` is `None`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::submit`], for the
    /// desired-date action.
    pub async fn save_desired_date(
        &self,
        task: &Task,
        availability: &ActionAvailabilitySet,
        date: Option<NaiveDate>,
    ) -> TaskActionResult<ActionOutcome> {
        let action = TaskAction::RequestDesiredDate;
        if !availability.is_available(action) {
            return Err(TaskActionError::ActionNotAvailable(action));
        }
        let _guard = self.latch.acquire(action.latch_slot())?;

        let edited = task.with_replaced_deadline_requested(date.map(compact_date));
        let document = TaskDocument::from(&edited);
        tracing::info!(
            task_id = %task.id(),
            deadline_requested = ?document.deadline_requested,
            "saving desired date"
        );
        let result = self.service.save_document(&document).await;
        settle(action, task, result)
    }
}

fn settle(
    action: TaskAction,
    task: &Task,
    result: TaskActionResult<ActionOutcome>,
) -> TaskActionResult<ActionOutcome> {
    match result {
        Ok(outcome) if outcome.success => Ok(outcome),
        Ok(outcome) => {
            let reason = outcome.message.unwrap_or_default();
            tracing::warn!(
                task_id = %task.id(),
                action = action.as_str(),
                %reason,
                "task action rejected"
            );
            Err(TaskActionError::Rejected { action, reason })
        }
        Err(err) => {
            tracing::warn!(
                task_id = %task.id(),
                action = action.as_str(),
                error = %err,
                "task action submission failed"
            );
            Err(err)
        }
    }
}
