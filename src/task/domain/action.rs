//! Lifecycle actions and their availability for one actor.

use super::Facet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle action an actor may trigger on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    /// Commit to a first deadline.
    TakeToWork,
    /// Change the committed deadline.
    SetDeadline,
    /// Set or change the author-desired date.
    RequestDesiredDate,
    /// Replace the performer.
    ChangePerformer,
    /// Notify the author of completion.
    Complete,
    /// Ask for a patch to be applied.
    RequestPatch,
    /// Apply a requested patch.
    ApplyPatch,
    /// Accept and close the task.
    Close,
    /// Return the task for rework.
    Reject,
    /// Hand the task to a checker.
    SendToCheck,
    /// Cancel the task.
    Cancel,
}

impl TaskAction {
    /// Every action, in display order.
    pub const ALL: [Self; 11] = [
        Self::TakeToWork,
        Self::SetDeadline,
        Self::RequestDesiredDate,
        Self::ChangePerformer,
        Self::Complete,
        Self::RequestPatch,
        Self::ApplyPatch,
        Self::Close,
        Self::Reject,
        Self::SendToCheck,
        Self::Cancel,
    ];

    /// Returns the canonical action name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TakeToWork => "take_to_work",
            Self::SetDeadline => "set_deadline",
            Self::RequestDesiredDate => "request_desired_date",
            Self::ChangePerformer => "change_performer",
            Self::Complete => "complete",
            Self::RequestPatch => "request_patch",
            Self::ApplyPatch => "apply_patch",
            Self::Close => "close",
            Self::Reject => "reject",
            Self::SendToCheck => "send_to_check",
            Self::Cancel => "cancel",
        }
    }

    /// Returns the facet whose edit latch guards this action.
    ///
    /// Actions without a facet of their own share the lifecycle button slot.
    #[must_use]
    pub const fn latch_slot(self) -> LatchSlot {
        match self {
            Self::TakeToWork | Self::SetDeadline => LatchSlot::Facet(Facet::Deadline),
            Self::RequestDesiredDate => LatchSlot::Facet(Facet::DesiredDate),
            Self::ChangePerformer => LatchSlot::Facet(Facet::Performer),
            Self::Complete
            | Self::RequestPatch
            | Self::ApplyPatch
            | Self::Close
            | Self::Reject
            | Self::SendToCheck
            | Self::Cancel => LatchSlot::Lifecycle(self),
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot guarded by a caller-side pending latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LatchSlot {
    /// Edit panel of a facet.
    Facet(Facet),
    /// Lifecycle button for a single action.
    Lifecycle(TaskAction),
}

impl fmt::Display for LatchSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Facet(facet) => write!(f, "facet:{facet:?}"),
            Self::Lifecycle(action) => write!(f, "action:{action}"),
        }
    }
}

/// Which facet panels are shown at all for the actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetVisibility {
    /// Deadline panel.
    pub deadline: bool,
    /// Desired-date panel.
    pub desired_date: bool,
    /// Performer panel.
    pub performer: bool,
    /// Cancellation notice.
    pub cancellation: bool,
}

impl FacetVisibility {
    /// Returns whether `facet` is shown.
    #[must_use]
    pub const fn is_visible(&self, facet: Facet) -> bool {
        match facet {
            Facet::Deadline => self.deadline,
            Facet::DesiredDate => self.desired_date,
            Facet::Performer => self.performer,
            Facet::Cancellation => self.cancellation,
        }
    }
}

/// One availability flag per lifecycle action.
///
/// Flags are evaluated independently; several may hold at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionAvailabilitySet {
    /// See [`TaskAction::TakeToWork`].
    pub take_to_work: bool,
    /// See [`TaskAction::SetDeadline`].
    pub set_deadline: bool,
    /// See [`TaskAction::RequestDesiredDate`].
    pub request_desired_date: bool,
    /// See [`TaskAction::ChangePerformer`].
    pub change_performer: bool,
    /// See [`TaskAction::Complete`].
    pub complete: bool,
    /// See [`TaskAction::RequestPatch`].
    pub request_patch: bool,
    /// See [`TaskAction::ApplyPatch`].
    pub apply_patch: bool,
    /// See [`TaskAction::Close`].
    pub close: bool,
    /// See [`TaskAction::Reject`].
    pub reject: bool,
    /// See [`TaskAction::SendToCheck`].
    pub send_to_check: bool,
    /// See [`TaskAction::Cancel`].
    pub cancel: bool,
    /// Facet panel visibility.
    pub visibility: FacetVisibility,
}

impl ActionAvailabilitySet {
    /// Returns whether `action` is available.
    #[must_use]
    pub const fn is_available(&self, action: TaskAction) -> bool {
        match action {
            TaskAction::TakeToWork => self.take_to_work,
            TaskAction::SetDeadline => self.set_deadline,
            TaskAction::RequestDesiredDate => self.request_desired_date,
            TaskAction::ChangePerformer => self.change_performer,
            TaskAction::Complete => self.complete,
            TaskAction::RequestPatch => self.request_patch,
            TaskAction::ApplyPatch => self.apply_patch,
            TaskAction::Close => self.close,
            TaskAction::Reject => self.reject,
            TaskAction::SendToCheck => self.send_to_check,
            TaskAction::Cancel => self.cancel,
        }
    }

    /// Returns the available actions in display order.
    pub fn available(&self) -> impl Iterator<Item = TaskAction> + '_ {
        TaskAction::ALL
            .into_iter()
            .filter(|action| self.is_available(*action))
    }
}
