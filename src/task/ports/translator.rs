//! Localisation port.

use std::collections::BTreeMap;

/// Named substitution variables passed to a translation.
pub type Substitutions = BTreeMap<String, String>;

/// Maps a translation key plus substitutions to localised text.
///
/// Translation is synchronous and total: implementations return a usable
/// string (at worst the key itself) for every key.
pub trait Translator: Send + Sync {
    /// Returns the localised text for `key`.
    fn translate(&self, key: &str, substitutions: &Substitutions) -> String;
}

/// Translation keys the presentation engine emits.
pub mod keys {
    /// Generic deadline label.
    pub const DEADLINE: &str = "task.deadline";
    /// Label for a changed deadline.
    pub const DEADLINE_CHANGED: &str = "task.deadline.changed";
    /// Label for an author-desired date.
    pub const DEADLINE_REQUESTED: &str = "task.deadline.requested";
    /// Label while a checker reviews the task.
    pub const AWAITING_CHECK: &str = "task.awaiting_check";
    /// Names the checker. Substitutions: `name`.
    pub const AWAITING_CHECK_AT: &str = "task.awaiting_check.at";
    /// Label after the performer reported completion.
    pub const COMPLETION_NOTIFIED: &str = "task.completion_notified";
    /// Label after acceptance. Substitutions: `name`, `gender`.
    pub const ACCEPTED: &str = "task.accepted";
    /// Time spent on the task. Substitutions: `duration`.
    pub const TIME_SPENT: &str = "task.time_spent";
    /// Label after the task was returned. Substitutions: `name`, `gender`.
    pub const REJECTED: &str = "task.rejected";
    /// Overdue marker.
    pub const OVERDUE: &str = "task.overdue";
    /// Overdue marker naming the notified manager. Substitutions: `name`.
    pub const OVERDUE_ESCALATED: &str = "task.overdue.escalated";
    /// Generic performer label.
    pub const PERFORMER: &str = "task.performer";
    /// Label after the performer was replaced.
    pub const PERFORMER_NEW: &str = "task.performer.new";
    /// Replacement text. Substitutions: `name`, `previous`.
    pub const PERFORMER_REPLACED: &str = "task.performer.replaced";
    /// Cross-tenant performer. Substitutions: `name`, `domain`.
    pub const SHARE_PERFORMER: &str = "task.performer.share";
    /// Cancellation label.
    pub const CANCELLATION: &str = "task.cancellation";
    /// Cancellation notice. Substitutions: `name`, `gender`, `date`.
    pub const CANCELLED: &str = "task.cancelled";
}
