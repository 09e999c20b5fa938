//! Recency oracle keyed on the viewer's last visit.

use chrono::{DateTime, Utc};

use crate::task::{
    domain::{HistoryEntry, Task, UserLogin},
    ports::RecencyOracle,
};

/// Marks entries written by someone else after the viewer's last visit.
///
/// A viewer who never opened the task sees every foreign entry as new.
/// System entries count as foreign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastVisitRecency {
    viewer: UserLogin,
    last_visit: Option<DateTime<Utc>>,
}

impl LastVisitRecency {
    /// Creates an oracle for `viewer`.
    #[must_use]
    pub const fn new(viewer: UserLogin, last_visit: Option<DateTime<Utc>>) -> Self {
        Self { viewer, last_visit }
    }
}

impl RecencyOracle for LastVisitRecency {
    fn is_new(&self, entry: &HistoryEntry, _task: &Task) -> bool {
        if entry.author_login() == Some(&self.viewer) {
            return false;
        }
        self.last_visit
            .is_none_or(|visited| entry.created_at() > visited)
    }
}
