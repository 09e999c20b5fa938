//! Recency port deciding whether a history entry is unseen by the viewer.

use crate::task::domain::{HistoryEntry, Task};

/// Caller-owned notion of "unseen since the last visit".
///
/// The engine treats the answer as opaque.
pub trait RecencyOracle: Send + Sync {
    /// Returns `true` when `entry` of `task` is new to the viewer.
    fn is_new(&self, entry: &HistoryEntry, task: &Task) -> bool;
}
