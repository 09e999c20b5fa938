//! Backward scan of a history log for the latest relevant entry.

use crate::task::domain::{HistoryEntry, HistoryEntryKind};

/// Returns the most recent entry whose kind satisfies `selector`.
///
/// Entries are scanned from the end of the log; the first match wins and
/// every earlier entry is ignored. Unrecognised entries are skipped unless
/// the selector explicitly asks for them.
#[must_use]
pub fn latest_matching<F>(entries: &[HistoryEntry], selector: F) -> Option<&HistoryEntry>
where
    F: Fn(&HistoryEntryKind) -> bool,
{
    entries.iter().rev().find(|entry| selector(entry.kind()))
}
