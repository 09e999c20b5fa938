//! Coarse task status and fine-grained lifecycle state codes.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse task status.
///
/// Only "open" drives lifecycle rules; every other status is terminal as far
/// as the engine is concerned, and unfamiliar ones are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// The task is open and can move through its lifecycle.
    Open,
    /// The performer finished the work.
    Completed,
    /// The task has been accepted and closed.
    Closed,
    /// The task has been cancelled.
    Cancelled,
    /// Any other non-open status, lowercased.
    Other(String),
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Completed => "completed",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw,
        }
    }

    /// Returns `true` when the status is [`TaskStatus::Open`].
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Err(ParseTaskStatusError(value.to_owned())),
            "open" => Ok(Self::Open),
            "complete" | "completed" => Ok(Self::Completed),
            "close" | "closed" => Ok(Self::Closed),
            "cancel" | "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Ok(Self::Other(normalized)),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained numeric lifecycle code carried by a task.
///
/// Only a handful of values discriminate behaviour; every other value is
/// treated as an ordinary in-flight state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateCode(u16);

impl StateCode {
    /// Performer assignment is suspended.
    pub const SUSPENDED: Self = Self(10);
    /// The performer asked for a patch to be applied.
    pub const PATCH_REQUESTED: Self = Self(12);
    /// The task is under review.
    pub const UNDER_REVIEW: Self = Self(15);
    /// Closed.
    pub const CLOSED: Self = Self(20);
    /// Closed (alternate variant).
    pub const CLOSED_ALT: Self = Self(21);
    /// Cancelled; the only cancellation terminal state.
    pub const CANCELLED: Self = Self(35);

    /// Codes that freeze deadline and performer editing.
    const EDIT_FROZEN: [Self; 5] = [
        Self::SUSPENDED,
        Self::UNDER_REVIEW,
        Self::CLOSED,
        Self::CLOSED_ALT,
        Self::CANCELLED,
    ];

    /// Wraps a raw state code.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns `true` for the cancellation terminal state.
    #[must_use]
    pub const fn is_cancelled(self) -> bool {
        self.0 == Self::CANCELLED.0
    }

    /// Returns `true` when deadline and performer edits are frozen.
    #[must_use]
    pub fn freezes_edits(self) -> bool {
        Self::EDIT_FROZEN.contains(&self)
    }
}

impl Default for StateCode {
    fn default() -> Self {
        Self(0)
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
