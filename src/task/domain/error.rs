//! Error types for task domain validation and decoding.

use thiserror::Error;

/// Errors returned while constructing or decoding domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A user login is empty after trimming.
    #[error("user login must not be empty")]
    EmptyLogin,

    /// The coarse task status is not recognised.
    #[error("unknown task status: {0}")]
    InvalidStatus(String),

    /// A date field could not be interpreted.
    #[error("invalid date value: {0}")]
    InvalidDate(String),

    /// A history entry carries a tag that matches no known kind.
    #[error("unrecognised history entry tag: {tag}")]
    UnrecognizedHistoryEntry {
        /// Raw tag value.
        tag: String,
    },

    /// A history entry with a known tag carries a payload of the wrong shape.
    #[error("malformed payload for history entry '{tag}': {reason}")]
    MalformedHistoryPayload {
        /// Raw tag value.
        tag: String,
        /// Description of what was missing or mistyped.
        reason: String,
    },

    /// The task document or actor is structurally unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Error returned while parsing coarse task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

impl From<ParseTaskStatusError> for TaskDomainError {
    fn from(value: ParseTaskStatusError) -> Self {
        Self::InvalidStatus(value.0)
    }
}
