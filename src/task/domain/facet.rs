//! Rendered presentation of one aspect of task state.

use serde::{Deserialize, Serialize};

/// Independently rendered aspect of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    /// Performer-committed deadline and its history.
    Deadline,
    /// Author-desired date.
    DesiredDate,
    /// Current performer.
    Performer,
    /// Cancellation notice.
    Cancellation,
}

/// State a facet is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
    /// Nothing to show yet.
    Empty,
    /// A value is set.
    Set,
    /// A value replaced an earlier one.
    Changed,
    /// The task waits for a checker.
    AwaitingCheck,
    /// The performer reported completion.
    CompletionNotified,
    /// The task was accepted and closed.
    Closed,
    /// The task was returned for rework.
    Rejected,
    /// The performer was reminded of an overdue deadline.
    Reminded,
    /// An overdue deadline was escalated to a manager.
    Escalated,
    /// The task was cancelled.
    Cancelled,
}

/// Variable content of a facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetContent {
    /// Main date shown by the facet.
    pub primary_date: Option<String>,
    /// Superseded date, for changed values.
    pub secondary_date: Option<String>,
    /// Free text shown next to the date.
    pub additional_info: Option<String>,
    /// Main text for facets that are not date-centred.
    pub text: Option<String>,
}

/// Fully resolved presentation of one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetPresentation {
    /// Facet state.
    pub kind: FacetKind,
    /// Localised label.
    pub label: String,
    /// Whether the underlying history entry is unseen by the actor.
    pub is_new_to_actor: bool,
    /// Whether the actor may currently edit this facet.
    pub is_active: bool,
    /// Variable content.
    pub content: FacetContent,
}

impl FacetPresentation {
    /// Creates a presentation with no content that is not new to the actor.
    #[must_use]
    pub fn new(kind: FacetKind, label: impl Into<String>, is_active: bool) -> Self {
        Self {
            kind,
            label: label.into(),
            is_new_to_actor: false,
            is_active,
            content: FacetContent::default(),
        }
    }
}
