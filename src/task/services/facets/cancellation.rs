//! Cancellation facet: who cancelled the task and when.

use super::{EntryRule, RenderContext, run_entry_rules};
use crate::task::{
    domain::{FacetKind, FacetPresentation, HistoryEntry, HistoryEntryKind, StatusChange},
    ports::translator::keys,
    services::{availability::cancellation_is_active, scanner::latest_matching},
};

/// The single history rule of the cancellation facet.
pub const CANCELLATION_RULE: EntryRule = EntryRule {
    name: "cancelled",
    matches: is_cancellation,
    render: render_cancelled,
};

/// Renders the cancellation facet.
#[must_use]
pub fn render_cancellation(
    context: &RenderContext<'_>,
    history: &[HistoryEntry],
) -> FacetPresentation {
    let mut presentation = latest_matching(history, is_cancellation)
        .and_then(|entry| run_entry_rules(&[CANCELLATION_RULE], context, entry))
        .unwrap_or_else(|| {
            FacetPresentation::new(FacetKind::Empty, context.label(keys::CANCELLATION), false)
        });
    presentation.is_active = cancellation_is_active(context.task);
    presentation
}

const fn is_cancellation(kind: &HistoryEntryKind) -> bool {
    matches!(kind, HistoryEntryKind::StatusChange(StatusChange::Cancelled))
}

fn render_cancelled(context: &RenderContext<'_>, entry: &HistoryEntry) -> Option<FacetPresentation> {
    let person = context.person(entry.author_login()?, entry.domain());
    let date = context
        .dates
        .format_cancellation_timestamp(entry.created_at());

    let mut presentation = FacetPresentation::new(
        FacetKind::Cancelled,
        context.label(keys::CANCELLATION),
        false,
    );
    presentation.content.primary_date = Some(date.clone());
    presentation.content.text = Some(context.translate(
        keys::CANCELLED,
        &[
            ("name", person.short_name()),
            ("gender", person.gender.as_str().to_owned()),
            ("date", date),
        ],
    ));
    presentation.is_new_to_actor = context.is_new(entry);
    Some(presentation)
}
