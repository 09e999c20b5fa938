//! Performer facet: who does the task and whether that recently changed.

use super::{EntryRule, RenderContext, run_entry_rules};
use crate::task::{
    domain::{FacetKind, FacetPresentation, HistoryEntry, HistoryEntryKind},
    ports::translator::keys,
    services::{availability::performer_is_active, scanner::latest_matching},
};

/// History rules, in precedence order.
pub const PERFORMER_ENTRY_RULES: &[EntryRule] = &[
    EntryRule {
        name: "assigned-after-suspension",
        matches: is_performer_change,
        render: render_first_assignment,
    },
    EntryRule {
        name: "performer-replaced",
        matches: is_performer_change,
        render: render_replacement,
    },
];

/// Renders the performer facet.
#[must_use]
pub fn render_performer(context: &RenderContext<'_>, history: &[HistoryEntry]) -> FacetPresentation {
    let mut presentation = latest_matching(history, is_performer_change)
        .and_then(|entry| run_entry_rules(PERFORMER_ENTRY_RULES, context, entry))
        .unwrap_or_else(|| current_performer(context));
    presentation.is_active = performer_is_active(context.task, context.actor, context.config);
    presentation
}

const fn is_performer_change(kind: &HistoryEntryKind) -> bool {
    matches!(kind, HistoryEntryKind::PerformerChanged { .. })
}

/// Display name of the performer recorded on the task snapshot.
fn current_performer_name(context: &RenderContext<'_>) -> Option<String> {
    let task = context.task;
    if let Some(login) = task
        .primary_performer()
        .filter(|login| !context.config.is_share_marker(login))
    {
        return Some(context.person(login, None).name);
    }

    let share = task.share_performers().first()?;
    let (name, domain) = context
        .roster
        .resolve_share_user(&share.login, &share.domain)
        .map_or_else(
            || (share.login.to_string(), share.domain.to_string()),
            |info| (info.display_name, info.domain_label),
        );
    Some(context.translate(keys::SHARE_PERFORMER, &[("name", name), ("domain", domain)]))
}

fn current_performer(context: &RenderContext<'_>) -> FacetPresentation {
    let name = current_performer_name(context);
    let kind = if name.is_some() {
        FacetKind::Set
    } else {
        FacetKind::Empty
    };
    let mut presentation = FacetPresentation::new(kind, context.label(keys::PERFORMER), false);
    presentation.content.text = name;
    presentation
}

fn render_first_assignment(
    context: &RenderContext<'_>,
    entry: &HistoryEntry,
) -> Option<FacetPresentation> {
    let HistoryEntryKind::PerformerChanged { previous, .. } = entry.kind() else {
        return None;
    };
    if !context.config.is_suspended_marker(&previous.login) {
        return None;
    }
    let mut presentation = current_performer(context);
    presentation.is_new_to_actor = context.is_new(entry);
    Some(presentation)
}

fn render_replacement(
    context: &RenderContext<'_>,
    entry: &HistoryEntry,
) -> Option<FacetPresentation> {
    let HistoryEntryKind::PerformerChanged { previous, current } = entry.kind() else {
        return None;
    };
    let previous_person = context.person(&previous.login, previous.domain.as_ref());
    let current_person = context.person(&current.login, current.domain.as_ref());

    let mut presentation = FacetPresentation::new(
        FacetKind::Changed,
        context.label(keys::PERFORMER_NEW),
        false,
    );
    presentation.content.text = Some(context.translate(
        keys::PERFORMER_REPLACED,
        &[
            ("name", current_person.name),
            ("previous", previous_person.short_name()),
        ],
    ));
    presentation.is_new_to_actor = context.is_new(entry);
    Some(presentation)
}
