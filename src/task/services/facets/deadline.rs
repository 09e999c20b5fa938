//! Deadline facet: the performer-committed date and what last happened to it.

use super::{EntryRule, FieldRule, RenderContext, run_entry_rules, run_field_rules};
use crate::task::{
    domain::{
        DeadlineChange, FacetKind, FacetPresentation, HistoryEntry, HistoryEntryKind,
        StatusChange,
    },
    ports::translator::keys,
    services::{
        availability::deadline_is_active, date_format::format_work_duration,
        scanner::latest_matching,
    },
};

/// History rules, in precedence order.
pub const DEADLINE_ENTRY_RULES: &[EntryRule] = &[
    EntryRule {
        name: "initial-commitment",
        matches: is_initial_commitment,
        render: render_initial_commitment,
    },
    EntryRule {
        name: "deadline-changed",
        matches: is_deadline_change,
        render: render_deadline_change,
    },
    EntryRule {
        name: "checker-assigned",
        matches: is_checker_assignment,
        render: render_awaiting_check,
    },
    EntryRule {
        name: "completion-notified",
        matches: is_completion_notice,
        render: render_completion_notice,
    },
    EntryRule {
        name: "accepted",
        matches: is_acceptance,
        render: render_acceptance,
    },
    EntryRule {
        name: "rejected",
        matches: is_rejection,
        render: render_rejection,
    },
    EntryRule {
        name: "reminded",
        matches: is_reminder,
        render: render_reminder,
    },
    EntryRule {
        name: "escalated",
        matches: is_escalation,
        render: render_escalation,
    },
];

/// Snapshot rules applied when no history rule produced a presentation.
pub const DEADLINE_FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        name: "confirmed-deadline",
        apply: confirmed_deadline,
    },
    FieldRule {
        name: "requested-deadline",
        apply: requested_deadline,
    },
    FieldRule {
        name: "empty",
        apply: empty_deadline,
    },
];

/// Renders the deadline facet.
#[must_use]
pub fn render_deadline(context: &RenderContext<'_>, history: &[HistoryEntry]) -> FacetPresentation {
    let is_active = deadline_is_active(context.task, context.actor, context.config);

    let mut presentation = latest_matching(history, is_deadline_entry)
        .and_then(|entry| run_entry_rules(DEADLINE_ENTRY_RULES, context, entry))
        .or_else(|| run_field_rules(DEADLINE_FIELD_RULES, context))
        .unwrap_or_else(|| {
            FacetPresentation::new(FacetKind::Empty, context.label(keys::DEADLINE), false)
        });
    presentation.is_active = is_active;
    presentation
}

fn is_deadline_entry(kind: &HistoryEntryKind) -> bool {
    DEADLINE_ENTRY_RULES.iter().any(|rule| (rule.matches)(kind))
}

const fn is_initial_commitment(kind: &HistoryEntryKind) -> bool {
    matches!(
        kind,
        HistoryEntryKind::ConfirmedDeadline(DeadlineChange::Initial { .. })
    )
}

const fn is_deadline_change(kind: &HistoryEntryKind) -> bool {
    matches!(
        kind,
        HistoryEntryKind::ConfirmedDeadline(DeadlineChange::Changed { .. })
    )
}

const fn is_checker_assignment(kind: &HistoryEntryKind) -> bool {
    matches!(kind, HistoryEntryKind::CheckerAssigned { .. })
}

const fn is_completion_notice(kind: &HistoryEntryKind) -> bool {
    matches!(
        kind,
        HistoryEntryKind::StatusChange(StatusChange::NotifyOfCompletion)
            | HistoryEntryKind::Completed
    )
}

const fn is_acceptance(kind: &HistoryEntryKind) -> bool {
    matches!(kind, HistoryEntryKind::StatusChange(StatusChange::Closed))
}

const fn is_rejection(kind: &HistoryEntryKind) -> bool {
    matches!(kind, HistoryEntryKind::Rejected)
}

const fn is_reminder(kind: &HistoryEntryKind) -> bool {
    matches!(kind, HistoryEntryKind::OverdueReminder)
}

const fn is_escalation(kind: &HistoryEntryKind) -> bool {
    matches!(kind, HistoryEntryKind::OverdueEscalation { .. })
}

fn from_entry(
    context: &RenderContext<'_>,
    entry: &HistoryEntry,
    kind: FacetKind,
    label: String,
) -> FacetPresentation {
    let mut presentation = FacetPresentation::new(kind, label, false);
    presentation.is_new_to_actor = context.is_new(entry);
    presentation
}

fn dated_at_entry(
    context: &RenderContext<'_>,
    entry: &HistoryEntry,
    kind: FacetKind,
    label: String,
) -> FacetPresentation {
    let mut presentation = from_entry(context, entry, kind, label);
    presentation.content.primary_date = Some(context.dates.format_timestamp(entry.created_at()));
    presentation
}

fn render_initial_commitment(
    context: &RenderContext<'_>,
    entry: &HistoryEntry,
) -> Option<FacetPresentation> {
    let HistoryEntryKind::ConfirmedDeadline(DeadlineChange::Initial { deadline }) = entry.kind()
    else {
        return None;
    };
    let mut presentation =
        from_entry(context, entry, FacetKind::Set, context.label(keys::DEADLINE));
    presentation.content.primary_date = context
        .task
        .deadline_confirmed()
        .or(deadline.as_deref())
        .and_then(|raw| context.dates.format_date(raw));
    Some(presentation)
}

fn render_deadline_change(
    context: &RenderContext<'_>,
    entry: &HistoryEntry,
) -> Option<FacetPresentation> {
    let HistoryEntryKind::ConfirmedDeadline(DeadlineChange::Changed { previous, current }) =
        entry.kind()
    else {
        return None;
    };
    let mut presentation = from_entry(
        context,
        entry,
        FacetKind::Changed,
        context.label(keys::DEADLINE_CHANGED),
    );
    presentation.content.primary_date = context.dates.format_date(current);
    presentation.content.secondary_date = context.dates.format_date(previous);
    Some(presentation)
}

fn render_awaiting_check(
    context: &RenderContext<'_>,
    entry: &HistoryEntry,
) -> Option<FacetPresentation> {
    let HistoryEntryKind::CheckerAssigned { checker, domain } = entry.kind() else {
        return None;
    };
    let person = context.person(checker, domain.as_ref());
    let mut presentation = dated_at_entry(
        context,
        entry,
        FacetKind::AwaitingCheck,
        context.label(keys::AWAITING_CHECK),
    );
    presentation.content.additional_info = Some(
        context.translate(keys::AWAITING_CHECK_AT, &[("name", person.short_name())]),
    );
    Some(presentation)
}

fn render_completion_notice(
    context: &RenderContext<'_>,
    entry: &HistoryEntry,
) -> Option<FacetPresentation> {
    Some(dated_at_entry(
        context,
        entry,
        FacetKind::CompletionNotified,
        context.label(keys::COMPLETION_NOTIFIED),
    ))
}

fn render_acceptance(context: &RenderContext<'_>, entry: &HistoryEntry) -> Option<FacetPresentation> {
    let person = context.person(entry.author_login()?, context.task.share_from());
    let label = context.translate(
        keys::ACCEPTED,
        &[
            ("name", person.short_name()),
            ("gender", person.gender.as_str().to_owned()),
        ],
    );
    let mut presentation = dated_at_entry(context, entry, FacetKind::Closed, label);

    if let (Some(started_at), Some(completed_at)) =
        (context.task.work_started_at(), context.task.completed_at())
    {
        let duration = format_work_duration(started_at, completed_at);
        presentation.content.additional_info =
            Some(context.translate(keys::TIME_SPENT, &[("duration", duration)]));
    }
    Some(presentation)
}

fn render_rejection(context: &RenderContext<'_>, entry: &HistoryEntry) -> Option<FacetPresentation> {
    let person = context.person(entry.author_login()?, context.task.share_from());
    let label = context.translate(
        keys::REJECTED,
        &[
            ("name", person.short_name()),
            ("gender", person.gender.as_str().to_owned()),
        ],
    );
    Some(dated_at_entry(context, entry, FacetKind::Rejected, label))
}

fn render_reminder(context: &RenderContext<'_>, entry: &HistoryEntry) -> Option<FacetPresentation> {
    let mut presentation =
        dated_at_entry(context, entry, FacetKind::Reminded, context.label(keys::DEADLINE));
    presentation.content.additional_info = Some(context.label(keys::OVERDUE));
    Some(presentation)
}

fn render_escalation(context: &RenderContext<'_>, entry: &HistoryEntry) -> Option<FacetPresentation> {
    let HistoryEntryKind::OverdueEscalation { escalated_to } = entry.kind() else {
        return None;
    };
    let manager = escalated_to
        .as_ref()
        .map(|login| context.person(login, context.task.share_from()).short_name())
        .unwrap_or_default();
    let mut presentation =
        dated_at_entry(context, entry, FacetKind::Escalated, context.label(keys::DEADLINE));
    presentation.content.additional_info =
        Some(context.translate(keys::OVERDUE_ESCALATED, &[("name", manager)]));
    Some(presentation)
}

fn date_field(context: &RenderContext<'_>, raw: Option<&str>) -> Option<FacetPresentation> {
    let stored = raw?;
    let mut presentation =
        FacetPresentation::new(FacetKind::Set, context.label(keys::DEADLINE), false);
    presentation.content.primary_date = context.dates.format_date(stored);
    Some(presentation)
}

fn confirmed_deadline(context: &RenderContext<'_>) -> Option<FacetPresentation> {
    date_field(context, context.task.deadline_confirmed())
}

fn requested_deadline(context: &RenderContext<'_>) -> Option<FacetPresentation> {
    date_field(context, context.task.deadline_requested())
}

fn empty_deadline(context: &RenderContext<'_>) -> Option<FacetPresentation> {
    Some(FacetPresentation::new(
        FacetKind::Empty,
        context.label(keys::DEADLINE),
        false,
    ))
}
