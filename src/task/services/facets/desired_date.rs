//! Desired-date facet: the date the author asked for.

use super::{FieldRule, RenderContext, run_field_rules};
use crate::task::{
    domain::{FacetKind, FacetPresentation},
    ports::translator::keys,
    services::availability::desired_date_is_active,
};

/// Snapshot rules, in precedence order. History plays no part here.
pub const DESIRED_DATE_RULES: &[FieldRule] = &[
    FieldRule {
        name: "requested",
        apply: requested,
    },
    FieldRule {
        name: "empty",
        apply: empty,
    },
];

/// Renders the desired-date facet.
#[must_use]
pub fn render_desired_date(context: &RenderContext<'_>) -> FacetPresentation {
    let mut presentation = run_field_rules(DESIRED_DATE_RULES, context).unwrap_or_else(|| {
        FacetPresentation::new(FacetKind::Empty, context.label(keys::DEADLINE), false)
    });
    presentation.is_active = desired_date_is_active(context.task, context.actor);
    presentation
}

fn requested(context: &RenderContext<'_>) -> Option<FacetPresentation> {
    let stored = context.task.deadline_requested()?;
    let mut presentation = FacetPresentation::new(
        FacetKind::Set,
        context.label(keys::DEADLINE_REQUESTED),
        false,
    );
    presentation.content.primary_date = context.dates.format_date(stored);
    Some(presentation)
}

fn empty(context: &RenderContext<'_>) -> Option<FacetPresentation> {
    Some(FacetPresentation::new(
        FacetKind::Empty,
        context.label(keys::DEADLINE),
        false,
    ))
}
