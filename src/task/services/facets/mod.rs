//! Facet renderers.
//!
//! Each renderer is an ordered decision table: a list of rules evaluated
//! top to bottom where the first matching rule produces the presentation.
//! History-driven rules match the kind of the latest relevant entry; field
//! rules inspect the task snapshot and apply when no history rule does.

mod cancellation;
mod deadline;
mod desired_date;
mod performer;

pub use cancellation::{CANCELLATION_RULE, render_cancellation};
pub use deadline::{DEADLINE_ENTRY_RULES, DEADLINE_FIELD_RULES, render_deadline};
pub use desired_date::{DESIRED_DATE_RULES, render_desired_date};
pub use performer::{PERFORMER_ENTRY_RULES, render_performer};

use super::{DateFormatter, TaskPresentationConfig, date_format::shorten_name};
use crate::task::{
    domain::{Actor, FacetPresentation, HistoryEntry, HistoryEntryKind, Task, TenantDomain, UserLogin},
    ports::{Gender, RecencyOracle, Roster, Substitutions, Translator},
};

/// Everything a renderer needs for one evaluation.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Task snapshot.
    pub task: &'a Task,
    /// Viewing actor.
    pub actor: &'a Actor,
    /// Engine configuration.
    pub config: &'a TaskPresentationConfig,
    /// People lookup.
    pub roster: &'a dyn Roster,
    /// Localisation.
    pub translator: &'a dyn Translator,
    /// Recency oracle.
    pub recency: &'a dyn RecencyOracle,
    /// Date formatter for the evaluation's current year.
    pub dates: DateFormatter,
}

/// A history-driven decision-table row.
pub struct EntryRule {
    /// Rule name, for tracing and tests.
    pub name: &'static str,
    /// Whether the rule applies to an entry kind.
    pub matches: fn(&HistoryEntryKind) -> bool,
    /// Produces the presentation for a matching entry.
    pub render: fn(&RenderContext<'_>, &HistoryEntry) -> Option<FacetPresentation>,
}

/// A field-driven decision-table row.
pub struct FieldRule {
    /// Rule name, for tracing and tests.
    pub name: &'static str,
    /// Produces the presentation when the rule applies to the snapshot.
    pub apply: fn(&RenderContext<'_>) -> Option<FacetPresentation>,
}

/// Resolved person shown in a facet.
pub(crate) struct Person {
    pub(crate) name: String,
    pub(crate) gender: Gender,
}

impl Person {
    pub(crate) fn short_name(&self) -> String {
        shorten_name(&self.name)
    }
}

impl RenderContext<'_> {
    pub(crate) fn translate(&self, key: &str, substitutions: &[(&str, String)]) -> String {
        let substitutions: Substitutions = substitutions
            .iter()
            .map(|(name, value)| ((*name).to_owned(), value.clone()))
            .collect();
        self.translator.translate(key, &substitutions)
    }

    pub(crate) fn label(&self, key: &str) -> String {
        self.translate(key, &[])
    }

    pub(crate) fn is_new(&self, entry: &HistoryEntry) -> bool {
        self.recency.is_new(entry, self.task)
    }

    /// Resolves a login seen in the history log. A domain routes the lookup
    /// to the cross-tenant roster first; unknown people render as their
    /// login.
    pub(crate) fn person(&self, login: &UserLogin, domain: Option<&TenantDomain>) -> Person {
        domain
            .and_then(|remote| self.roster.resolve_share_user(login, remote))
            .map(|info| Person {
                name: info.display_name,
                gender: info.gender,
            })
            .or_else(|| {
                self.roster.resolve_user(login).map(|info| Person {
                    name: info.display_name,
                    gender: info.gender,
                })
            })
            .unwrap_or_else(|| Person {
                name: login.to_string(),
                gender: Gender::Unspecified,
            })
    }
}

pub(crate) fn run_entry_rules(
    rules: &[EntryRule],
    context: &RenderContext<'_>,
    entry: &HistoryEntry,
) -> Option<FacetPresentation> {
    rules
        .iter()
        .filter(|rule| (rule.matches)(entry.kind()))
        .find_map(|rule| {
            tracing::trace!(rule = rule.name, tag = entry.kind().tag(), "facet rule matched");
            (rule.render)(context, entry)
        })
}

pub(crate) fn run_field_rules(
    rules: &[FieldRule],
    context: &RenderContext<'_>,
) -> Option<FacetPresentation> {
    rules.iter().find_map(|rule| {
        let presentation = (rule.apply)(context);
        if presentation.is_some() {
            tracing::trace!(rule = rule.name, "facet field rule matched");
        }
        presentation
    })
}
