//! Translation catalogue rendered with `minijinja`.

use minijinja::Environment;
use std::collections::HashMap;

use crate::task::ports::{Substitutions, Translator, translator::keys};

const ENGLISH: &[(&str, &str)] = &[
    (keys::DEADLINE, "Deadline"),
    (keys::DEADLINE_CHANGED, "Deadline changed"),
    (keys::DEADLINE_REQUESTED, "Desired date"),
    (keys::AWAITING_CHECK, "Awaiting check"),
    (keys::AWAITING_CHECK_AT, "at {{ name }}"),
    (keys::COMPLETION_NOTIFIED, "Completion reported"),
    (keys::ACCEPTED, "{{ name }} accepted"),
    (keys::TIME_SPENT, "(spent {{ duration }})"),
    (keys::REJECTED, "{{ name }} returned the task"),
    (keys::OVERDUE, "overdue"),
    (keys::OVERDUE_ESCALATED, "(overdue, {{ name }} notified)"),
    (keys::PERFORMER, "Performer"),
    (keys::PERFORMER_NEW, "New performer"),
    (keys::PERFORMER_REPLACED, "{{ name }} (instead of {{ previous }})"),
    (keys::SHARE_PERFORMER, "{{ name }} ({{ domain }})"),
    (keys::CANCELLATION, "Cancellation"),
    (keys::CANCELLED, "{{ name }} cancelled the task {{ date }}"),
];

const RUSSIAN: &[(&str, &str)] = &[
    (keys::DEADLINE, "Срок"),
    (keys::DEADLINE_CHANGED, "Срок изменён"),
    (keys::DEADLINE_REQUESTED, "Желаемый срок"),
    (keys::AWAITING_CHECK, "На проверке"),
    (keys::AWAITING_CHECK_AT, "у {{ name }}"),
    (keys::COMPLETION_NOTIFIED, "Сообщено о выполнении"),
    (
        keys::ACCEPTED,
        "{{ name }} {% if gender == 'female' %}приняла{% else %}принял{% endif %}",
    ),
    (keys::TIME_SPENT, "(затрачено {{ duration }})"),
    (
        keys::REJECTED,
        "{{ name }} {% if gender == 'female' %}вернула{% else %}вернул{% endif %} задачу",
    ),
    (keys::OVERDUE, "просрочено"),
    (keys::OVERDUE_ESCALATED, "(просрочено, уведомлён {{ name }})"),
    (keys::PERFORMER, "Исполнитель"),
    (keys::PERFORMER_NEW, "Новый исполнитель"),
    (keys::PERFORMER_REPLACED, "{{ name }} (вместо {{ previous }})"),
    (keys::SHARE_PERFORMER, "{{ name }} ({{ domain }})"),
    (keys::CANCELLATION, "Отмена"),
    (
        keys::CANCELLED,
        "{{ name }} {% if gender == 'female' %}отменила{% else %}отменил{% endif %} {{ date }}",
    ),
];

/// Key-to-template catalogue.
///
/// Templates use `minijinja` syntax and receive the substitutions as
/// top-level variables. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    templates: HashMap<String, String>,
}

impl CatalogTranslator {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the built-in English catalogue.
    #[must_use]
    pub fn english() -> Self {
        Self::from_pairs(ENGLISH)
    }

    /// Creates the built-in Russian catalogue with gendered verb forms.
    #[must_use]
    pub fn russian() -> Self {
        Self::from_pairs(RUSSIAN)
    }

    /// Adds or replaces a template.
    #[must_use]
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(key.into(), template.into());
        self
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .fold(Self::new(), |catalog, (key, template)| {
                catalog.with_template(*key, *template)
            })
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str, substitutions: &Substitutions) -> String {
        let Some(template) = self.templates.get(key) else {
            tracing::debug!(key, "missing translation");
            return key.to_owned();
        };
        Environment::new()
            .render_str(template, substitutions)
            .unwrap_or_else(|error| {
                tracing::warn!(key, %error, "translation template failed to render");
                template.clone()
            })
    }
}
