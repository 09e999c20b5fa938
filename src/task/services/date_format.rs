//! Date and name formatting shared by the facet renderers.

use crate::task::domain::date::parse_task_date;
use chrono::{DateTime, Datelike, Locale, NaiveDateTime, Utc};
use mockable::Clock;

/// Formats dates relative to the year the evaluation runs in.
///
/// Dates in the current year omit the year (`1 Jun`); other dates carry it
/// (`1 Jun 2024`). Month names follow the formatter's locale, `en_US`
/// unless replaced.
#[derive(Debug, Clone, Copy)]
pub struct DateFormatter {
    current_year: i32,
    locale: Locale,
}

impl DateFormatter {
    /// Creates a formatter for an explicit current year.
    #[must_use]
    pub const fn for_year(current_year: i32) -> Self {
        Self {
            current_year,
            locale: Locale::en_US,
        }
    }

    /// Replaces the locale used for month names.
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Creates a formatter for the clock's current year.
    #[must_use]
    pub fn from_clock(clock: &impl Clock) -> Self {
        Self::for_year(clock.utc().year())
    }

    /// Formats a stored task date string.
    ///
    /// Returns `None` when the string matches no known date spelling.
    #[must_use]
    pub fn format_date(&self, raw: &str) -> Option<String> {
        let parsed = parse_task_date(raw);
        if parsed.is_none() {
            tracing::debug!(raw, "unparseable task date");
        }
        parsed.map(|date| self.format_naive(date))
    }

    /// Formats a history timestamp.
    #[must_use]
    pub fn format_timestamp(&self, at: DateTime<Utc>) -> String {
        self.format_naive(at.naive_utc())
    }

    /// Formats a cancellation timestamp: `01 Jun` in the current year,
    /// `01.06.2024` otherwise.
    #[must_use]
    pub fn format_cancellation_timestamp(&self, at: DateTime<Utc>) -> String {
        let pattern = if at.year() == self.current_year {
            "%d %b"
        } else {
            "%d.%m.%Y"
        };
        at.format_localized(pattern, self.locale).to_string()
    }

    fn format_naive(&self, date: NaiveDateTime) -> String {
        let pattern = if date.year() == self.current_year {
            "%-d %b"
        } else {
            "%-d %b %Y"
        };
        date.and_utc()
            .format_localized(pattern, self.locale)
            .to_string()
    }
}

/// Formats the time spent between starting and completing work as
/// `D d. H h.`, omitting the day term when it is zero.
///
/// Negative spans are reported as zero.
#[must_use]
pub fn format_work_duration(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> String {
    let spent = (completed_at - started_at).max(chrono::TimeDelta::zero());
    let days = spent.num_days();
    let hours = spent.num_hours() - days * 24;
    if days > 0 {
        format!("{days} d. {hours} h.")
    } else {
        format!("{hours} h.")
    }
}

/// Shortens a full name to the first word followed by the initials of the
/// remaining words: `Sidorova Olga Petrovna` becomes `Sidorova O. P.`.
#[must_use]
pub fn shorten_name(full_name: &str) -> String {
    let mut words = full_name.split_whitespace();
    let Some(head) = words.next() else {
        return String::new();
    };

    words.fold(head.to_owned(), |mut short, word| {
        if let Some(initial) = word.chars().next() {
            short.push(' ');
            short.extend(initial.to_uppercase());
            short.push('.');
        }
        short
    })
}
