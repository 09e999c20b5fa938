//! Append-only task history log and its entry kinds.
//!
//! The log is ordered by insertion. "Most recent" always means the last
//! element, never the entry with the greatest `created_at`.

use super::{TaskDomainError, TenantDomain, UserLogin, date::parse_task_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of a performer as recorded in a performer-change entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PerformerIdentity {
    /// Performer login.
    pub login: UserLogin,
    /// Tenant domain for cross-tenant performers.
    pub domain: Option<TenantDomain>,
}

impl PerformerIdentity {
    /// Creates a same-tenant performer identity.
    #[must_use]
    pub const fn local(login: UserLogin) -> Self {
        Self {
            login,
            domain: None,
        }
    }

    /// Creates a cross-tenant performer identity.
    #[must_use]
    pub const fn remote(login: UserLogin, domain: TenantDomain) -> Self {
        Self {
            login,
            domain: Some(domain),
        }
    }
}

/// Payload of a confirmed-deadline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineChange {
    /// The performer committed to a deadline for the first time.
    Initial {
        /// Committed deadline as recorded, if the entry carried one.
        deadline: Option<String>,
    },
    /// A previously committed deadline was replaced.
    Changed {
        /// Deadline before the change.
        previous: String,
        /// Deadline after the change.
        current: String,
    },
}

/// Sub-tag of a status-change entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    /// The performer notified the author of completion.
    NotifyOfCompletion,
    /// The task was accepted and closed.
    Closed,
    /// The task was cancelled.
    Cancelled,
    /// Any other status transition.
    Other(String),
}

/// Kind-specific part of a history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntryKind {
    /// A deadline was committed or changed by the performer.
    ConfirmedDeadline(DeadlineChange),
    /// A checker was assigned.
    CheckerAssigned {
        /// Checker login.
        checker: UserLogin,
        /// Checker tenant, when cross-tenant.
        domain: Option<TenantDomain>,
    },
    /// The coarse status changed.
    StatusChange(StatusChange),
    /// The performer marked the task completed.
    Completed,
    /// The task was returned for rework.
    Rejected,
    /// The performer was reminded of an overdue deadline.
    OverdueReminder,
    /// An overdue deadline was escalated.
    OverdueEscalation {
        /// Manager the escalation was sent to.
        escalated_to: Option<UserLogin>,
    },
    /// The performer was replaced.
    PerformerChanged {
        /// Performer before the change.
        previous: PerformerIdentity,
        /// Performer after the change.
        current: PerformerIdentity,
    },
    /// An entry whose tag or payload this version does not understand.
    Unrecognized {
        /// Raw tag value.
        tag: String,
    },
}

impl HistoryEntryKind {
    /// Returns the wire tag for this kind.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::ConfirmedDeadline(_) => TAG_CONFIRMED_DEADLINE,
            Self::CheckerAssigned { .. } => TAG_CHECKER,
            Self::StatusChange(_) => TAG_STATUS,
            Self::Completed => TAG_COMPLETED,
            Self::Rejected => TAG_REJECTED,
            Self::OverdueReminder => TAG_REMINDER,
            Self::OverdueEscalation { .. } => TAG_ESCALATION,
            Self::PerformerChanged { .. } => TAG_PERFORMER,
            Self::Unrecognized { tag } => tag,
        }
    }
}

const TAG_CONFIRMED_DEADLINE: &str = "taskDateReal";
const TAG_CHECKER: &str = "checker";
const TAG_STATUS: &str = "status";
const TAG_COMPLETED: &str = "completed";
const TAG_REJECTED: &str = "reject";
const TAG_REMINDER: &str = "remind";
const TAG_ESCALATION: &str = "notify";
const TAG_PERFORMER: &str = "taskPerformer";

/// One immutable record in a task's history log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    kind: HistoryEntryKind,
    created_at: DateTime<Utc>,
    author_login: Option<UserLogin>,
    domain: Option<TenantDomain>,
}

impl HistoryEntry {
    /// Creates a history entry authored by a same-tenant user.
    #[must_use]
    pub const fn new(
        kind: HistoryEntryKind,
        created_at: DateTime<Utc>,
        author_login: UserLogin,
    ) -> Self {
        Self {
            kind,
            created_at,
            author_login: Some(author_login),
            domain: None,
        }
    }

    /// Creates a history entry recorded by the system rather than a user.
    #[must_use]
    pub const fn system(kind: HistoryEntryKind, created_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            created_at,
            author_login: None,
            domain: None,
        }
    }

    /// Sets the tenant domain of the entry author.
    #[must_use]
    pub fn with_domain(mut self, domain: TenantDomain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Returns the kind-specific part of the entry.
    #[must_use]
    pub const fn kind(&self) -> &HistoryEntryKind {
        &self.kind
    }

    /// Returns when the entry was recorded.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the entry author, or `None` for system entries.
    #[must_use]
    pub const fn author_login(&self) -> Option<&UserLogin> {
        self.author_login.as_ref()
    }

    /// Returns the entry author's tenant domain.
    #[must_use]
    pub const fn domain(&self) -> Option<&TenantDomain> {
        self.domain.as_ref()
    }

    /// Decodes a raw wire entry.
    ///
    /// Unknown tags and known tags with malformed payloads decode to
    /// [`HistoryEntryKind::Unrecognized`] so that a newer server never
    /// breaks an older client. A blank author marks a system entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDate`] when an entry of a known kind
    /// has no usable timestamp, and
    /// [`TaskDomainError::UnrecognizedHistoryEntry`] when an entry of an
    /// unknown kind has none. [`HistoryLog::decode`] drops the latter.
    pub fn decode(raw: RawHistoryEntry) -> Result<Self, TaskDomainError> {
        let kind = match decode_kind(&raw) {
            Ok(kind) => kind,
            Err(TaskDomainError::UnrecognizedHistoryEntry { tag }) => {
                tracing::debug!(%tag, "unrecognised history entry kind");
                HistoryEntryKind::Unrecognized { tag }
            }
            Err(TaskDomainError::MalformedHistoryPayload { tag, reason }) => {
                tracing::warn!(%tag, %reason, "history entry payload is malformed");
                HistoryEntryKind::Unrecognized { tag }
            }
            Err(other) => return Err(other),
        };

        let Some(created_at) = parse_task_timestamp(&raw.created) else {
            return Err(match kind {
                HistoryEntryKind::Unrecognized { tag } => {
                    TaskDomainError::UnrecognizedHistoryEntry { tag }
                }
                _ => TaskDomainError::InvalidDate(raw.created),
            });
        };

        let mut entry = Self::system(kind, created_at);
        entry.author_login = UserLogin::new(raw.author_login).ok();
        entry.domain = raw
            .domain
            .filter(|value| !value.trim().is_empty())
            .map(TenantDomain::new);
        Ok(entry)
    }
}

/// History entry as exchanged on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHistoryEntry {
    /// Entry tag.
    #[serde(rename = "type")]
    pub tag: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created: String,
    /// Entry author login; blank for system entries.
    #[serde(default)]
    pub author_login: String,
    /// Entry author tenant domain.
    #[serde(default)]
    pub domain: Option<String>,
    /// Tag-specific new value.
    #[serde(default)]
    pub value: Option<Value>,
    /// Tag-specific previous value.
    #[serde(default)]
    pub old_value: Option<Value>,
    /// Tag-specific flags.
    #[serde(default)]
    pub flags: Option<Value>,
}

fn decode_kind(raw: &RawHistoryEntry) -> Result<HistoryEntryKind, TaskDomainError> {
    let value = raw.value.as_ref();
    let old_value = raw.old_value.as_ref();
    let malformed = |reason: &str| TaskDomainError::MalformedHistoryPayload {
        tag: raw.tag.clone(),
        reason: reason.to_owned(),
    };

    match raw.tag.as_str() {
        TAG_CONFIRMED_DEADLINE => {
            let initial = raw
                .flags
                .as_ref()
                .and_then(|flags| flags.get("initialTimeline"))
                .is_some_and(is_truthy);
            let current = text_field(value, "end");
            if initial {
                return Ok(HistoryEntryKind::ConfirmedDeadline(
                    DeadlineChange::Initial {
                        deadline: current.map(str::to_owned),
                    },
                ));
            }
            let previous = text_field(old_value, "end").ok_or_else(|| malformed("oldValue.end"))?;
            let next = current.ok_or_else(|| malformed("value.end"))?;
            Ok(HistoryEntryKind::ConfirmedDeadline(DeadlineChange::Changed {
                previous: previous.to_owned(),
                current: next.to_owned(),
            }))
        }
        TAG_CHECKER => {
            let checker = login_field(value, "login").ok_or_else(|| malformed("value.login"))?;
            Ok(HistoryEntryKind::CheckerAssigned {
                checker,
                domain: text_field(value, "domain").map(TenantDomain::new),
            })
        }
        TAG_STATUS => {
            let sub_tag = text_field(value, "type").ok_or_else(|| malformed("value.type"))?;
            let change = match sub_tag {
                "notify" => StatusChange::NotifyOfCompletion,
                "close" | "closed" => StatusChange::Closed,
                "cancel" | "cancelled" => StatusChange::Cancelled,
                other => StatusChange::Other(other.to_owned()),
            };
            Ok(HistoryEntryKind::StatusChange(change))
        }
        TAG_COMPLETED => Ok(HistoryEntryKind::Completed),
        TAG_REJECTED => Ok(HistoryEntryKind::Rejected),
        TAG_REMINDER => Ok(HistoryEntryKind::OverdueReminder),
        TAG_ESCALATION => Ok(HistoryEntryKind::OverdueEscalation {
            escalated_to: login_field(value, "boss"),
        }),
        TAG_PERFORMER => {
            let previous = performer_field(old_value).ok_or_else(|| malformed("oldValue.login"))?;
            let current = performer_field(value).ok_or_else(|| malformed("value.login"))?;
            Ok(HistoryEntryKind::PerformerChanged { previous, current })
        }
        _ => Err(TaskDomainError::UnrecognizedHistoryEntry {
            tag: raw.tag.clone(),
        }),
    }
}

fn text_field<'a>(value: Option<&'a Value>, key: &str) -> Option<&'a str> {
    value
        .and_then(|object| object.get(key))
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

fn login_field(value: Option<&Value>, key: &str) -> Option<UserLogin> {
    text_field(value, key).and_then(|text| UserLogin::new(text).ok())
}

fn performer_field(value: Option<&Value>) -> Option<PerformerIdentity> {
    let login = login_field(value, "login")?;
    Some(PerformerIdentity {
        login,
        domain: text_field(value, "domain").map(TenantDomain::new),
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_i64().is_none_or(|n| n != 0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Ordered, append-only sequence of history entries for one task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns a log with `entry` appended.
    #[must_use]
    pub fn appended(mut self, entry: HistoryEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Decodes a sequence of wire entries, preserving their order.
    ///
    /// Entries of an unknown kind that carry no usable timestamp are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns the first other [`TaskDomainError`] raised by
    /// [`HistoryEntry::decode`].
    pub fn decode(raw: impl IntoIterator<Item = RawHistoryEntry>) -> Result<Self, TaskDomainError> {
        let mut entries = Vec::new();
        for wire in raw {
            match HistoryEntry::decode(wire) {
                Ok(entry) => entries.push(entry),
                Err(TaskDomainError::UnrecognizedHistoryEntry { tag }) => {
                    tracing::debug!(%tag, "dropping undated history entry of unknown kind");
                }
                Err(other) => return Err(other),
            }
        }
        Ok(Self { entries })
    }

    /// Decodes a JSON array of wire entries.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidInput`] when the JSON is not an
    /// array of history entries, or any error from [`HistoryLog::decode`].
    pub fn from_json(raw: &str) -> Result<Self, TaskDomainError> {
        let entries: Vec<RawHistoryEntry> = serde_json::from_str(raw)
            .map_err(|err| TaskDomainError::InvalidInput(err.to_string()))?;
        Self::decode(entries)
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the last entry, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns `true` when the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<HistoryEntry> for HistoryLog {
    fn from_iter<I: IntoIterator<Item = HistoryEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
