//! Task snapshot and its document wire format.

use super::{
    StateCode, TaskDomainError, TaskId, TaskStatus, TenantDomain, UserLogin,
    date::parse_task_timestamp,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Performer belonging to a different tenant than the task's owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SharePerformer {
    /// Login within the remote tenant.
    pub login: UserLogin,
    /// Remote tenant domain.
    pub domain: TenantDomain,
}

impl SharePerformer {
    /// Creates a cross-tenant performer reference.
    #[must_use]
    pub const fn new(login: UserLogin, domain: TenantDomain) -> Self {
        Self { login, domain }
    }
}

/// Snapshot of a task as supplied by the caller for one evaluation.
///
/// The snapshot is never mutated by the presentation engine; every
/// evaluation works from a fresh value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    status: TaskStatus,
    state_code: StateCode,
    performers: Vec<UserLogin>,
    share_performers: Vec<SharePerformer>,
    author_login: UserLogin,
    checkers: Vec<UserLogin>,
    escalation_managers: Vec<UserLogin>,
    responsible: Option<UserLogin>,
    deadline_requested: Option<String>,
    deadline_confirmed: Option<String>,
    completed_at: Option<DateTime<Utc>>,
    work_started_at: Option<DateTime<Utc>>,
    completion_notified: bool,
    share_from: Option<TenantDomain>,
    attachments: Vec<String>,
}

impl Task {
    /// Creates an open task authored by `author_login` with no performers
    /// and no dates.
    #[must_use]
    pub fn new(author_login: UserLogin) -> Self {
        Self {
            id: TaskId::new(),
            status: TaskStatus::Open,
            state_code: StateCode::default(),
            performers: Vec::new(),
            share_performers: Vec::new(),
            author_login,
            checkers: Vec::new(),
            escalation_managers: Vec::new(),
            responsible: None,
            deadline_requested: None,
            deadline_confirmed: None,
            completed_at: None,
            work_started_at: None,
            completion_notified: false,
            share_from: None,
            attachments: Vec::new(),
        }
    }

    /// Sets the task identifier.
    #[must_use]
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    /// Sets the coarse status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the fine-grained lifecycle code.
    #[must_use]
    pub fn with_state_code(mut self, state_code: StateCode) -> Self {
        self.state_code = state_code;
        self
    }

    /// Sets the ordered performer list.
    #[must_use]
    pub fn with_performers(mut self, performers: impl IntoIterator<Item = UserLogin>) -> Self {
        self.performers = performers.into_iter().collect();
        self
    }

    /// Sets the cross-tenant performers.
    #[must_use]
    pub fn with_share_performers(
        mut self,
        share_performers: impl IntoIterator<Item = SharePerformer>,
    ) -> Self {
        self.share_performers = share_performers.into_iter().collect();
        self
    }

    /// Sets the checkers.
    #[must_use]
    pub fn with_checkers(mut self, checkers: impl IntoIterator<Item = UserLogin>) -> Self {
        self.checkers = checkers.into_iter().collect();
        self
    }

    /// Sets the escalation managers.
    #[must_use]
    pub fn with_escalation_managers(
        mut self,
        managers: impl IntoIterator<Item = UserLogin>,
    ) -> Self {
        self.escalation_managers = managers.into_iter().collect();
        self
    }

    /// Sets the party responsible for applying requested patches.
    #[must_use]
    pub fn with_responsible(mut self, responsible: UserLogin) -> Self {
        self.responsible = Some(responsible);
        self
    }

    /// Sets the author-desired date. Blank values clear it.
    #[must_use]
    pub fn with_deadline_requested(mut self, date: impl Into<String>) -> Self {
        self.deadline_requested = non_blank(date.into());
        self
    }

    /// Sets the performer-committed date. Blank values clear it.
    #[must_use]
    pub fn with_deadline_confirmed(mut self, date: impl Into<String>) -> Self {
        self.deadline_confirmed = non_blank(date.into());
        self
    }

    /// Sets the completion timestamp.
    #[must_use]
    pub fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Sets the timestamp at which the performer started work.
    #[must_use]
    pub fn with_work_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.work_started_at = Some(started_at);
        self
    }

    /// Marks whether the performer has notified the author of completion.
    #[must_use]
    pub fn with_completion_notified(mut self, notified: bool) -> Self {
        self.completion_notified = notified;
        self
    }

    /// Sets the tenant the task was shared from.
    #[must_use]
    pub fn with_share_from(mut self, domain: TenantDomain) -> Self {
        self.share_from = Some(domain);
        self
    }

    /// Sets the attachment references.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = String>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the coarse status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the lifecycle code.
    #[must_use]
    pub const fn state_code(&self) -> StateCode {
        self.state_code
    }

    /// Returns the ordered performer list.
    #[must_use]
    pub fn performers(&self) -> &[UserLogin] {
        &self.performers
    }

    /// Returns the first performer, if any.
    #[must_use]
    pub fn primary_performer(&self) -> Option<&UserLogin> {
        self.performers.first()
    }

    /// Returns the cross-tenant performers.
    #[must_use]
    pub fn share_performers(&self) -> &[SharePerformer] {
        &self.share_performers
    }

    /// Returns the author login.
    #[must_use]
    pub const fn author_login(&self) -> &UserLogin {
        &self.author_login
    }

    /// Returns the checkers.
    #[must_use]
    pub fn checkers(&self) -> &[UserLogin] {
        &self.checkers
    }

    /// Returns the escalation managers.
    #[must_use]
    pub fn escalation_managers(&self) -> &[UserLogin] {
        &self.escalation_managers
    }

    /// Returns the party responsible for applying patches.
    #[must_use]
    pub const fn responsible(&self) -> Option<&UserLogin> {
        self.responsible.as_ref()
    }

    /// Returns the author-desired date as stored.
    #[must_use]
    pub fn deadline_requested(&self) -> Option<&str> {
        self.deadline_requested.as_deref()
    }

    /// Returns the performer-committed date as stored.
    #[must_use]
    pub fn deadline_confirmed(&self) -> Option<&str> {
        self.deadline_confirmed.as_deref()
    }

    /// Returns the completion timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the work start timestamp.
    #[must_use]
    pub const fn work_started_at(&self) -> Option<DateTime<Utc>> {
        self.work_started_at
    }

    /// Returns `true` once the performer has notified of completion.
    #[must_use]
    pub const fn completion_notified(&self) -> bool {
        self.completion_notified
    }

    /// Returns the tenant the task was shared from.
    #[must_use]
    pub const fn share_from(&self) -> Option<&TenantDomain> {
        self.share_from.as_ref()
    }

    /// Returns the attachment references.
    #[must_use]
    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    /// Returns a copy of this task with the author-desired date replaced.
    #[must_use]
    pub fn with_replaced_deadline_requested(&self, date: Option<String>) -> Self {
        let mut edited = self.clone();
        edited.deadline_requested = date.and_then(non_blank);
        edited
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Task document as exchanged with the persistence layer.
///
/// Collection fields are optional on input because older documents omit
/// them. The persistence layer rejects saves where any of `attachments`,
/// `sharePerformers` or `performers` is missing, so documents produced from
/// a [`Task`] always carry all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDocument {
    /// Task identifier.
    pub id: TaskId,
    /// Coarse status string.
    pub status: String,
    /// Fine-grained lifecycle code.
    #[serde(default)]
    pub state_code: u16,
    /// Performer logins.
    #[serde(default)]
    pub performers: Option<Vec<String>>,
    /// Cross-tenant performers.
    #[serde(default)]
    pub share_performers: Option<Vec<SharePerformer>>,
    /// Author login.
    pub author_login: String,
    /// Checker logins.
    #[serde(default)]
    pub checkers: Option<Vec<String>>,
    /// Escalation manager logins.
    #[serde(default)]
    pub escalation_managers: Option<Vec<String>>,
    /// Party responsible for applying patches.
    #[serde(default)]
    pub responsible: Option<String>,
    /// Author-desired date.
    #[serde(default)]
    pub deadline_requested: Option<String>,
    /// Performer-committed date.
    #[serde(default)]
    pub deadline_confirmed: Option<String>,
    /// Completion timestamp.
    #[serde(default)]
    pub completed_at: Option<String>,
    /// Work start timestamp.
    #[serde(default)]
    pub work_started_at: Option<String>,
    /// Whether the performer notified of completion.
    #[serde(default)]
    pub completion_notified: bool,
    /// Tenant the task was shared from.
    #[serde(default)]
    pub share_from: Option<String>,
    /// Attachment references.
    #[serde(default)]
    pub attachments: Option<Vec<String>>,
}

impl TaskDocument {
    /// Decodes a task document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidInput`] when the JSON is not a task
    /// document.
    pub fn from_json(raw: &str) -> Result<Self, TaskDomainError> {
        serde_json::from_str(raw).map_err(|err| TaskDomainError::InvalidInput(err.to_string()))
    }

    /// Encodes the document as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidInput`] when serialisation fails.
    pub fn to_json(&self) -> Result<String, TaskDomainError> {
        serde_json::to_string(self).map_err(|err| TaskDomainError::InvalidInput(err.to_string()))
    }
}

impl TryFrom<TaskDocument> for Task {
    type Error = TaskDomainError;

    fn try_from(doc: TaskDocument) -> Result<Self, Self::Error> {
        let status = TaskStatus::try_from(doc.status.as_str())?;
        let mut task = Self::new(UserLogin::new(doc.author_login)?)
            .with_id(doc.id)
            .with_status(status)
            .with_state_code(StateCode::new(doc.state_code))
            .with_performers(logins(doc.performers)?)
            .with_share_performers(doc.share_performers.unwrap_or_default())
            .with_checkers(logins(doc.checkers)?)
            .with_escalation_managers(logins(doc.escalation_managers)?)
            .with_deadline_requested(doc.deadline_requested.unwrap_or_default())
            .with_deadline_confirmed(doc.deadline_confirmed.unwrap_or_default())
            .with_completion_notified(doc.completion_notified)
            .with_attachments(doc.attachments.unwrap_or_default());

        if let Some(responsible) = doc.responsible.filter(|value| !value.trim().is_empty()) {
            task = task.with_responsible(UserLogin::new(responsible)?);
        }
        if let Some(completed_at) = timestamp(doc.completed_at)? {
            task = task.with_completed_at(completed_at);
        }
        if let Some(started_at) = timestamp(doc.work_started_at)? {
            task = task.with_work_started_at(started_at);
        }
        if let Some(domain) = doc.share_from.filter(|value| !value.trim().is_empty()) {
            task = task.with_share_from(TenantDomain::new(domain));
        }
        Ok(task)
    }
}

impl From<&Task> for TaskDocument {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            status: task.status.as_str().to_owned(),
            state_code: task.state_code.value(),
            performers: Some(task.performers.iter().map(ToString::to_string).collect()),
            share_performers: Some(task.share_performers.clone()),
            author_login: task.author_login.to_string(),
            checkers: Some(task.checkers.iter().map(ToString::to_string).collect()),
            escalation_managers: Some(
                task.escalation_managers
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            ),
            responsible: task.responsible.as_ref().map(ToString::to_string),
            deadline_requested: task.deadline_requested.clone(),
            deadline_confirmed: task.deadline_confirmed.clone(),
            completed_at: task.completed_at.map(|at| at.to_rfc3339()),
            work_started_at: task.work_started_at.map(|at| at.to_rfc3339()),
            completion_notified: task.completion_notified,
            share_from: task.share_from.as_ref().map(ToString::to_string),
            attachments: Some(task.attachments.clone()),
        }
    }
}

fn logins(values: Option<Vec<String>>) -> Result<Vec<UserLogin>, TaskDomainError> {
    values
        .unwrap_or_default()
        .into_iter()
        .map(UserLogin::new)
        .collect()
}

fn timestamp(value: Option<String>) -> Result<Option<DateTime<Utc>>, TaskDomainError> {
    match value.filter(|raw| !raw.trim().is_empty()) {
        None => Ok(None),
        Some(raw) => parse_task_timestamp(&raw)
            .map(Some)
            .ok_or(TaskDomainError::InvalidDate(raw)),
    }
}
