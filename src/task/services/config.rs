//! Configuration for the task presentation engine.

use crate::task::domain::{Role, TaskDomainError, UserLogin};
use serde::Deserialize;

/// Tenant-specific constants the engine interprets.
///
/// # Examples
///
/// ```
/// use tasklens::task::services::TaskPresentationConfig;
///
/// let config = TaskPresentationConfig::default();
/// assert_eq!(config.share_performer_sentinel, "shareTask");
///
/// let custom = TaskPresentationConfig::from_json(r#"{"project_manager_role": "lead"}"#)
///     .expect("valid configuration");
/// assert_eq!(custom.project_manager_role, "lead");
/// assert_eq!(custom.share_performer_sentinel, "shareTask");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskPresentationConfig {
    /// Performer value meaning "no performer yet; task suspended".
    pub suspended_performer_sentinel: String,
    /// Performer value meaning "the performer is in `share_performers`".
    pub share_performer_sentinel: String,
    /// Role granting project-manager rights.
    pub project_manager_role: String,
}

impl Default for TaskPresentationConfig {
    fn default() -> Self {
        Self {
            suspended_performer_sentinel: "Просьба подвешена".to_owned(),
            share_performer_sentinel: "shareTask".to_owned(),
            project_manager_role: "PM".to_owned(),
        }
    }
}

impl TaskPresentationConfig {
    /// Loads a configuration from JSON; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidInput`] when the JSON is malformed.
    pub fn from_json(raw: &str) -> Result<Self, TaskDomainError> {
        serde_json::from_str(raw).map_err(|err| TaskDomainError::InvalidInput(err.to_string()))
    }

    /// Returns the project-manager role.
    #[must_use]
    pub fn project_manager(&self) -> Role {
        Role::new(self.project_manager_role.as_str())
    }

    /// Returns `true` when `login` is the suspended-performer sentinel.
    #[must_use]
    pub fn is_suspended_marker(&self, login: &UserLogin) -> bool {
        login.as_str() == self.suspended_performer_sentinel
    }

    /// Returns `true` when `login` is the cross-tenant performer sentinel.
    #[must_use]
    pub fn is_share_marker(&self, login: &UserLogin) -> bool {
        login.as_str() == self.share_performer_sentinel
    }
}
