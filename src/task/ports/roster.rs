//! Roster port resolving logins to display names.

use crate::task::domain::{TenantDomain, UserLogin};
use serde::{Deserialize, Serialize};

/// Grammatical gender used by translations that agree with a person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Masculine forms.
    Male,
    /// Feminine forms.
    Female,
    /// Unknown; translations use their neutral or default form.
    #[default]
    Unspecified,
}

impl Gender {
    /// Returns the value passed to translations.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unspecified => "unspecified",
        }
    }
}

/// Same-tenant user details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Full display name.
    pub display_name: String,
    /// Grammatical gender.
    pub gender: Gender,
}

impl UserInfo {
    /// Creates user details.
    #[must_use]
    pub fn new(display_name: impl Into<String>, gender: Gender) -> Self {
        Self {
            display_name: display_name.into(),
            gender,
        }
    }
}

/// Cross-tenant user details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareUserInfo {
    /// Full display name.
    pub display_name: String,
    /// Human-readable name of the remote tenant.
    pub domain_label: String,
    /// Grammatical gender.
    pub gender: Gender,
}

/// People lookup contract.
///
/// Lookups are synchronous: the caller loads the roster before evaluating
/// tasks.
pub trait Roster: Send + Sync {
    /// Resolves a same-tenant user. Returns `None` for unknown logins.
    fn resolve_user(&self, login: &UserLogin) -> Option<UserInfo>;

    /// Resolves a cross-tenant user. Returns `None` for unknown users.
    fn resolve_share_user(&self, login: &UserLogin, domain: &TenantDomain)
    -> Option<ShareUserInfo>;
}
