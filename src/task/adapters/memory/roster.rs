//! Fixed in-memory roster.

use std::collections::HashMap;

use crate::task::{
    domain::{TenantDomain, UserLogin},
    ports::{Gender, Roster, ShareUserInfo, UserInfo},
};

/// Roster backed by maps loaded up front.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    users: HashMap<UserLogin, UserInfo>,
    share_users: HashMap<(TenantDomain, UserLogin), ShareUserInfo>,
}

impl InMemoryRoster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a same-tenant user.
    #[must_use]
    pub fn with_user(mut self, login: UserLogin, display_name: &str, gender: Gender) -> Self {
        self.users.insert(login, UserInfo::new(display_name, gender));
        self
    }

    /// Adds a cross-tenant user.
    #[must_use]
    pub fn with_share_user(
        mut self,
        domain: TenantDomain,
        login: UserLogin,
        info: ShareUserInfo,
    ) -> Self {
        self.share_users.insert((domain, login), info);
        self
    }
}

impl Roster for InMemoryRoster {
    fn resolve_user(&self, login: &UserLogin) -> Option<UserInfo> {
        self.users.get(login).cloned()
    }

    fn resolve_share_user(
        &self,
        login: &UserLogin,
        domain: &TenantDomain,
    ) -> Option<ShareUserInfo> {
        self.share_users
            .get(&(domain.clone(), login.clone()))
            .cloned()
    }
}
