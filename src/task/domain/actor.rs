//! The viewing identity a task is evaluated for.

use super::{Role, Task, TaskId, UserLogin};
use std::collections::BTreeSet;

/// Write permission an actor holds over task documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WriteAccess {
    /// May write only tasks they authored.
    #[default]
    Authored,
    /// May write tasks they authored plus the listed tasks.
    Granted(BTreeSet<TaskId>),
    /// May write every task.
    All,
    /// May not write any task.
    ReadOnly,
}

/// The user viewing a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    login: UserLogin,
    roles: BTreeSet<Role>,
    write_access: WriteAccess,
    programmer_section: Option<String>,
}

impl Actor {
    /// Creates an actor with no roles and authored-only write access.
    #[must_use]
    pub const fn new(login: UserLogin) -> Self {
        Self {
            login,
            roles: BTreeSet::new(),
            write_access: WriteAccess::Authored,
            programmer_section: None,
        }
    }

    /// Sets the roles held by the actor.
    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    /// Sets the actor's write access.
    #[must_use]
    pub fn with_write_access(mut self, write_access: WriteAccess) -> Self {
        self.write_access = write_access;
        self
    }

    /// Sets the programmer section the actor works in.
    #[must_use]
    pub fn with_programmer_section(mut self, section: impl Into<String>) -> Self {
        let raw = section.into();
        self.programmer_section = if raw.trim().is_empty() { None } else { Some(raw) };
        self
    }

    /// Returns the actor login.
    #[must_use]
    pub const fn login(&self) -> &UserLogin {
        &self.login
    }

    /// Returns the actor's roles.
    #[must_use]
    pub const fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }

    /// Returns the programmer section, if the actor belongs to one.
    #[must_use]
    pub fn programmer_section(&self) -> Option<&str> {
        self.programmer_section.as_deref()
    }

    /// Returns `true` when the actor holds any of `roles`.
    #[must_use]
    pub fn has_any_role<'a>(&self, roles: impl IntoIterator<Item = &'a Role>) -> bool {
        roles.into_iter().any(|role| self.roles.contains(role))
    }

    /// Returns `true` when the actor may write `task`.
    #[must_use]
    pub fn can_write(&self, task: &Task) -> bool {
        let is_author = task.author_login() == &self.login;
        match &self.write_access {
            WriteAccess::All => true,
            WriteAccess::ReadOnly => false,
            WriteAccess::Authored => is_author,
            WriteAccess::Granted(ids) => is_author || ids.contains(&task.id()),
        }
    }
}
