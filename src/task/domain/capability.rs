//! Pure predicates relating an actor to a task.

use super::{Actor, Role, Task, UserLogin};

fn listed(login: &UserLogin, logins: &[UserLogin]) -> bool {
    logins.iter().any(|candidate| candidate == login)
}

/// Returns `true` when the actor is one of the task performers.
#[must_use]
pub fn is_performer(actor: &Actor, task: &Task) -> bool {
    listed(actor.login(), task.performers())
}

/// Returns `true` when the actor authored the task.
#[must_use]
pub fn is_author(actor: &Actor, task: &Task) -> bool {
    actor.login() == task.author_login()
}

/// Returns `true` when the actor is one of the task checkers.
#[must_use]
pub fn is_checker(actor: &Actor, task: &Task) -> bool {
    listed(actor.login(), task.checkers())
}

/// Returns `true` when the actor is one of the task's escalation managers.
#[must_use]
pub fn is_escalation_manager(actor: &Actor, task: &Task) -> bool {
    listed(actor.login(), task.escalation_managers())
}

/// Returns `true` when the actor is the party responsible for patches.
#[must_use]
pub fn is_responsible(actor: &Actor, task: &Task) -> bool {
    task.responsible() == Some(actor.login())
}

/// Returns `true` when the actor holds `role`.
#[must_use]
pub fn has_role(actor: &Actor, role: &Role) -> bool {
    actor.has_any_role([role])
}

/// Returns `true` when the actor may act on the task at all: they can write
/// it, perform it, or manage its escalation.
#[must_use]
pub fn can_act(actor: &Actor, task: &Task) -> bool {
    actor.can_write(task) || is_performer(actor, task) || is_escalation_manager(actor, task)
}
