//! Action availability and facet activity for one actor.
//!
//! Every predicate reads the task snapshot and the actor only; the history
//! log never influences which actions are offered.

use super::TaskPresentationConfig;
use crate::task::domain::{
    ActionAvailabilitySet, Actor, FacetVisibility, StateCode, Task,
    capability::{
        can_act, has_role, is_author, is_checker, is_escalation_manager, is_performer,
        is_responsible,
    },
};

/// Returns `true` when the first performer slot holds the suspended marker.
#[must_use]
pub fn is_suspended(task: &Task, config: &TaskPresentationConfig) -> bool {
    task.primary_performer()
        .is_some_and(|login| config.is_suspended_marker(login))
}

/// Returns `true` when a real performer is assigned.
#[must_use]
pub fn has_assigned_performer(task: &Task, config: &TaskPresentationConfig) -> bool {
    task.primary_performer()
        .is_some_and(|login| !config.is_suspended_marker(login))
}

/// May the actor change the committed deadline?
#[must_use]
pub fn deadline_is_active(task: &Task, actor: &Actor, config: &TaskPresentationConfig) -> bool {
    !task.state_code().freezes_edits()
        && (task.status().is_open() || is_suspended(task, config))
        && can_act(actor, task)
}

/// May the actor replace the performer?
#[must_use]
pub fn performer_is_active(task: &Task, actor: &Actor, config: &TaskPresentationConfig) -> bool {
    deadline_is_active(task, actor, config)
        && task.state_code() != StateCode::PATCH_REQUESTED
}

/// May the actor change the desired date? Only the author may.
#[must_use]
pub fn desired_date_is_active(task: &Task, actor: &Actor) -> bool {
    is_author(actor, task)
}

/// Is the cancellation notice live? Only for cancelled tasks.
#[must_use]
pub const fn cancellation_is_active(task: &Task) -> bool {
    task.state_code().is_cancelled()
}

struct Roles {
    performer: bool,
    author: bool,
    checker: bool,
    escalation_manager: bool,
    project_manager: bool,
}

impl Roles {
    fn of(task: &Task, actor: &Actor, config: &TaskPresentationConfig) -> Self {
        Self {
            performer: is_performer(actor, task),
            author: is_author(actor, task),
            checker: is_checker(actor, task),
            escalation_manager: is_escalation_manager(actor, task),
            project_manager: has_role(actor, &config.project_manager()),
        }
    }
}

/// Evaluates every action flag and facet visibility for the actor.
#[must_use]
pub fn evaluate_availability(
    task: &Task,
    actor: &Actor,
    config: &TaskPresentationConfig,
) -> ActionAvailabilitySet {
    let roles = Roles::of(task, actor, config);
    let open = task.status().is_open();
    let state = task.state_code();
    let cancelled = state.is_cancelled();
    let completed = task.completion_notified();
    let no_confirmed_deadline = task.deadline_confirmed().is_none();
    let programmer_section = actor.programmer_section().is_some();

    let take_to_work =
        no_confirmed_deadline && open && roles.performer && state != StateCode::SUSPENDED;

    let desired_date_visible = !cancelled
        && no_confirmed_deadline
        && (!roles.performer || task.deadline_requested().is_some());
    let deadline_visible = (!cancelled
        && ((roles.performer && !take_to_work) || (!roles.performer && !desired_date_visible)))
        || state == StateCode::UNDER_REVIEW;
    let visibility = FacetVisibility {
        deadline: deadline_visible,
        desired_date: desired_date_visible,
        performer: !cancelled,
        cancellation: cancelled,
    };

    ActionAvailabilitySet {
        take_to_work,
        set_deadline: deadline_visible && deadline_is_active(task, actor, config),
        request_desired_date: desired_date_visible && desired_date_is_active(task, actor),
        change_performer: visibility.performer && performer_is_active(task, actor, config),
        complete: open && roles.performer && !completed,
        request_patch: programmer_section
            && open
            && !completed
            && roles.performer
            && state != StateCode::PATCH_REQUESTED,
        apply_patch: programmer_section
            && open
            && state == StateCode::PATCH_REQUESTED
            && is_responsible(actor, task),
        close: open
            && (!roles.performer || roles.checker)
            && (roles.author || roles.checker || roles.project_manager || roles.escalation_manager),
        reject: has_assigned_performer(task, config)
            && (completed || task.completed_at().is_some() || cancelled)
            && (roles.performer
                || roles.author
                || roles.checker
                || roles.escalation_manager
                || roles.project_manager),
        send_to_check: open
            && completed
            && (roles.author || roles.checker || roles.escalation_manager),
        cancel: open
            && (roles.author || roles.checker || roles.project_manager || roles.escalation_manager),
        visibility,
    }
}
