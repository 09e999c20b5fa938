//! Then steps for task presentation BDD scenarios.

use super::world::PresentationWorld;
use rstest_bdd_macros::then;
use tasklens::task::{
    domain::{Facet, LatchSlot, TaskAction},
    ports::TaskActionError,
};

fn action_named(name: &str) -> Result<TaskAction, eyre::Report> {
    TaskAction::ALL
        .into_iter()
        .find(|action| action.as_str() == name)
        .ok_or_else(|| eyre::eyre!("unknown action {name:?}"))
}

fn facet_active(world: &PresentationWorld, facet: Facet) -> Result<bool, eyre::Report> {
    Ok(world.presentation()?.facet(facet).is_active)
}

#[then(r#"the deadline facet is "{kind}" showing "{date}""#)]
fn deadline_facet_shows(
    world: &PresentationWorld,
    kind: String,
    date: String,
) -> Result<(), eyre::Report> {
    let deadline = &world.presentation()?.deadline;
    let rendered_kind = serde_json::to_value(deadline.kind)?;
    if rendered_kind.as_str() != Some(kind.as_str()) {
        return Err(eyre::eyre!("expected {kind} deadline, found {rendered_kind}"));
    }
    if deadline.content.primary_date.as_deref() != Some(date.as_str()) {
        return Err(eyre::eyre!(
            "expected deadline {date}, found {:?}",
            deadline.content.primary_date
        ));
    }
    Ok(())
}

#[then(r#"the "{action}" action is available"#)]
fn action_is_available(world: &PresentationWorld, action: String) -> Result<(), eyre::Report> {
    let action = action_named(&action)?;
    if !world.presentation()?.availability.is_available(action) {
        return Err(eyre::eyre!("expected {action} to be available"));
    }
    Ok(())
}

#[then(r#"the "{action}" action is not available"#)]
fn action_is_not_available(world: &PresentationWorld, action: String) -> Result<(), eyre::Report> {
    let action = action_named(&action)?;
    if world.presentation()?.availability.is_available(action) {
        return Err(eyre::eyre!("expected {action} to be unavailable"));
    }
    Ok(())
}

#[then(r#"the performer facet label is "{label}""#)]
fn performer_label(world: &PresentationWorld, label: String) -> Result<(), eyre::Report> {
    let performer = &world.presentation()?.performer;
    if performer.label != label {
        return Err(eyre::eyre!(
            "expected performer label {label:?}, found {:?}",
            performer.label
        ));
    }
    Ok(())
}

#[then(r#"the performer facet text contains "{fragment}""#)]
fn performer_text_contains(
    world: &PresentationWorld,
    fragment: String,
) -> Result<(), eyre::Report> {
    let text = world
        .presentation()?
        .performer
        .content
        .text
        .clone()
        .unwrap_or_default();
    if !text.contains(&fragment) {
        return Err(eyre::eyre!("performer text {text:?} lacks {fragment:?}"));
    }
    Ok(())
}

#[then(r#"the cancellation facet reads "{text}""#)]
fn cancellation_reads(world: &PresentationWorld, text: String) -> Result<(), eyre::Report> {
    let rendered = &world.presentation()?.cancellation.content.text;
    if rendered.as_deref() != Some(text.as_str()) {
        return Err(eyre::eyre!("expected cancellation {text:?}, found {rendered:?}"));
    }
    Ok(())
}

#[then("the cancellation facet is active")]
fn cancellation_is_active(world: &PresentationWorld) -> Result<(), eyre::Report> {
    if !facet_active(world, Facet::Cancellation)? {
        return Err(eyre::eyre!("expected the cancellation facet to be active"));
    }
    Ok(())
}

#[then("the deadline facet is not active")]
fn deadline_is_not_active(world: &PresentationWorld) -> Result<(), eyre::Report> {
    if facet_active(world, Facet::Deadline)? {
        return Err(eyre::eyre!("expected the deadline facet to be inactive"));
    }
    Ok(())
}

#[then("the performer facet is not active")]
fn performer_is_not_active(world: &PresentationWorld) -> Result<(), eyre::Report> {
    if facet_active(world, Facet::Performer)? {
        return Err(eyre::eyre!("expected the performer facet to be inactive"));
    }
    Ok(())
}

#[then(r#"the submission is rejected with "{reason}""#)]
fn submission_rejected(world: &PresentationWorld, reason: String) -> Result<(), eyre::Report> {
    match world.submission.as_ref() {
        Some(Err(TaskActionError::Rejected {
            reason: reported, ..
        })) if *reported == reason => Ok(()),
        other => Err(eyre::eyre!("expected rejection {reason:?}, found {other:?}")),
    }
}

#[then("no cancellation is pending")]
fn no_cancellation_pending(world: &PresentationWorld) -> Result<(), eyre::Report> {
    if world
        .dispatcher
        .is_pending(LatchSlot::Lifecycle(TaskAction::Cancel))
    {
        return Err(eyre::eyre!("cancellation latch was not released"));
    }
    Ok(())
}
