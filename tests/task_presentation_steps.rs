//! Behaviour tests for task presentation and action submission.

#[path = "task_presentation_steps/mod.rs"]
mod task_presentation_steps;

use rstest_bdd_macros::scenario;
use task_presentation_steps::world::{PresentationWorld, world};

#[scenario(
    path = "tests/features/task_presentation.feature",
    name = "Requested date is shown until a deadline is committed"
)]
#[tokio::test(flavor = "multi_thread")]
async fn requested_date_is_shown(world: PresentationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_presentation.feature",
    name = "Requested date carries its year when viewed later"
)]
#[tokio::test(flavor = "multi_thread")]
async fn requested_date_carries_year(world: PresentationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_presentation.feature",
    name = "Performer change names the previous performer"
)]
#[tokio::test(flavor = "multi_thread")]
async fn performer_change_is_reported(world: PresentationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_presentation.feature",
    name = "Cancelled task freezes deadline and performer edits"
)]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_task_freezes_edits(world: PresentationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_presentation.feature",
    name = "Author may close a task the performer may not"
)]
#[tokio::test(flavor = "multi_thread")]
async fn close_depends_on_viewer(world: PresentationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_presentation.feature",
    name = "Refused submission can be retried"
)]
#[tokio::test(flavor = "multi_thread")]
async fn refused_submission_is_retryable(world: PresentationWorld) {
    let _ = world;
}
