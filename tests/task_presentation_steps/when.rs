//! When steps for task presentation BDD scenarios.

use super::world::{PresentationWorld, run_async};
use rstest_bdd_macros::when;
use tasklens::task::{
    domain::{Actor, UserLogin},
    ports::ActionRequest,
};

#[when(r#""{viewer}" views the task in {year:i32}"#)]
fn views_the_task(
    world: &mut PresentationWorld,
    viewer: String,
    year: i32,
) -> Result<(), eyre::Report> {
    let login = UserLogin::new(viewer)?;
    let actor = Actor::new(login.clone());
    let presenter = world.presenter(login.clone(), year);
    let presentation = presenter.present(world.task()?, &world.history, &actor);
    world.viewer = Some(login);
    world.presentation = Some(presentation);
    Ok(())
}

#[when("the viewer cancels the task")]
fn viewer_cancels(world: &mut PresentationWorld) -> Result<(), eyre::Report> {
    let availability = world.presentation()?.availability;
    let task = world.task()?.clone();
    let result = run_async(
        world
            .dispatcher
            .submit(&task, &availability, &ActionRequest::Cancel),
    );
    world.submission = Some(result);
    Ok(())
}
