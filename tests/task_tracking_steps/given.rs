//! Given steps for task tracking BDD scenarios.

use super::world::{TaskTrackingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::task::services::CreateTaskRequest;

#[given(r#"a status named "{name}""#)]
fn status_named(world: &mut TaskTrackingWorld, name: String) -> Result<(), eyre::Report> {
    let status = run_async(world.statuses.create(name)).wrap_err("create scenario status")?;
    world.last_status = Some(status.id());
    Ok(())
}

#[given("no status exists")]
fn no_status_exists(world: &TaskTrackingWorld) -> Result<(), eyre::Report> {
    let statuses = run_async(world.statuses.list_all()).wrap_err("list statuses")?;
    eyre::ensure!(statuses.is_empty(), "expected an empty status catalogue");
    Ok(())
}

#[given(r#"a task "{name}" with text "{text}" exists on that status"#)]
fn task_exists(
    world: &mut TaskTrackingWorld,
    name: String,
    text: String,
) -> Result<(), eyre::Report> {
    let status_id = world.current_status()?;
    let task = run_async(
        world
            .tasks
            .create(CreateTaskRequest::new(name, text, status_id)),
    )
    .wrap_err("create scenario task")?;
    world.last_task = Some(task.id());
    Ok(())
}
