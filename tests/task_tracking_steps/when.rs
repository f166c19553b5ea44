//! When steps for task tracking BDD scenarios.

use super::world::{TaskTrackingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasktrack::status::domain::StatusId;
use tasktrack::task::services::{CreateTaskRequest, UpdateTaskRequest};

fn create_task(world: &mut TaskTrackingWorld, name: String, text: String, status_id: StatusId) {
    let result = run_async(
        world
            .tasks
            .create(CreateTaskRequest::new(name, text, status_id)),
    );
    if let Ok(ref task) = result {
        world.last_task = Some(task.id());
    }
    world.last_result = Some(result.map(|_| ()));
}

#[when(r#"a task "{name}" with text "{text}" is created on that status"#)]
fn task_created_on_that_status(
    world: &mut TaskTrackingWorld,
    name: String,
    text: String,
) -> Result<(), eyre::Report> {
    let status_id = world.current_status()?;
    create_task(world, name, text, status_id);
    Ok(())
}

#[when(r#"a task "{name}" with text "{text}" is created on status {status_id:i32}"#)]
fn task_created_on_status(
    world: &mut TaskTrackingWorld,
    name: String,
    text: String,
    status_id: i32,
) {
    create_task(world, name, text, StatusId::new(status_id));
}

#[when("the task is moved to that status")]
fn task_moved(world: &mut TaskTrackingWorld) -> Result<(), eyre::Report> {
    let request =
        UpdateTaskRequest::new(world.current_task()?).with_status(world.current_status()?);
    run_async(world.tasks.update(request)).wrap_err("move scenario task")?;
    Ok(())
}

#[when("the task is updated with an empty name and status {status_id:i32}")]
fn task_updated_with_falsy_fields(
    world: &mut TaskTrackingWorld,
    status_id: i32,
) -> Result<(), eyre::Report> {
    let request = UpdateTaskRequest::new(world.current_task()?).with_fields(
        Some(String::new()),
        None,
        Some(StatusId::new(status_id)),
    );
    run_async(world.tasks.update(request)).wrap_err("update scenario task")?;
    Ok(())
}

#[when("the status is deleted")]
fn status_deleted(world: &mut TaskTrackingWorld) -> Result<(), eyre::Report> {
    let status_id = world.current_status()?;
    run_async(world.statuses.delete(status_id)).wrap_err("delete scenario status")?;
    Ok(())
}
