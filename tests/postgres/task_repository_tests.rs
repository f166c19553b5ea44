//! CRUD tests for `PostgresTaskRepository`.

use crate::postgres::helpers::pool;
use rstest::rstest;
use tasktrack::status::{
    adapters::postgres::PostgresStatusRepository,
    domain::{StatusId, StatusName},
    ports::StatusRepository,
};
use tasktrack::storage::PgPool;
use tasktrack::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{Task, TaskId, TaskName, TaskText},
    ports::{TaskRepository, TaskRepositoryError},
};

async fn seed_status(db: &PgPool, raw: &str) -> StatusId {
    PostgresStatusRepository::new(db.clone())
        .insert(&StatusName::new(raw).expect("valid status name"))
        .await
        .expect("status insert")
        .id()
}

fn task(status_id: StatusId) -> Task {
    Task::new(
        TaskName::new("Report").expect("valid name"),
        TaskText::new("Q3 numbers").expect("valid text"),
        status_id,
    )
}

#[rstest]
#[ignore = "needs PostgreSQL: set TASKTRACK_TEST_DATABASE_URL or allow an embedded cluster download"]
#[tokio::test(flavor = "multi_thread")]
async fn insert_find_update_delete(#[from(pool)] db: PgPool) {
    let status_id = seed_status(&db, "Todo").await;
    let other_status = seed_status(&db, "Done").await;
    let repo = PostgresTaskRepository::new(db);

    let mut created = task(status_id);
    repo.insert(&created).await.expect("insert");
    let found = repo
        .find_by_id(created.id())
        .await
        .expect("lookup")
        .expect("task should exist");
    assert_eq!(found, created);

    created.rewrite(TaskText::new("Annual numbers").expect("valid text"));
    created.move_to_status(other_status);
    repo.update(&created).await.expect("update");
    let updated = repo
        .find_by_id(created.id())
        .await
        .expect("lookup")
        .expect("task should exist");
    assert_eq!(updated, created);

    let listed = repo.list().await.expect("list");
    assert!(listed.iter().any(|row| row.id() == created.id()));

    repo.delete(created.id()).await.expect("delete");
    assert!(repo.find_by_id(created.id()).await.expect("lookup").is_none());
}

#[rstest]
#[ignore = "needs PostgreSQL: set TASKTRACK_TEST_DATABASE_URL or allow an embedded cluster download"]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_identifier_is_rejected(#[from(pool)] db: PgPool) {
    let status_id = seed_status(&db, "Todo").await;
    let repo = PostgresTaskRepository::new(db);

    let created = task(status_id);
    repo.insert(&created).await.expect("first insert");

    assert!(matches!(
        repo.insert(&created).await,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == created.id()
    ));
}

#[rstest]
#[ignore = "needs PostgreSQL: set TASKTRACK_TEST_DATABASE_URL or allow an embedded cluster download"]
#[tokio::test(flavor = "multi_thread")]
async fn dangling_status_reference_is_stored(#[from(pool)] db: PgPool) {
    let repo = PostgresTaskRepository::new(db);

    let orphan = task(StatusId::new(-42));
    repo.insert(&orphan).await.expect("insert without live status");

    let found = repo
        .find_by_id(orphan.id())
        .await
        .expect("lookup")
        .expect("task should exist");
    assert_eq!(found.status_id(), StatusId::new(-42));
}

#[rstest]
#[ignore = "needs PostgreSQL: set TASKTRACK_TEST_DATABASE_URL or allow an embedded cluster download"]
#[tokio::test(flavor = "multi_thread")]
async fn referenced_status_can_be_deleted(#[from(pool)] db: PgPool) {
    let status_id = seed_status(&db, "Doomed").await;
    let statuses = PostgresStatusRepository::new(db.clone());
    let repo = PostgresTaskRepository::new(db);
    let referencing = task(status_id);
    repo.insert(&referencing).await.expect("insert");

    statuses
        .delete(status_id)
        .await
        .expect("delete should not be blocked by referencing tasks");

    let found = repo
        .find_by_id(referencing.id())
        .await
        .expect("lookup")
        .expect("task should survive its status");
    assert_eq!(found.status_id(), status_id);
}

#[rstest]
#[ignore = "needs PostgreSQL: set TASKTRACK_TEST_DATABASE_URL or allow an embedded cluster download"]
#[tokio::test(flavor = "multi_thread")]
async fn missing_task_is_not_found(#[from(pool)] db: PgPool) {
    let repo = PostgresTaskRepository::new(db);
    let missing = TaskId::new();

    assert!(repo.find_by_id(missing).await.expect("lookup").is_none());
    assert!(matches!(
        repo.delete(missing).await,
        Err(TaskRepositoryError::NotFound(id)) if id == missing
    ));
    assert!(matches!(
        repo.update(&task(StatusId::new(1))).await,
        Err(TaskRepositoryError::NotFound(_))
    ));
}
