// tests/integration/repository/task_repository_tests.rs

use chrono::{Duration, Utc};
use task_analytics::repository::task_repository::TaskRepository;
use uuid::Uuid;

use crate::common::{
    self,
    test_data::{insert_task, TaskSeed},
};

// リポジトリテスト用のセットアップヘルパー関数
async fn setup_test_repository() -> (common::db::TestDatabase, TaskRepository) {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;
    let repo = TaskRepository::new(db.connection.clone());
    (db, repo)
}

#[tokio::test]
async fn test_find_all_for_user_filters_by_owner() {
    let (db, repo) = setup_test_repository().await;
    let user_id = Uuid::new_v4();
    let other_user = Uuid::new_v4();

    insert_task(&db.connection, user_id, &TaskSeed::new("Todo", "Low")).await;
    insert_task(&db.connection, user_id, &TaskSeed::new("Completed", "High")).await;
    insert_task(&db.connection, other_user, &TaskSeed::new("Todo", "Low")).await;

    let tasks = repo.find_all_for_user(user_id).await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.user_id == user_id));
}

#[tokio::test]
async fn test_find_all_for_unknown_user_is_empty() {
    let (_db, repo) = setup_test_repository().await;

    let tasks = repo.find_all_for_user(Uuid::new_v4()).await.unwrap();

    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_find_created_between_is_inclusive_and_ordered() {
    let (db, repo) = setup_test_repository().await;
    let user_id = Uuid::new_v4();
    let end = Utc::now();
    let start = end - Duration::days(7);

    let at_start = insert_task(
        &db.connection,
        user_id,
        &TaskSeed::new("Todo", "Low").created_at(start),
    )
    .await;
    let inside = insert_task(
        &db.connection,
        user_id,
        &TaskSeed::new("Completed", "Low").created_at(end - Duration::days(1)),
    )
    .await;
    insert_task(
        &db.connection,
        user_id,
        &TaskSeed::new("Todo", "Low").created_at(start - Duration::seconds(1)),
    )
    .await;
    insert_task(
        &db.connection,
        user_id,
        &TaskSeed::new("Todo", "Low").created_at(end + Duration::hours(1)),
    )
    .await;
    insert_task(
        &db.connection,
        Uuid::new_v4(),
        &TaskSeed::new("Todo", "Low").created_at(end - Duration::days(1)),
    )
    .await;

    let tasks = repo
        .find_for_user_created_between(user_id, at_start.created_at, end)
        .await
        .unwrap();

    let ids: Vec<Uuid> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![at_start.id, inside.id]);
}
