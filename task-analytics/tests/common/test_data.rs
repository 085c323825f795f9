// tests/common/test_data.rs

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use task_analytics::domain::task_model;
use uuid::Uuid;

/// テスト用タスクの定義
#[derive(Debug, Clone)]
pub struct TaskSeed {
    pub status: &'static str,
    pub priority: &'static str,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskSeed {
    pub fn new(status: &'static str, priority: &'static str) -> Self {
        Self {
            status,
            priority,
            created_at: Utc::now(),
            due_date: None,
        }
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn due(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// ストアにタスクを直接書き込む（サービス自体は書き込みを持たない）
pub async fn insert_task(
    db: &DatabaseConnection,
    user_id: Uuid,
    seed: &TaskSeed,
) -> task_model::Model {
    task_model::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        title: Set(format!("{} task", seed.status)),
        status: Set(seed.status.to_string()),
        priority: Set(seed.priority.to_string()),
        due_date: Set(seed.due_date),
        created_at: Set(seed.created_at),
        updated_at: Set(seed.created_at),
    }
    .insert(db)
    .await
    .expect("Failed to insert task")
}

pub async fn insert_tasks(db: &DatabaseConnection, user_id: Uuid, seeds: &[TaskSeed]) {
    for seed in seeds {
        insert_task(db, user_id, seed).await;
    }
}

/// 4 Completed / 3 In Progress / 3 Todo、Low 5 / Medium 3 / High 2 の10件
pub fn ten_task_fixture() -> Vec<TaskSeed> {
    vec![
        TaskSeed::new("Completed", "Low"),
        TaskSeed::new("Completed", "Low"),
        TaskSeed::new("Completed", "Low"),
        TaskSeed::new("Completed", "High"),
        TaskSeed::new("In Progress", "Low"),
        TaskSeed::new("In Progress", "Low"),
        TaskSeed::new("In Progress", "Medium"),
        TaskSeed::new("Todo", "Medium"),
        TaskSeed::new("Todo", "Medium"),
        TaskSeed::new("Todo", "High"),
    ]
}
