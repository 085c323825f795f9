// src/repository/task_repository.rs
use crate::db::DbPool;
use crate::domain::task_model::{self, Entity as TaskEntity};
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

/// tasks テーブルの読み取り専用リポジトリ
#[derive(Clone)]
pub struct TaskRepository {
    db: DbPool,
}

impl TaskRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// ユーザーの全タスク
    pub async fn find_all_for_user(&self, user_id: Uuid) -> Result<Vec<task_model::Model>, DbErr> {
        TaskEntity::find()
            .filter(task_model::Column::UserId.eq(user_id))
            .order_by_asc(task_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// 作成日時が `[start, end]`（両端含む）に入るユーザーのタスク
    pub async fn find_for_user_created_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<task_model::Model>, DbErr> {
        TaskEntity::find()
            .filter(task_model::Column::UserId.eq(user_id))
            .filter(task_model::Column::CreatedAt.gte(start))
            .filter(task_model::Column::CreatedAt.lte(end))
            .order_by_asc(task_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }
}
