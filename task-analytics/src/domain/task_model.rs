// src/domain/task_model.rs
use super::task_priority::TaskPriority;
use super::task_status::TaskStatus;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// tasks テーブル（外部所有、このサービスからは読み取り専用）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub status: String,
    pub priority: String,
    #[sea_orm(nullable)]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 既知のラベルでなければ None
    pub fn task_status(&self) -> Option<TaskStatus> {
        TaskStatus::from_label(&self.status)
    }

    pub fn task_priority(&self) -> Option<TaskPriority> {
        TaskPriority::from_label(&self.priority)
    }

    pub fn is_completed(&self) -> bool {
        self.task_status().is_some_and(|status| status.is_completed())
    }

    /// 未完了かつ期日が `now` より前
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_completed() && self.due_date.is_some_and(|due| due < now)
    }
}
