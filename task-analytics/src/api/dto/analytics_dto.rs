// task-analytics/src/api/dto/analytics_dto.rs

use crate::domain::task_priority::TaskPriority;
use crate::domain::task_status::TaskStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Query Parameters ---

/// 生産性分析の期間パラメータ
#[derive(Debug, Default, Deserialize)]
pub struct ProductivityQuery {
    /// 省略時は設定値（既定30日）。0以下も受け付け、平均値は0になる
    pub days: Option<i64>,
}

// --- Distributions ---

/// 優先度ごとの件数。3つのキーは常に出力される
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityDistribution {
    #[serde(rename = "Low")]
    pub low: u64,
    #[serde(rename = "Medium")]
    pub medium: u64,
    #[serde(rename = "High")]
    pub high: u64,
}

impl PriorityDistribution {
    pub fn record(&mut self, priority: TaskPriority) {
        match priority {
            TaskPriority::Low => self.low += 1,
            TaskPriority::Medium => self.medium += 1,
            TaskPriority::High => self.high += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.low + self.medium + self.high
    }
}

/// ステータスごとの件数。3つのキーは常に出力される
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDistribution {
    #[serde(rename = "Todo")]
    pub todo: u64,
    #[serde(rename = "In Progress")]
    pub in_progress: u64,
    #[serde(rename = "Completed")]
    pub completed: u64,
}

impl StatusDistribution {
    pub fn record(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Todo => self.todo += 1,
            TaskStatus::InProgress => self.in_progress += 1,
            TaskStatus::Completed => self.completed += 1,
        }
    }

    pub fn get(&self, status: TaskStatus) -> u64 {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }
}

// --- Responses ---

/// ユーザーのタスク統計
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskStatistics {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    /// Todo の件数
    pub pending_tasks: u64,
    pub in_progress_tasks: u64,
    /// 完了率（%、小数第2位で丸め）。タスク0件なら0
    pub completion_rate: f64,
    pub priority_distribution: PriorityDistribution,
    pub status_distribution: StatusDistribution,
}

impl TaskStatistics {
    /// タスク0件のときの固定形
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatisticsResponse {
    pub user_id: String,
    #[serde(flatten)]
    pub statistics: TaskStatistics,
}

/// 日付ごとの完了件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCompletion {
    /// `YYYY-MM-DD`（UTC）
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityMetrics {
    pub period_days: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_tasks_created: u64,
    pub total_tasks_completed: u64,
    pub overdue_tasks: u64,
    pub avg_tasks_per_day: f64,
    pub avg_completions_per_day: f64,
    pub daily_completion_trend: Vec<DailyCompletion>,
    pub productivity_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityAnalysisResponse {
    pub user_id: String,
    #[serde(flatten)]
    pub metrics: ProductivityMetrics,
}

/// `GET /` の稼働確認レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatusResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}
