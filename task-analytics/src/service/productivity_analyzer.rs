// task-analytics/src/service/productivity_analyzer.rs

//! 期間内のタスクから生産性指標を算出する
//!
//! 日付の集計キーは UTC の `YYYY-MM-DD`。完了日時はストアに無いため、
//! 完了タスクの作成日で日次トレンドを集計する。

use super::statistics_aggregator::{percentage, round_to_two_decimals};
use crate::api::dto::analytics_dto::{DailyCompletion, ProductivityMetrics};
use crate::domain::task_model;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

pub const TREND_DATE_FORMAT: &str = "%Y-%m-%d";

/// `[end - days, end]` の分析期間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductivityWindow {
    pub days: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ProductivityWindow {
    /// `now` で終わる `days` 日間。開始時刻が表現できない場合は None
    pub fn ending_at(days: i64, now: DateTime<Utc>) -> Option<Self> {
        let span = Duration::try_days(days)?;
        let start = now.checked_sub_signed(span)?;
        Some(Self {
            days,
            start,
            end: now,
        })
    }
}

/// 1日あたりの平均（小数第2位で丸め）。期間が0以下なら0
fn per_day(count: u64, days: i64) -> f64 {
    if days > 0 {
        round_to_two_decimals(count as f64 / days as f64)
    } else {
        0.0
    }
}

/// `tasks` は期間で絞り込み済みであること。期限切れ判定の基準時刻は `window.end`
pub fn analyze_productivity(
    tasks: &[task_model::Model],
    window: &ProductivityWindow,
) -> ProductivityMetrics {
    let completed: Vec<&task_model::Model> = tasks.iter().filter(|t| t.is_completed()).collect();

    let mut daily_completions: BTreeMap<String, u64> = BTreeMap::new();
    for task in &completed {
        let date_key = task.created_at.format(TREND_DATE_FORMAT).to_string();
        *daily_completions.entry(date_key).or_insert(0) += 1;
    }

    let total_tasks_created = tasks.len() as u64;
    let total_tasks_completed = completed.len() as u64;
    let overdue_tasks = tasks
        .iter()
        .filter(|t| t.is_overdue_at(window.end))
        .count() as u64;

    ProductivityMetrics {
        period_days: window.days,
        start_date: window.start,
        end_date: window.end,
        total_tasks_created,
        total_tasks_completed,
        overdue_tasks,
        avg_tasks_per_day: per_day(total_tasks_created, window.days),
        avg_completions_per_day: per_day(total_tasks_completed, window.days),
        daily_completion_trend: daily_completions
            .into_iter()
            .map(|(date, count)| DailyCompletion { date, count })
            .collect(),
        productivity_score: percentage(total_tasks_completed, total_tasks_created),
    }
}
