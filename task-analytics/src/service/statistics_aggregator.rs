// task-analytics/src/service/statistics_aggregator.rs

//! タスク一覧をユーザー統計に集約する純粋関数群

use crate::api::dto::analytics_dto::{PriorityDistribution, StatusDistribution, TaskStatistics};
use crate::domain::task_model;
use crate::domain::task_status::TaskStatus;

/// 集約結果と、どのバケットにも入らなかった件数
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsTally {
    pub statistics: TaskStatistics,
    pub unrecognized_statuses: u64,
    pub unrecognized_priorities: u64,
}

/// `part / whole * 100` を小数第2位で丸める。`whole == 0` なら 0
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round_to_two_decimals(part as f64 / whole as f64 * 100.0)
    }
}

/// 小数第2位で丸める。ちょうど中間の値は偶数側に寄せる
pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn aggregate_statistics(tasks: &[task_model::Model]) -> StatisticsTally {
    if tasks.is_empty() {
        return StatisticsTally {
            statistics: TaskStatistics::empty(),
            unrecognized_statuses: 0,
            unrecognized_priorities: 0,
        };
    }

    let mut status_distribution = StatusDistribution::default();
    let mut priority_distribution = PriorityDistribution::default();
    let mut unrecognized_statuses = 0;
    let mut unrecognized_priorities = 0;

    for task in tasks {
        match task.task_status() {
            Some(status) => status_distribution.record(status),
            None => unrecognized_statuses += 1,
        }
        match task.task_priority() {
            Some(priority) => priority_distribution.record(priority),
            None => unrecognized_priorities += 1,
        }
    }

    let total_tasks = tasks.len() as u64;
    let completed_tasks = status_distribution.get(TaskStatus::Completed);

    StatisticsTally {
        statistics: TaskStatistics {
            total_tasks,
            completed_tasks,
            pending_tasks: status_distribution.get(TaskStatus::Todo),
            in_progress_tasks: status_distribution.get(TaskStatus::InProgress),
            completion_rate: percentage(completed_tasks, total_tasks),
            priority_distribution,
            status_distribution,
        },
        unrecognized_statuses,
        unrecognized_priorities,
    }
}
