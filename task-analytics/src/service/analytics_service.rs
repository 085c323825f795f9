// src/service/analytics_service.rs

use crate::api::dto::analytics_dto::{ProductivityAnalysisResponse, UserStatisticsResponse};
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::task_repository::TaskRepository;
use crate::service::productivity_analyzer::{analyze_productivity, ProductivityWindow};
use crate::service::statistics_aggregator::aggregate_statistics;
use crate::utils::validation::validate_user_id;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

const USER_STATS_CONTEXT: &str = "Error fetching user statistics";
const PRODUCTIVITY_CONTEXT: &str = "Error fetching productivity analysis";

/// ユーザー単位のタスク分析。取得はリポジトリに委譲し、集計はプロセス内で行う
pub struct AnalyticsService {
    repo: Arc<TaskRepository>,
}

impl AnalyticsService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(TaskRepository::new(db_pool)),
        }
    }

    pub async fn get_user_statistics(&self, user_id: &str) -> AppResult<UserStatisticsResponse> {
        let owner = validate_user_id(user_id)?;

        let tasks = self
            .repo
            .find_all_for_user(owner)
            .await
            .map_err(|e| AppError::unhandled(USER_STATS_CONTEXT, e))?;

        let tally = aggregate_statistics(&tasks);
        if tally.unrecognized_statuses > 0 || tally.unrecognized_priorities > 0 {
            warn!(
                user_id = %owner,
                unrecognized_statuses = tally.unrecognized_statuses,
                unrecognized_priorities = tally.unrecognized_priorities,
                "Tasks with unrecognized labels were left out of the distributions"
            );
        }

        info!(
            user_id = %owner,
            total_tasks = tally.statistics.total_tasks,
            completion_rate = tally.statistics.completion_rate,
            "User statistics computed"
        );

        Ok(UserStatisticsResponse {
            user_id: user_id.to_string(),
            statistics: tally.statistics,
        })
    }

    pub async fn get_productivity_analysis(
        &self,
        user_id: &str,
        days: i64,
    ) -> AppResult<ProductivityAnalysisResponse> {
        let owner = validate_user_id(user_id)?;

        let window = ProductivityWindow::ending_at(days, Utc::now()).ok_or_else(|| {
            AppError::unhandled(
                PRODUCTIVITY_CONTEXT,
                format!("days={} is out of the representable date range", days),
            )
        })?;
        debug!(
            user_id = %owner,
            start = %window.start,
            end = %window.end,
            "Fetching tasks for productivity window"
        );

        let tasks = self
            .repo
            .find_for_user_created_between(owner, window.start, window.end)
            .await
            .map_err(|e| AppError::unhandled(PRODUCTIVITY_CONTEXT, e))?;

        let metrics = analyze_productivity(&tasks, &window);

        info!(
            user_id = %owner,
            days = days,
            created = metrics.total_tasks_created,
            completed = metrics.total_tasks_completed,
            overdue = metrics.overdue_tasks,
            "Productivity analysis computed"
        );

        Ok(ProductivityAnalysisResponse {
            user_id: user_id.to_string(),
            metrics,
        })
    }
}
