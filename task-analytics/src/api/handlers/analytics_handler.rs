// task-analytics/src/api/handlers/analytics_handler.rs

use crate::api::dto::analytics_dto::{
    ProductivityAnalysisResponse, ProductivityQuery, UserStatisticsResponse,
};
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use tracing::info;

// --- Handler Functions ---

/// ユーザーのタスク統計（件数・分布・完了率）
pub async fn get_user_statistics_handler(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<ApiResponse<UserStatisticsResponse>> {
    info!(user_id = %user_id, "User statistics requested");

    let statistics = app_state
        .analytics_service
        .get_user_statistics(&user_id)
        .await?;

    Ok(ApiResponse::success(statistics))
}

/// 生産性分析（日次完了トレンド・平均・期限切れ・スコア）
pub async fn get_productivity_analysis_handler(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ProductivityQuery>,
) -> AppResult<ApiResponse<ProductivityAnalysisResponse>> {
    let days = query.days.unwrap_or(app_state.config.default_period_days);
    info!(user_id = %user_id, days = days, "Productivity analysis requested");

    let analysis = app_state
        .analytics_service
        .get_productivity_analysis(&user_id, days)
        .await?;

    Ok(ApiResponse::success(analysis))
}

// --- Router Setup ---

pub fn analytics_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/analytics/user-stats/{user_id}",
            get(get_user_statistics_handler),
        )
        .route(
            "/api/analytics/productivity/{user_id}",
            get(get_productivity_analysis_handler),
        )
}
