// task-analytics/src/api/mod.rs
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::logging::{inject_request_context, logging_middleware};
use crate::service::analytics_service::AnalyticsService;
use axum::{
    http::{HeaderValue, Method},
    middleware, Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod handlers;

/// アプリケーション状態（リクエスト間で共有するのは読み取り専用のサービスのみ）
#[derive(Clone)]
pub struct AppState {
    pub analytics_service: Arc<AnalyticsService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db_pool: DbPool, app_config: &AppConfig) -> Self {
        Self {
            analytics_service: Arc::new(AnalyticsService::new(db_pool)),
            config: Arc::new(app_config.clone()),
        }
    }
}

/// CORS設定。`*` なら全オリジン、それ以外は列挙されたオリジンのみ許可
pub fn cors_layer(app_config: &AppConfig) -> CorsLayer {
    let allow_origin = if app_config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = app_config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

/// 全ルーターとミドルウェアを組み立てる
pub fn create_app(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .merge(handlers::system_handler::system_router())
        .merge(handlers::analytics_handler::analytics_router())
        .with_state(app_state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
