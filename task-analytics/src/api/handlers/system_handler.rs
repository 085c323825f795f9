use axum::{routing::get, Json, Router};

use crate::api::dto::analytics_dto::ServiceStatusResponse;
use crate::api::AppState;

pub const SERVICE_NAME: &str = "Task Management Analytics API";

/// 稼働確認
pub async fn root_handler() -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse {
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

pub fn system_router() -> Router<AppState> {
    Router::new().route("/", get(root_handler))
}
