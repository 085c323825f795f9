// tests/common/app_helper.rs

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
use serde_json::Value;
use task_analytics::{
    api::{create_app, AppState},
    config::AppConfig,
};
use tower::ServiceExt;

use crate::common;

/// Postgres コンテナ付きのアプリをセットアップ
pub async fn setup_app() -> (Router, common::db::TestDatabase) {
    common::init_test_env();

    let db = common::db::TestDatabase::new().await;
    let app_config = AppConfig::for_testing();
    let app = create_app(AppState::new(db.connection.clone(), &app_config));

    (app, db)
}

/// ストアを持たないアプリ。ストアに触れるリクエストは panic するため、
/// 取得前に完結するルートの検証にのみ使う
pub fn setup_app_without_store() -> Router {
    setup_app_with(DatabaseConnection::Disconnected, AppConfig::for_testing())
}

/// すべてのクエリが `DbErr` を返すストアを持つアプリ
pub fn setup_app_with_failing_store(failed_queries: usize) -> Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(
            (0..failed_queries)
                .map(|_| DbErr::Custom("connection refused".to_string()))
                .collect::<Vec<_>>(),
        )
        .into_connection();
    setup_app_with(db, AppConfig::for_testing())
}

pub fn setup_app_with(db: DatabaseConnection, app_config: AppConfig) -> Router {
    common::init_test_env();

    create_app(AppState::new(db, &app_config))
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// GETリクエストを送りステータスとJSONボディを返す
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(get_request(uri))
        .await
        .expect("Failed to execute request");

    let status = response.status();
    let body_bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, body)
}
