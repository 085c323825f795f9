// src/main.rs
use task_analytics::api::{create_app, AppState};
use task_analytics::config::AppConfig;
use task_analytics::db::{create_db_pool, schema_exists};
use task_analytics::logging::init_tracing;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    tracing::info!("Starting Task Analytics server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    if app_config.is_development() {
        tracing::info!("Configuration loaded: {:?}", app_config);
    }

    // データベース接続を作成（プロセス全体で1つを共有し、終了時に閉じる）
    let db_pool = create_db_pool(&app_config.database).await?;

    if let Some(schema) = &app_config.database.schema {
        if !schema_exists(&db_pool, schema).await? {
            tracing::warn!("Configured schema does not exist: {}", schema);
        } else {
            tracing::info!("Using schema: {}", schema);
        }
    }

    tracing::info!("Database pool created successfully.");

    let app_router = create_app(AppState::new(db_pool.clone(), &app_config));

    let server_addr = app_config.server_addr();
    let listener = TcpListener::bind(&server_addr).await?;
    tracing::info!("Router configured. Server listening on {}", server_addr);

    axum::serve(listener, app_router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped. Closing database connection...");
    db_pool.close().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
