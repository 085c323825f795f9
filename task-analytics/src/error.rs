// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// 分析APIのエラーは 2 種類のみ
#[derive(Error, Debug)]
pub enum AppError {
    /// クライアント起因（識別子の形式不正）。取得処理の前に拒否する
    #[error("{0}")]
    InvalidIdentifier(String),

    /// それ以外の全て（ストア到達不可、想定外のレコード形状など）
    #[error("{0}")]
    UnhandledFailure(String),
}

impl AppError {
    /// 元のエラーに文脈の接頭辞を付けて UnhandledFailure にする
    pub fn unhandled(context: &str, err: impl std::fmt::Display) -> Self {
        AppError::UnhandledFailure(format!("{}: {}", context, err))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            AppError::UnhandledFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::UnhandledFailure(err.to_string())
    }
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error, error_type) = match &self {
            AppError::InvalidIdentifier(_) => ("Invalid identifier", "invalid_identifier"),
            AppError::UnhandledFailure(_) => ("Internal server error", "internal_server_error"),
        };
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        } else {
            tracing::warn!(error = %message, "Request rejected");
        }

        let body = ErrorResponse {
            success: false,
            error: error.to_string(),
            message: message.clone(),
            detail: message,
            error_type: error_type.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    /// 旧クライアント互換のメッセージフィールド
    pub detail: String,
    pub error_type: String,
}
