// task-analytics/src/utils/validation.rs

use crate::error::AppError;
use uuid::Uuid;

pub const INVALID_USER_ID_MESSAGE: &str = "Invalid user ID format";

/// パス上のユーザーIDがストアの識別子（UUID）として正しい形式か検証する
pub fn validate_user_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::try_parse(raw)
        .map_err(|_| AppError::InvalidIdentifier(INVALID_USER_ID_MESSAGE.to_string()))
}
