use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// 应用错误枚举
///
/// # 错误分类
///
/// | 分类 | 状态码 | 说明 |
/// |------|--------|------|
/// | Validation | 400 | 表单字段缺失或无效，未发生写入 |
/// | NotFound | 404 | 资源不存在 |
/// | Storage | 500 | Record Store 读写失败 |
/// | Internal | 500 | 其他内部错误 |
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::Storage(err) => {
                // 记录内部错误但不暴露详细信息
                tracing::error!(error = %err, "Record store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage_error",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
