//! 统一错误处理模块
//!
//! 定义系统中所有错误类型，提供统一的错误处理机制

use thiserror::Error;

/// 应用程序统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 认证相关错误
    #[error("认证错误: {0}")]
    Authentication(#[from] crate::auth::AuthError),

    /// 序列化错误
    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
