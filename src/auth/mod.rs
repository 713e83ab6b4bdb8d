//! 认证模块
//!
//! 提供 bcrypt 密码哈希与验证功能

pub mod password;

// 重新导出常用类型
pub use password::{hash_password, verify_password, HashInfo};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("密码哈希失败: {0}")]
    HashFailed(String),
    #[error("密码验证失败: {0}")]
    VerifyFailed(String),
    #[error("无效的哈希格式: {0}")]
    InvalidHashFormat(String),
}
