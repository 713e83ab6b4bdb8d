//! BCrypt 密码验证工具
//!
//! 用于验证数据库中的密码哈希对应哪个明文密码，并演示生成新的密码哈希

// 核心模块
pub mod shared;       // 共享模块（错误处理、常量定义、工具函数）
pub mod auth;         // 认证模块（bcrypt 哈希与验证）
pub mod diagnostics;  // 诊断模块（验证报告、生成报告）

// 重新导出核心类型
pub use auth::AuthError;
pub use diagnostics::DiagnosticReport;
pub use shared::{AppError, AppResult};
