//! 共享模块
//!
//! 错误处理、常量定义与工具函数

pub mod constants;
pub mod error;
pub mod utils;

pub use error::{AppError, AppResult};
