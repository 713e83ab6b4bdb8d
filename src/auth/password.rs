//! 密码处理模块
//!
//! 基于 bcrypt 的哈希、验证与哈希结构解析

use bcrypt::{hash_with_salt, verify, Version};
use rand::Rng;

use super::AuthError;
use crate::shared::constants::hashing;

/// bcrypt 哈希结构信息（版本前缀与成本因子）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashInfo {
    pub version: String,
    pub cost: u32,
}

/// 哈希密码（固定成本因子 10，随机盐）
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash_password_with_cost(password, hashing::GENERATE_COST)
}

/// 以指定成本因子哈希密码
///
/// 盐为随机生成的16字节；输出格式化为 $2a$ 版本，与数据库中
/// Spring BCryptPasswordEncoder 生成的哈希保持一致
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AuthError> {
    let salt: [u8; 16] = rand::thread_rng().gen();

    hash_with_salt(password, cost, salt)
        .map(|parts| parts.format_for_version(Version::TwoA))
        .map_err(|e| AuthError::HashFailed(format!("{}", e)))
}

/// 验证密码
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    verify(password, hash).map_err(|e| AuthError::VerifyFailed(format!("{}", e)))
}

/// 解析 bcrypt 哈希的版本与成本
///
/// 标准编码为 `$2a$<成本>$<22位盐><31位摘要>`，仅用于诊断展示，
/// 实际验证始终交给 bcrypt 库本身
pub fn inspect_hash(hash: &str) -> Result<HashInfo, AuthError> {
    let fields: Vec<&str> = hash.split('$').collect();

    // 以 '$' 开头的四段结构，首段必须为空
    if fields.len() != 4 || !fields[0].is_empty() {
        return Err(AuthError::InvalidHashFormat(format!(
            "字段结构不正确: {}",
            hash
        )));
    }

    let version = fields[1];
    if !matches!(version, "2a" | "2b" | "2x" | "2y") {
        return Err(AuthError::InvalidHashFormat(format!(
            "未知的版本前缀: {}",
            version
        )));
    }

    let cost: u32 = fields[2].parse().map_err(|_| {
        AuthError::InvalidHashFormat(format!("成本因子不是数字: {}", fields[2]))
    })?;

    // 22位盐 + 31位摘要
    if fields[3].len() != 53 {
        return Err(AuthError::InvalidHashFormat(format!(
            "盐与摘要长度不正确: {}",
            fields[3].len()
        )));
    }

    Ok(HashInfo {
        version: version.to_string(),
        cost,
    })
}

/// bcrypt 能力自检
///
/// 启动时以最小成本做一次哈希+验证往返，确认 bcrypt 原语可用；
/// 失败时调用方应以非零状态退出
pub fn self_check() -> Result<(), AuthError> {
    const PROBE: &str = "bcrypt-self-check";

    let hash = hash_password_with_cost(PROBE, hashing::SELF_CHECK_COST)?;
    match verify_password(PROBE, &hash) {
        Ok(true) => Ok(()),
        Ok(false) => Err(AuthError::HashFailed(
            "自检哈希无法通过验证".to_string(),
        )),
        Err(e) => Err(e),
    }
}
