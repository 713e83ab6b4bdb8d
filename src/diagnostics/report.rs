//! 诊断报告模型与渲染
//!
//! 结构化结果可序列化为 JSON，同时渲染为人类可读的控制台报告

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::constants::{display, hashing};
use crate::shared::error::AppResult;

/// 单个候选密码的验证结果
#[derive(Debug, Clone, Serialize)]
pub struct CandidateResult {
    pub password: String,
    pub matched: bool,
    /// 验证过程出错时的错误描述
    pub error: Option<String>,
}

/// 一条快照哈希的全部验证结果
#[derive(Debug, Clone, Serialize)]
pub struct HashCheck {
    pub label: String,
    pub hash: String,
    /// 哈希版本前缀（结构解析失败时为空）
    pub version: Option<String>,
    /// 哈希成本因子（结构解析失败时为空）
    pub cost: Option<u32>,
    pub results: Vec<CandidateResult>,
}

/// 一条新生成的哈希及其回验结果
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedHash {
    pub password: String,
    pub hash: String,
    pub verified: bool,
    pub strong: bool,
}

/// 完整诊断报告
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub generated_at: DateTime<Utc>,
    pub checks: Vec<HashCheck>,
    pub generated: Vec<GeneratedHash>,
}

impl DiagnosticReport {
    pub fn new(checks: Vec<HashCheck>, generated: Vec<GeneratedHash>) -> Self {
        Self {
            generated_at: Utc::now(),
            checks,
            generated,
        }
    }

    /// 打印人类可读的诊断报告
    pub fn print(&self) {
        println!("{}", banner());
        println!("BCrypt 密码验证");
        println!("{}", banner());

        for check in &self.checks {
            println!();
            println!("{}:", check.label);
            println!("哈希: {}", check.hash);
            if let (Some(version), Some(cost)) = (&check.version, check.cost) {
                println!("结构: 版本 {}, 成本 {}", version, cost);
            }
            for result in &check.results {
                match &result.error {
                    Some(err) => println!("  ✗ {}: 验证失败 - {}", result.password, err),
                    None if result.matched => println!("  ✓ {}: 匹配", result.password),
                    None => println!("  ✗ {}: 不匹配", result.password),
                }
            }
        }

        println!();
        println!("{}", banner());
        println!("生成新的密码哈希 (strength={})", hashing::GENERATE_COST);
        println!("{}", banner());

        for item in &self.generated {
            println!();
            println!("密码: {}", item.password);
            println!("哈希: {}", item.hash);
            if item.verified {
                println!("验证: ✓ 通过");
            } else {
                println!("验证: ✗ 失败");
            }
        }

        println!();
        println!("{}", banner());
    }

    /// 序列化为 JSON 字符串
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn banner() -> String {
    "=".repeat(display::BANNER_WIDTH)
}
