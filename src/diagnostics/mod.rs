//! 诊断模块
//!
//! 对数据库密码哈希快照做批量验证，并演示生成新的密码哈希

pub mod generate;
pub mod report;
pub mod verify;

// 重新导出常用类型
pub use report::{CandidateResult, DiagnosticReport, GeneratedHash, HashCheck};

use crate::shared::constants::{hashing, snapshot};
use crate::shared::error::AppResult;

/// 执行完整诊断：先校验快照哈希，再生成并回验新哈希
pub fn run_full_diagnostic() -> AppResult<DiagnosticReport> {
    let checks = verify::check_known_hashes(snapshot::KNOWN_HASHES, snapshot::CANDIDATE_PASSWORDS);
    let generated =
        generate::generate_candidates(snapshot::CANDIDATE_PASSWORDS, hashing::GENERATE_COST)?;

    Ok(DiagnosticReport::new(checks, generated))
}
