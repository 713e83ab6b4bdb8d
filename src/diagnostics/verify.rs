//! 哈希验证循环
//!
//! 逐一用候选密码校验快照中的每条哈希

use tracing::{debug, warn};

use crate::auth::password;
use crate::diagnostics::report::{CandidateResult, HashCheck};

/// 校验已知哈希与候选密码的所有组合
///
/// 单条验证出错只记录在对应结果中，不中断其余组合的校验
pub fn check_known_hashes(hashes: &[(&str, &str)], candidates: &[&str]) -> Vec<HashCheck> {
    hashes
        .iter()
        .map(|(label, hash)| check_one_hash(label, hash, candidates))
        .collect()
}

fn check_one_hash(label: &str, hash: &str, candidates: &[&str]) -> HashCheck {
    // 哈希结构信息仅用于展示，解析失败不影响验证
    let info = match password::inspect_hash(hash) {
        Ok(info) => Some(info),
        Err(e) => {
            warn!("⚠️ 哈希结构解析失败: {} - {}", label, e);
            None
        }
    };

    let results = candidates
        .iter()
        .map(|candidate| {
            match password::verify_password(candidate, hash) {
                Ok(matched) => {
                    debug!("验证密码 - 密码: {}, 匹配: {}", candidate, matched);
                    CandidateResult {
                        password: candidate.to_string(),
                        matched,
                        error: None,
                    }
                }
                Err(e) => {
                    warn!("⚠️ 验证出错: {} / {} - {}", label, candidate, e);
                    CandidateResult {
                        password: candidate.to_string(),
                        matched: false,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    HashCheck {
        label: label.to_string(),
        hash: hash.to_string(),
        version: info.as_ref().map(|i| i.version.clone()),
        cost: info.map(|i| i.cost),
        results,
    }
}
