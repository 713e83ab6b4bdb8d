//! 哈希生成循环
//!
//! 为每个候选密码生成带随机盐的新哈希，并立即回验

use tracing::{info, warn};

use crate::auth::password;
use crate::diagnostics::report::GeneratedHash;
use crate::shared::error::AppResult;
use crate::shared::utils::validation;

/// 为候选密码批量生成新哈希
///
/// 回验失败的哈希会记录为未通过；哈希原语本身出错则向上传播
pub fn generate_candidates(candidates: &[&str], cost: u32) -> AppResult<Vec<GeneratedHash>> {
    candidates
        .iter()
        .map(|candidate| generate_one(candidate, cost))
        .collect()
}

fn generate_one(candidate: &str, cost: u32) -> AppResult<GeneratedHash> {
    let hash = password::hash_password_with_cost(candidate, cost)?;
    let verified = password::verify_password(candidate, &hash)?;

    info!("生成密码哈希 - 密码长度: {}, 哈希: {}", candidate.len(), hash);

    let strong = validation::is_strong_password(candidate);
    if !strong {
        warn!("⚠️ 候选密码强度不足: {}", candidate);
    }

    Ok(GeneratedHash {
        password: candidate.to_string(),
        hash,
        verified,
        strong,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_hashes_verify() {
        let generated = generate_candidates(&["password", "admin123", "123456"], 4).unwrap();

        assert_eq!(generated.len(), 3);
        for item in &generated {
            assert!(item.verified);
            assert!(item.hash.starts_with("$2a$04$"));
        }
    }

    #[test]
    fn test_generated_hashes_are_distinct() {
        let generated = generate_candidates(&["123456", "123456"], 4).unwrap();

        // 同一密码两次生成，随机盐保证哈希不同
        assert_ne!(generated[0].hash, generated[1].hash);
    }

    #[test]
    fn test_strength_annotation() {
        let generated = generate_candidates(&["password", "admin123", "123456"], 4).unwrap();

        assert!(!generated[0].strong);
        assert!(generated[1].strong);
        assert!(!generated[2].strong);
    }
}
