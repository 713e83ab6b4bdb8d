//! 密码验证诊断集成测试

use password_verify_rust::auth::password;
use password_verify_rust::diagnostics;
use password_verify_rust::shared::constants::{hashing, snapshot};

#[test]
fn test_full_diagnostic_over_snapshot() {
    let report = diagnostics::run_full_diagnostic().expect("执行完整诊断失败");

    // 快照中的每条哈希都对每个候选密码做了验证
    assert_eq!(report.checks.len(), snapshot::KNOWN_HASHES.len());
    for check in &report.checks {
        assert_eq!(check.results.len(), snapshot::CANDIDATE_PASSWORDS.len());
        // 快照哈希都是格式良好的，不应出现验证错误
        for result in &check.results {
            assert!(result.error.is_none());
        }
        // 快照哈希均为 Spring 生成的 $2a$、成本10
        assert_eq!(check.version.as_deref(), Some("2a"));
        assert_eq!(check.cost, Some(10));
    }

    // 每个候选密码都生成了新哈希且回验通过
    assert_eq!(report.generated.len(), snapshot::CANDIDATE_PASSWORDS.len());
    for item in &report.generated {
        assert!(item.verified, "生成的哈希回验失败: {}", item.password);
        assert!(item.hash.starts_with("$2a$10$"));
    }

    // 报告可序列化为 JSON
    let json = report.to_json().expect("报告序列化失败");
    println!("报告 JSON 长度: {}", json.len());
    assert!(json.contains("\"checks\""));
    assert!(json.contains("\"generated\""));

    println!("🎉 密码验证诊断集成测试完成");
}

#[test]
fn test_snapshot_hashes_are_well_formed() {
    for (label, hash) in snapshot::KNOWN_HASHES {
        let info = password::inspect_hash(hash)
            .unwrap_or_else(|e| panic!("快照哈希结构不正确: {} - {}", label, e));
        assert_eq!(info.cost, hashing::GENERATE_COST);
    }
}

#[test]
fn test_generated_hash_matches_only_its_own_password() {
    // 端到端：candidate "password" 命中自己的哈希，不命中 "admin123" 的哈希
    let own = password::hash_password("password").expect("哈希生成失败");
    let other = password::hash_password("admin123").expect("哈希生成失败");

    assert!(password::verify_password("password", &own).unwrap());
    assert!(!password::verify_password("password", &other).unwrap());
}
