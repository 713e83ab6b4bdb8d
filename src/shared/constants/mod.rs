//! 常量定义模块

/// 数据库密码哈希快照
///
/// 来源于考试报名系统数据库：init.sql 种子数据以及后续更新的记录
pub mod snapshot {
    /// 标签 -> bcrypt 哈希，按声明顺序迭代
    pub const KNOWN_HASHES: &[(&str, &str)] = &[
        (
            "原始 admin 密码 (init.sql)",
            "$2a$10$N.zmdr9k7uOCQb376NoUnuTJ8iAt6Z5EHsM8lE9lBOsl7iKTVKIUi",
        ),
        (
            "当前 admin 密码 (已更新)",
            "$2a$10$YTR9b1V8emCUy8WkpT5.QuZLSqnGx3rToQ0p8KMmr0x1MmxAODQ8u",
        ),
        (
            "测试考生密码 (13800138000)",
            "$2a$10$EblZqNptyYvcLm/VwDCVAuBjzZOI7khzdyGPBr/w0wTRaI5p2S5K.",
        ),
    ];

    /// 要测试的明文候选密码
    pub const CANDIDATE_PASSWORDS: &[&str] = &["password", "admin123", "123456"];
}

/// 哈希相关常量
pub mod hashing {
    /// 生成新哈希的成本因子（与后端 BCryptPasswordEncoder strength 一致）
    pub const GENERATE_COST: u32 = 10;
    /// 启动自检使用的成本因子（bcrypt 允许的最小值）
    pub const SELF_CHECK_COST: u32 = 4;
}

/// 输出显示相关常量
pub mod display {
    pub const BANNER_WIDTH: usize = 80;
}
