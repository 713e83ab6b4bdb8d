//! BCrypt 密码验证工具主入口
//!
//! 验证数据库中的密码哈希对应哪个明文密码，并演示生成新的密码哈希

use std::env;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use password_verify_rust::auth::password;
use password_verify_rust::diagnostics;

fn main() -> anyhow::Result<()> {
    // 初始化日志 - 默认INFO等级，报告本身走标准输出
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "password_verify_rust=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 加载环境变量
    dotenv::dotenv().ok();

    info!("🚀 启动 BCrypt 密码验证工具");

    // bcrypt 能力自检，失败则以非零状态退出
    password::self_check()?;
    info!("✅ bcrypt 自检通过");

    // 执行完整诊断并输出报告
    let report = diagnostics::run_full_diagnostic()?;
    report.print();

    // 可选的 JSON 导出
    let report_json = env::var("REPORT_JSON")
        .unwrap_or_else(|_| "false".to_string())
        .parse()
        .unwrap_or(false);
    if report_json {
        println!("{}", report.to_json()?);
    }

    info!("🎉 密码验证完成");

    Ok(())
}
