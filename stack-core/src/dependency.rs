use crate::constants::dependencies::{REQUIRED_PACKAGES, VERSION_FLAG};
use crate::error::{Result, StackError};
use crate::runner::{CommandLine, CommandRunner, Privilege};
use tracing::{debug, info, warn};

/// 检查命令是否可用：`<command> --version` 成功退出即视为已安装
///
/// 启动失败（命令不存在）和非零退出都视为未安装。
pub async fn is_installed<R: CommandRunner>(runner: &R, command: &str) -> bool {
    let cmd = CommandLine::new(command, [VERSION_FLAG]);
    match runner.run(&cmd).await {
        Ok(output) => output.success(),
        Err(e) => {
            debug!("检测 {} 失败: {}", command, e);
            false
        }
    }
}

/// 返回所有未安装的必需软件包名，保持声明顺序
pub async fn missing_packages<R: CommandRunner>(runner: &R) -> Vec<&'static str> {
    let mut missing = Vec::new();
    for (package, command) in REQUIRED_PACKAGES {
        if !is_installed(runner, command).await {
            missing.push(*package);
        }
    }
    missing
}

/// 通过包管理器非交互安装软件包
pub async fn install_package<R: CommandRunner>(
    runner: &R,
    privilege: &Privilege,
    package_manager: &str,
    package: &str,
) -> Result<()> {
    let cmd = privilege.wrap(CommandLine::new(
        package_manager,
        ["install", "-y", package],
    ));
    info!("   📦 安装 {}: {}", package, cmd);

    let output = runner
        .run(&cmd)
        .await
        .map_err(|e| StackError::dependency_install(package, e.to_string()))?;
    output
        .ensure_success(&cmd)
        .map_err(|e| StackError::dependency_install(package, e.to_string()))?;

    Ok(())
}

/// 检查并安装缺失的依赖，任何一个安装失败都直接返回错误
pub async fn ensure_dependencies<R: CommandRunner>(
    runner: &R,
    privilege: &Privilege,
    package_manager: &str,
) -> Result<()> {
    let missing = missing_packages(runner).await;
    if missing.is_empty() {
        debug!("所有依赖均已安装");
        return Ok(());
    }

    warn!("⚠️  缺少依赖: {}", missing.join(", "));
    info!("📥 正在安装缺失的软件包...");
    for package in missing {
        install_package(runner, privilege, package_manager, package).await?;
    }
    info!("✅ 安装完成");

    Ok(())
}
