use crate::app::CliApp;
use stack_core::Result;
use stack_core::dependency;
use stack_core::hosts::HostRegistry;
use stack_core::runner::CommandRunner;
use tracing::debug;

/// 检查 docker / docker-compose，缺失时通过包管理器安装
pub async fn ensure_dependencies<R: CommandRunner, H: HostRegistry>(
    app: &CliApp<R, H>,
) -> Result<()> {
    debug!("🔍 检查依赖...");
    dependency::ensure_dependencies(
        app.stack_manager.runner(),
        app.stack_manager.privilege(),
        &app.config.commands.package_manager,
    )
    .await
}
