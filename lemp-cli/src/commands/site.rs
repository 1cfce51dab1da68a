use crate::app::CliApp;
use stack_core::hosts::HostRegistry;
use stack_core::runner::CommandRunner;
use stack_core::{Result, SiteName};
use tracing::info;

/// 创建站点
pub async fn create_site<R: CommandRunner, H: HostRegistry>(
    app: &CliApp<R, H>,
    site: &SiteName,
) -> Result<()> {
    info!("📁 工作目录: {}", app.stack_manager.work_dir().display());
    app.stack_manager.create(site).await?;
    info!("👉 在浏览器中访问: http://{}", site.domain());
    Ok(())
}

/// 启用站点
pub async fn enable_site<R: CommandRunner, H: HostRegistry>(
    app: &CliApp<R, H>,
    site: &SiteName,
) -> Result<()> {
    app.stack_manager.enable(site).await
}

/// 停用站点
pub async fn disable_site<R: CommandRunner, H: HostRegistry>(
    app: &CliApp<R, H>,
    site: &SiteName,
) -> Result<()> {
    app.stack_manager.disable(site).await?;
    info!("💡 运行 'lemp-cli enable {}' 可重新启动", site);
    Ok(())
}

/// 删除站点
pub async fn delete_site<R: CommandRunner, H: HostRegistry>(
    app: &CliApp<R, H>,
    site: &SiteName,
) -> Result<()> {
    app.stack_manager.delete(site).await
}
