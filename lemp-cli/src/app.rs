use anyhow::Context;
use stack_core::hosts::{HostRegistry, HostsFile};
use stack_core::runner::{CommandRunner, ProcessRunner};
use stack_core::{SiteName, StackManager, config::AppConfig, error::Result};
use std::path::Path;

use crate::cli::Commands;
use crate::commands;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct CliApp<R = ProcessRunner, H = HostsFile> {
    pub config: AppConfig,
    pub stack_manager: StackManager<R, H>,
}

impl CliApp {
    /// 加载配置并初始化 CLI 应用
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = AppConfig::load(config_path)?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: AppConfig) -> Self {
        let stack_manager = StackManager::from_config(&config);
        Self {
            config,
            stack_manager,
        }
    }
}

impl<R: CommandRunner, H: HostRegistry> CliApp<R, H> {
    /// 使用已构造好的管理器，可替换命令执行器和 hosts 注册表
    pub fn with_manager(config: AppConfig, stack_manager: StackManager<R, H>) -> Self {
        Self {
            config,
            stack_manager,
        }
    }

    /// 运行应用命令
    ///
    /// 站点名校验在依赖检查之前进行，校验失败时不会执行任何外部命令或写任何文件。
    pub async fn run(&self, command: Commands) -> anyhow::Result<()> {
        let site = SiteName::parse(command.site_name())?;
        debug!("子命令: {}, 站点: {}", command.name(), site);

        commands::ensure_dependencies(self)
            .await
            .context("依赖检查失败")?;

        let result = match &command {
            Commands::Create { .. } => {
                info!("🚀 创建站点 {}...", site.domain());
                commands::create_site(self, &site).await
            }
            Commands::Enable { .. } => {
                info!("▶️  启用站点 {}...", site.domain());
                commands::enable_site(self, &site).await
            }
            Commands::Disable { .. } => {
                info!("⏹️  停用站点 {}...", site.domain());
                commands::disable_site(self, &site).await
            }
            Commands::Delete { .. } => {
                info!("🗑️  删除站点 {}...", site.domain());
                commands::delete_site(self, &site).await
            }
        };

        result.with_context(|| format!("{} {} 失败", command.name(), site))
    }
}
