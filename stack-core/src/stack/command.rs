use super::types::StackManager;
use crate::error::Result;
use crate::hosts::HostRegistry;
use crate::runner::{CommandLine, CommandOutput, CommandRunner};
use std::path::Path;
use tracing::debug;

impl<R: CommandRunner, H: HostRegistry> StackManager<R, H> {
    /// 构造 `[sudo] docker-compose -f <file> <args>` 命令
    pub(crate) fn compose_command(&self, manifest: &Path, args: &[&str]) -> CommandLine {
        let mut cmd_args = vec!["-f".to_string(), manifest.to_string_lossy().to_string()];
        cmd_args.extend(args.iter().map(|a| a.to_string()));

        self.privilege
            .wrap(CommandLine::new(self.compose.as_str(), cmd_args))
    }

    /// 执行编排命令，非零退出视为失败
    pub(crate) async fn run_compose_command(
        &self,
        manifest: &Path,
        args: &[&str],
    ) -> Result<CommandOutput> {
        let cmd = self.compose_command(manifest, args);
        debug!("编排命令: {}", cmd);

        let output = self.runner.run(&cmd).await?;
        output.ensure_success(&cmd)
    }

    /// `up -d`
    pub(crate) async fn compose_up(&self, manifest: &Path) -> Result<()> {
        self.run_compose_command(manifest, &["up", "-d"]).await?;
        Ok(())
    }

    /// `down`，`remove_volumes` 时附加 `--volumes`
    pub(crate) async fn compose_down(&self, manifest: &Path, remove_volumes: bool) -> Result<()> {
        let args: &[&str] = if remove_volumes {
            &["down", "--volumes"]
        } else {
            &["down"]
        };
        self.run_compose_command(manifest, args).await?;
        Ok(())
    }
}
