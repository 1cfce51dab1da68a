use super::types::StackManager;
use crate::config::AppConfig;
use crate::constants::stack::MANIFEST_EXTENSION;
use crate::error::{Result, StackError};
use crate::hosts::{HostRegistry, HostsFile};
use crate::runner::{CommandRunner, Privilege, ProcessRunner};
use crate::site::SiteName;
use std::path::{Path, PathBuf};

impl StackManager {
    /// 使用真实子进程和 hosts 文件创建管理器
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_parts(
            ProcessRunner::new(),
            HostsFile::new(config.get_hosts_file()),
            config,
        )
    }
}

impl<R: CommandRunner, H: HostRegistry> StackManager<R, H> {
    pub fn with_parts(runner: R, hosts: H, config: &AppConfig) -> Self {
        Self {
            runner,
            hosts,
            privilege: Privilege::from_config(config.commands.use_sudo, &config.commands.sudo),
            compose: config.commands.compose.clone(),
            work_dir: config.get_work_dir(),
            nginx_conf_dir: config.stack.nginx_conf_dir.clone(),
            manifest_prefix: config.stack.manifest_prefix.clone(),
            remove_hosts_on_delete: config.hosts.remove_on_delete,
            manifest: config.manifest.clone(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn hosts(&self) -> &H {
        &self.hosts
    }

    pub fn privilege(&self) -> &Privilege {
        &self.privilege
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// 编排文件路径：`<work_dir>/<prefix>-<site>.yml`
    pub fn manifest_path(&self, site: &SiteName) -> PathBuf {
        self.work_dir.join(format!(
            "{}-{}.{}",
            self.manifest_prefix, site, MANIFEST_EXTENSION
        ))
    }

    /// nginx 配置目录路径
    pub fn nginx_conf_path(&self) -> PathBuf {
        self.work_dir.join(&self.nginx_conf_dir)
    }

    /// 编排文件中 nginx 配置目录的挂载源
    ///
    /// 绝对路径原样使用，相对路径相对编排文件所在目录（即工作目录）。
    pub(crate) fn nginx_conf_mount_source(&self) -> String {
        if Path::new(&self.nginx_conf_dir).is_absolute() {
            self.nginx_conf_dir.clone()
        } else {
            format!("./{}", self.nginx_conf_dir)
        }
    }

    pub fn manifest_exists(&self, site: &SiteName) -> bool {
        self.manifest_path(site).exists()
    }

    /// enable/disable/delete 的前置检查
    pub(crate) fn require_manifest(&self, site: &SiteName) -> Result<PathBuf> {
        let path = self.manifest_path(site);
        if !path.exists() {
            return Err(StackError::ManifestNotFound(path));
        }
        Ok(path)
    }
}
