use super::types::StackManager;
use crate::error::Result;
use crate::hosts::{HostRegistry, HostsFile};
use crate::manifest::ManifestBuilder;
use crate::runner::CommandRunner;
use crate::site::SiteName;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

impl<R: CommandRunner, H: HostRegistry> StackManager<R, H> {
    /// 创建站点栈
    ///
    /// 依次写 hosts 条目、创建 nginx 配置目录、写编排文件并 `up -d`。
    /// 中途失败不回滚，已完成的步骤需要手动清理。
    pub async fn create(&self, site: &SiteName) -> Result<()> {
        info!("🚀 创建 LEMP 站点: {}", site.domain());

        self.hosts.add_mapping(site)?;
        info!("   ✅ 添加 hosts 条目: {}", HostsFile::entry_line(site).replace('\t', " "));

        let conf_dir = self.nginx_conf_path();
        fs::create_dir_all(&conf_dir).await?;
        debug!("nginx 配置目录: {}", conf_dir.display());

        let manifest_path = self.write_manifest(site).await?;
        info!("   ✅ 生成编排文件: {}", manifest_path.display());

        self.compose_up(&manifest_path).await?;
        info!("🎉 LEMP 站点 '{}' 创建成功", site.domain());

        Ok(())
    }

    /// 启动已创建的站点栈
    pub async fn enable(&self, site: &SiteName) -> Result<()> {
        let manifest_path = self.require_manifest(site)?;

        self.compose_up(&manifest_path).await?;
        info!("▶️  LEMP 站点 '{}' 已启用", site.domain());

        Ok(())
    }

    /// 停止站点栈，保留数据卷
    pub async fn disable(&self, site: &SiteName) -> Result<()> {
        let manifest_path = self.require_manifest(site)?;

        self.compose_down(&manifest_path, false).await?;
        info!("⏹️  LEMP 站点 '{}' 已停用", site.domain());

        Ok(())
    }

    /// 删除站点栈：停止容器并删除数据卷、编排文件和 nginx 配置目录
    pub async fn delete(&self, site: &SiteName) -> Result<()> {
        let manifest_path = self.require_manifest(site)?;

        self.compose_down(&manifest_path, true).await?;
        info!("   ✅ 容器和数据卷已删除");

        fs::remove_file(&manifest_path).await?;
        info!("   ✅ 删除编排文件: {}", manifest_path.display());

        let conf_dir = self.nginx_conf_path();
        match fs::remove_dir_all(&conf_dir).await {
            Ok(()) => info!("   ✅ 删除 nginx 配置目录: {}", conf_dir.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("nginx 配置目录不存在: {}", conf_dir.display());
            }
            Err(e) => return Err(e.into()),
        }

        if self.remove_hosts_on_delete {
            if self.hosts.remove_mapping(site)? {
                info!("   ✅ 移除 hosts 条目: {}", site.domain());
            }
        } else {
            warn!("⚠️  hosts 条目 '{}' 未移除，如不再需要请手动清理", site.domain());
        }

        info!("🗑️  站点 '{}' 及其容器已删除", site.domain());
        Ok(())
    }

    /// 生成并写入编排文件，已存在时覆盖
    async fn write_manifest(&self, site: &SiteName) -> Result<PathBuf> {
        let manifest = ManifestBuilder::new(site)
            .http_port(self.manifest.http_port)
            .images(
                &self.manifest.nginx_image,
                &self.manifest.php_image,
                &self.manifest.mysql_image,
            )
            .nginx_conf_source(self.nginx_conf_mount_source())
            .build();
        let content = manifest.to_yaml()?;

        let path = self.manifest_path(site);
        fs::create_dir_all(&self.work_dir).await?;
        fs::write(&path, content).await?;
        Ok(path)
    }
}
