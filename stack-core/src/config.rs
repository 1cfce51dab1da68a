use crate::constants::{commands, config, hosts, manifest, stack};
use crate::error::{Result, StackError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 应用配置结构
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub stack: StackConfig,
    pub commands: CommandsConfig,
    pub hosts: HostsConfig,
    pub manifest: ManifestConfig,
}

/// 站点栈文件布局配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StackConfig {
    /// 编排文件和 nginx 配置目录所在目录
    pub work_dir: String,
    pub nginx_conf_dir: String,
    pub manifest_prefix: String,
}

/// 外部命令配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CommandsConfig {
    /// 安装依赖和执行编排命令时是否通过 sudo 提权
    pub use_sudo: bool,
    pub sudo: String,
    pub package_manager: String,
    pub compose: String,
}

/// 主机解析文件配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HostsConfig {
    pub file: String,
    /// delete 时是否同时移除 hosts 条目
    pub remove_on_delete: bool,
}

/// 生成的编排文件可调整的部分
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ManifestConfig {
    /// nginx 绑定的宿主机端口
    pub http_port: u16,
    pub nginx_image: String,
    pub php_image: String,
    pub mysql_image: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            work_dir: stack::DEFAULT_WORK_DIR.to_string(),
            nginx_conf_dir: stack::DEFAULT_NGINX_CONF_DIR.to_string(),
            manifest_prefix: stack::DEFAULT_MANIFEST_PREFIX.to_string(),
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            use_sudo: true,
            sudo: commands::DEFAULT_SUDO.to_string(),
            package_manager: commands::DEFAULT_PACKAGE_MANAGER.to_string(),
            compose: commands::DEFAULT_COMPOSE.to_string(),
        }
    }
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            file: hosts::DEFAULT_HOSTS_FILE.to_string(),
            remove_on_delete: false,
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            http_port: manifest::DEFAULT_HTTP_PORT,
            nginx_image: manifest::NGINX_IMAGE.to_string(),
            php_image: manifest::PHP_IMAGE.to_string(),
            mysql_image: manifest::MYSQL_IMAGE.to_string(),
        }
    }
}

impl AppConfig {
    /// 加载配置
    ///
    /// 显式指定的路径必须存在；未指定时查找当前目录下的 `lemp.toml`，
    /// 都没有则使用默认配置。不会自动创建配置文件。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(StackError::ConfigNotFound(path.to_path_buf()));
            }
            tracing::debug!("使用配置文件: {}", path.display());
            return Self::load_from_file(path);
        }

        let default_path = Path::new(config::DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            tracing::debug!("找到配置文件: {}", default_path.display());
            return Self::load_from_file(default_path);
        }

        tracing::debug!("未找到配置文件，使用默认配置");
        Ok(Self::default())
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// 获取工作目录路径
    pub fn get_work_dir(&self) -> PathBuf {
        PathBuf::from(&self.stack.work_dir)
    }

    /// 获取 hosts 文件路径
    pub fn get_hosts_file(&self) -> PathBuf {
        PathBuf::from(&self.hosts.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_matches_stock_layout() {
        let config = AppConfig::default();
        assert_eq!(config.stack.work_dir, ".");
        assert_eq!(config.stack.nginx_conf_dir, "nginx-conf");
        assert_eq!(config.stack.manifest_prefix, "docker-compose");
        assert!(config.commands.use_sudo);
        assert_eq!(config.commands.package_manager, "apt");
        assert_eq!(config.commands.compose, "docker-compose");
        assert_eq!(config.get_hosts_file(), PathBuf::from("/etc/hosts"));
        assert!(!config.hosts.remove_on_delete);
        assert_eq!(config.manifest.http_port, 80);
        assert_eq!(config.manifest.mysql_image, "mysql:5.7");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lemp.toml");
        fs::write(
            &path,
            r#"
[commands]
use_sudo = false
compose = "podman-compose"

[hosts]
remove_on_delete = true

[manifest]
http_port = 8080
"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert!(!config.commands.use_sudo);
        assert_eq!(config.commands.compose, "podman-compose");
        assert_eq!(config.commands.package_manager, "apt");
        assert!(config.hosts.remove_on_delete);
        assert_eq!(config.hosts.file, "/etc/hosts");
        assert_eq!(config.stack, StackConfig::default());
        assert_eq!(config.manifest.http_port, 8080);
        assert_eq!(config.manifest.nginx_image, "nginx:latest");
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let result = AppConfig::load(Some(path.as_path()));
        assert!(matches!(result, Err(StackError::ConfigNotFound(_))));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[stack\nwork_dir = ").unwrap();
        let result = AppConfig::load_from_file(&path);
        assert!(matches!(result, Err(StackError::Config(_))));
    }
}
