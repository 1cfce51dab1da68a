use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StackError>;

#[derive(Error, Debug)]
pub enum StackError {
    #[error("站点名称无效: '{0}'，只能包含字母和数字")]
    InvalidSiteName(String),

    #[error("配置错误: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("编排文件序列化失败: {0}")]
    Manifest(#[from] serde_yaml::Error),

    #[error("安装 {package} 失败: {reason}")]
    DependencyInstall { package: String, reason: String },

    #[error("命令执行失败 `{command}` (退出码: {}): {stderr}", exit_code_label(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Docker Compose 文件不存在: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("配置文件未找到: {}", .0.display())]
    ConfigNotFound(PathBuf),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        // 被信号终止时没有退出码
        None => "无".to_string(),
    }
}

impl StackError {
    pub fn dependency_install(package: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DependencyInstall {
            package: package.into(),
            reason: reason.into(),
        }
    }
}
