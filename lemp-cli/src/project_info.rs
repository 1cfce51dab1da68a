/// LEMP CLI 项目信息模块
///
/// 项目元数据统一在这里定义，stack-core 作为内部库只提供技术性常量

/// 项目元数据（自动从 lemp-cli 的 Cargo.toml 同步）
pub mod metadata {
    /// 项目名称
    pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");

    /// 项目描述
    pub const PROJECT_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

    /// 项目作者
    pub const PROJECT_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

    /// 用户友好的显示名称（手动维护）
    pub mod display {
        /// 用户友好的项目名称
        pub const FRIENDLY_NAME: &str = "LEMP CLI";

        /// 项目详细描述
        pub const DESCRIPTION_LONG: &str = "为单个站点创建 nginx + PHP + MySQL 的 Docker Compose 栈：\
自动安装缺失的 docker / docker-compose，生成站点专属的编排文件，\
并通过 create / enable / disable / delete 管理其生命周期";
    }
}

/// 版本信息
pub mod version_info {
    /// CLI 版本（自动从 Cargo.toml 同步）
    pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// 获取版本信息字符串
pub fn get_version_string() -> String {
    format!(
        "{} v{}",
        metadata::display::FRIENDLY_NAME,
        version_info::CLI_VERSION
    )
}
