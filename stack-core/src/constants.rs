/// 依赖检查相关常量
pub mod dependencies {
    /// 必需的软件包：(包名, 用于检测是否安装的命令)
    pub const REQUIRED_PACKAGES: &[(&str, &str)] =
        &[("docker", "docker"), ("docker-compose", "docker-compose")];

    /// 检测命令是否可用时附加的参数
    pub const VERSION_FLAG: &str = "--version";
}

/// 外部命令默认值
pub mod commands {
    /// 提权命令
    pub const DEFAULT_SUDO: &str = "sudo";

    /// 主机包管理器
    pub const DEFAULT_PACKAGE_MANAGER: &str = "apt";

    /// 编排命令
    pub const DEFAULT_COMPOSE: &str = "docker-compose";
}

/// 站点栈文件布局
pub mod stack {
    /// 编排文件名前缀，完整文件名为 `<prefix>-<site>.yml`
    pub const DEFAULT_MANIFEST_PREFIX: &str = "docker-compose";

    /// 编排文件扩展名
    pub const MANIFEST_EXTENSION: &str = "yml";

    /// nginx 配置目录（相对工作目录）
    pub const DEFAULT_NGINX_CONF_DIR: &str = "nginx-conf";

    /// 默认工作目录
    pub const DEFAULT_WORK_DIR: &str = ".";
}

/// 编排文件内容常量
pub mod manifest {
    pub const COMPOSE_VERSION: &str = "3";

    pub const NGINX_SERVICE: &str = "nginx";
    pub const PHP_SERVICE: &str = "php";
    pub const MYSQL_SERVICE: &str = "mysql";

    pub const NGINX_IMAGE: &str = "nginx:latest";
    pub const PHP_IMAGE: &str = "php:latest";
    pub const MYSQL_IMAGE: &str = "mysql:5.7";

    pub const DEFAULT_HTTP_PORT: u16 = 80;

    pub const WEB_ROOT: &str = "/var/www/html";
    pub const NGINX_CONF_MOUNT: &str = "/etc/nginx/conf.d";
    pub const MYSQL_DATA_DIR: &str = "/var/lib/mysql";

    pub const WEB_VOLUME_SUFFIX: &str = "wordpress";
    pub const DB_VOLUME_SUFFIX: &str = "db";
    pub const NETWORK_SUFFIX: &str = "network";

    /// 数据库固定凭据（本地开发默认值，非机密）
    pub mod database {
        pub const USER: &str = "wordpress";
        pub const PASSWORD: &str = "wordpress";
        pub const ROOT_PASSWORD: &str = "wordpress";
    }
}

/// 主机解析文件相关常量
pub mod hosts {
    pub const DEFAULT_HOSTS_FILE: &str = "/etc/hosts";

    pub const LOOPBACK: &str = "127.0.0.1";

    /// 站点域名后缀
    pub const DOMAIN_SUFFIX: &str = "com";
}

/// 配置文件相关常量
pub mod config {
    /// 未指定 `--config` 时在当前目录查找的配置文件
    pub const DEFAULT_CONFIG_FILE: &str = "lemp.toml";
}
