//! Docker Compose 编排文件生成
//!
//! 编排文件由 [`ManifestBuilder`] 按站点名构造为 [`ComposeManifest`]，再用 serde_yaml
//! 序列化，不做字符串模板拼接。

use crate::constants::manifest::{self as consts, database};
use crate::error::Result;
use crate::site::SiteName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 编排文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeManifest {
    pub version: String,
    pub services: BTreeMap<String, ServiceSpec>,
    pub volumes: BTreeMap<String, VolumeSpec>,
    pub networks: BTreeMap<String, NetworkSpec>,
}

/// 单个服务定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSpec {
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<String>,
}

impl ServiceSpec {
    fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ports: Vec::new(),
            environment: BTreeMap::new(),
            volumes: Vec::new(),
            networks: Vec::new(),
        }
    }

    fn port(mut self, host: u16, container: u16) -> Self {
        self.ports.push(format!("{host}:{container}"));
        self
    }

    fn env(mut self, key: &str, value: impl Into<String>) -> Self {
        self.environment.insert(key.to_string(), value.into());
        self
    }

    fn mount(mut self, source: &str, target: &str) -> Self {
        self.volumes.push(format!("{source}:{target}"));
        self
    }

    fn network(mut self, network: &str) -> Self {
        self.networks.push(network.to_string());
        self
    }
}

/// 命名卷，使用默认驱动
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeSpec {}

/// 命名网络，使用默认驱动
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {}

impl ComposeManifest {
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// 按站点构造 LEMP 编排文件
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    site: SiteName,
    http_port: u16,
    nginx_conf_source: String,
    nginx_image: String,
    php_image: String,
    mysql_image: String,
}

impl ManifestBuilder {
    pub fn new(site: &SiteName) -> Self {
        Self {
            site: site.clone(),
            http_port: consts::DEFAULT_HTTP_PORT,
            nginx_conf_source: format!("./{}", crate::constants::stack::DEFAULT_NGINX_CONF_DIR),
            nginx_image: consts::NGINX_IMAGE.to_string(),
            php_image: consts::PHP_IMAGE.to_string(),
            mysql_image: consts::MYSQL_IMAGE.to_string(),
        }
    }

    pub fn http_port(mut self, port: u16) -> Self {
        self.http_port = port;
        self
    }

    /// nginx 配置目录的挂载源，相对编排文件所在目录
    pub fn nginx_conf_source(mut self, source: impl Into<String>) -> Self {
        self.nginx_conf_source = source.into();
        self
    }

    pub fn images(
        mut self,
        nginx: impl Into<String>,
        php: impl Into<String>,
        mysql: impl Into<String>,
    ) -> Self {
        self.nginx_image = nginx.into();
        self.php_image = php.into();
        self.mysql_image = mysql.into();
        self
    }

    pub fn web_volume(&self) -> String {
        format!("{}_{}", self.site, consts::WEB_VOLUME_SUFFIX)
    }

    pub fn db_volume(&self) -> String {
        format!("{}_{}", self.site, consts::DB_VOLUME_SUFFIX)
    }

    pub fn network_name(&self) -> String {
        format!("{}_{}", self.site, consts::NETWORK_SUFFIX)
    }

    pub fn build(&self) -> ComposeManifest {
        let web_volume = self.web_volume();
        let db_volume = self.db_volume();
        let network = self.network_name();

        let nginx = ServiceSpec::new(&self.nginx_image)
            .port(self.http_port, consts::DEFAULT_HTTP_PORT)
            .mount(&web_volume, consts::WEB_ROOT)
            .mount(&self.nginx_conf_source, consts::NGINX_CONF_MOUNT)
            .network(&network);

        let php = ServiceSpec::new(&self.php_image)
            .mount(&web_volume, consts::WEB_ROOT)
            .network(&network);

        let mysql = ServiceSpec::new(&self.mysql_image)
            .env("MYSQL_DATABASE", self.site.as_str())
            .env("MYSQL_USER", database::USER)
            .env("MYSQL_PASSWORD", database::PASSWORD)
            .env("MYSQL_ROOT_PASSWORD", database::ROOT_PASSWORD)
            .mount(&db_volume, consts::MYSQL_DATA_DIR)
            .network(&network);

        let services = BTreeMap::from([
            (consts::NGINX_SERVICE.to_string(), nginx),
            (consts::PHP_SERVICE.to_string(), php),
            (consts::MYSQL_SERVICE.to_string(), mysql),
        ]);
        let volumes = BTreeMap::from([
            (web_volume, VolumeSpec::default()),
            (db_volume, VolumeSpec::default()),
        ]);
        let networks = BTreeMap::from([(network, NetworkSpec::default())]);

        ComposeManifest {
            version: consts::COMPOSE_VERSION.to_string(),
            services,
            volumes,
            networks,
        }
    }
}
