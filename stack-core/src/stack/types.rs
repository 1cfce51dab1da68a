use crate::config::ManifestConfig;
use crate::hosts::HostsFile;
use crate::runner::{Privilege, ProcessRunner};
use std::path::PathBuf;

/// 站点栈管理器
///
/// 负责单个工作目录下所有站点的编排文件、nginx 配置目录和容器生命周期。
#[derive(Debug, Clone)]
pub struct StackManager<R = ProcessRunner, H = HostsFile> {
    pub(crate) runner: R,
    pub(crate) hosts: H,
    pub(crate) privilege: Privilege,
    pub(crate) compose: String,
    pub(crate) work_dir: PathBuf,
    pub(crate) nginx_conf_dir: String,
    pub(crate) manifest_prefix: String,
    pub(crate) remove_hosts_on_delete: bool,
    pub(crate) manifest: ManifestConfig,
}
