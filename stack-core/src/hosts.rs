use crate::constants::hosts::LOOPBACK;
use crate::error::Result;
use crate::site::SiteName;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 站点域名到本机地址的注册表
pub trait HostRegistry {
    /// 追加 `127.0.0.1 <site>.com` 映射
    fn add_mapping(&self, site: &SiteName) -> Result<()>;

    /// 移除该站点的映射，返回是否有条目被移除
    fn remove_mapping(&self, site: &SiteName) -> Result<bool>;
}

/// 基于 hosts 文件的注册表
#[derive(Debug, Clone)]
pub struct HostsFile {
    path: PathBuf,
}

impl HostsFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 生成的条目行（不含换行）
    pub fn entry_line(site: &SiteName) -> String {
        format!("{LOOPBACK}\t{}", site.domain())
    }

    /// 检查 hosts 文件中是否存在该站点的映射
    pub fn contains(&self, site: &SiteName) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        let content = fs::read_to_string(&self.path)?;
        let domain = site.domain();
        Ok(content.lines().any(|line| is_site_entry(line, &domain)))
    }
}

/// 只匹配本工具写入形式的条目：回环地址后仅跟该站点域名
fn is_site_entry(line: &str, domain: &str) -> bool {
    let mut fields = line.split_whitespace();
    matches!(
        (fields.next(), fields.next(), fields.next()),
        (Some(ip), Some(host), None) if ip == LOOPBACK && host == domain
    )
}

/// 空文件视为以换行结尾
fn ends_with_newline(file: &mut File) -> Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

impl HostRegistry for HostsFile {
    fn add_mapping(&self, site: &SiteName) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        // 原文件末行没有换行时先补一个，避免与新条目拼在同一行
        if !ends_with_newline(&mut file)? {
            writeln!(file)?;
        }
        writeln!(file, "{}", Self::entry_line(site))?;
        debug!("已写入 {}: {}", self.path.display(), site.domain());
        Ok(())
    }

    fn remove_mapping(&self, site: &SiteName) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        let content = fs::read_to_string(&self.path)?;
        let domain = site.domain();
        let mut removed = false;
        let mut kept = String::with_capacity(content.len());
        for line in content.lines() {
            if is_site_entry(line, &domain) {
                removed = true;
                continue;
            }
            kept.push_str(line);
            kept.push('\n');
        }

        if removed {
            fs::write(&self.path, kept)?;
            debug!("已从 {} 移除: {}", self.path.display(), domain);
        }
        Ok(removed)
    }
}
