use crate::constants::hosts;
use crate::error::{Result, StackError};
use std::fmt;
use std::str::FromStr;

/// 站点名称
///
/// 只允许 ASCII 字母和数字。站点名会直接拼接进域名、文件名、卷名和数据库名，
/// 通过校验后无需再做任何转义。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteName(String);

impl SiteName {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(StackError::InvalidSiteName(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 站点域名，例如 `blog.com`
    pub fn domain(&self) -> String {
        format!("{}.{}", self.0, hosts::DOMAIN_SUFFIX)
    }
}

impl FromStr for SiteName {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SiteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SiteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
