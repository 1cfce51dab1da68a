use crate::project_info::{metadata, version_info};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// 用法说明
pub const USAGE: &str = "lemp-cli <subcommand> <site_name>";

/// 支持的子命令
pub const SUPPORTED_SUBCOMMANDS: &[&str] = &["create", "enable", "disable", "delete"];

/// LEMP CLI - 为单个站点管理 nginx + PHP + MySQL Docker 栈
#[derive(Parser, Debug)]
#[command(name = metadata::PROJECT_NAME)]
#[command(about = metadata::PROJECT_DESCRIPTION)]
#[command(version = version_info::CLI_VERSION)]
#[command(long_about = metadata::display::DESCRIPTION_LONG)]
#[command(author = metadata::PROJECT_AUTHORS)]
pub struct Cli {
    /// 配置文件路径（默认查找当前目录下的 lemp.toml）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// 创建站点：写 hosts 条目、生成编排文件并启动容器
    Create {
        /// 站点名称，只能包含字母和数字
        site_name: String,
    },
    /// 启动已创建的站点
    Enable {
        /// 站点名称
        site_name: String,
    },
    /// 停止站点（保留数据卷）
    Disable {
        /// 站点名称
        site_name: String,
    },
    /// 删除站点的容器、数据卷、编排文件和 nginx 配置目录
    Delete {
        /// 站点名称
        site_name: String,
    },
}

impl Commands {
    pub fn site_name(&self) -> &str {
        match self {
            Commands::Create { site_name }
            | Commands::Enable { site_name }
            | Commands::Disable { site_name }
            | Commands::Delete { site_name } => site_name,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Commands::Create { .. } => "create",
            Commands::Enable { .. } => "enable",
            Commands::Disable { .. } => "disable",
            Commands::Delete { .. } => "delete",
        }
    }
}

/// 参数解析失败的分类
#[derive(Debug)]
pub enum CliParseError {
    /// `--help` / `--version`，由 clap 输出后以 0 退出
    Display(clap::Error),
    /// 缺少子命令或站点名等用法错误
    Usage(clap::Error),
    /// 不支持的子命令
    InvalidSubcommand(String),
}

impl CliParseError {
    /// 对应的进程退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            CliParseError::Display(_) => 0,
            CliParseError::Usage(_) | CliParseError::InvalidSubcommand(_) => 1,
        }
    }
}

/// 解析命令行参数
///
/// 位置参数不足两个时一律按用法错误处理，即使子命令本身也无效。
pub fn parse_cli<I, T>(args: I) -> Result<Cli, CliParseError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let positionals = positional_count(&args);

    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliParseError::Display(e),
        ErrorKind::InvalidSubcommand if positionals < 2 => CliParseError::Usage(e),
        ErrorKind::InvalidSubcommand => {
            let name = match e.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.clone(),
                _ => String::new(),
            };
            CliParseError::InvalidSubcommand(name)
        }
        _ => CliParseError::Usage(e),
    })
}

/// 位置参数个数，跳过程序名、选项和 `-c/--config` 的取值
fn positional_count(args: &[OsString]) -> usize {
    let mut count = 0;
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let arg = arg.to_string_lossy();
        if arg == "-c" || arg == "--config" {
            iter.next();
        } else if !arg.starts_with('-') {
            count += 1;
        }
    }
    count
}
