//! 外部命令执行
//!
//! 依赖安装和编排命令都通过 [`CommandRunner`] 执行，便于在测试中替换为记录型实现。

use crate::error::{Result, StackError};
use std::fmt;
use std::future::Future;
use std::io;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// 一条待执行的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// 命令执行结果
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// 退出码，被信号终止时为 None
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// 非零退出时转换为 [`StackError::CommandFailed`]
    pub fn ensure_success(self, command: &CommandLine) -> Result<Self> {
        if self.success() {
            return Ok(self);
        }
        Err(StackError::CommandFailed {
            command: command.to_string(),
            code: self.code,
            stderr: self.stderr.trim().to_string(),
        })
    }
}

/// 命令执行能力
pub trait CommandRunner {
    /// 执行命令并等待结束。只有命令无法启动时才返回错误，非零退出通过
    /// [`CommandOutput::code`] 体现。
    fn run(&self, command: &CommandLine) -> impl Future<Output = Result<CommandOutput>> + Send;
}

/// 基于 tokio 子进程的命令执行器
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &CommandLine) -> Result<CommandOutput> {
        debug!("执行命令: {}", command);

        // PATH 中找不到时按启动失败处理
        let program = which::which(&command.program).map_err(|e| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} 不在 PATH 中: {}", command.program, e),
            )
        })?;

        let output = Command::new(program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !result.stdout.trim().is_empty() {
            debug!("stdout: {}", result.stdout.trim());
        }
        if !result.stderr.trim().is_empty() {
            debug!("stderr: {}", result.stderr.trim());
        }

        Ok(result)
    }
}

/// 提权方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Privilege {
    /// 直接执行
    Direct,
    /// 通过 sudo 等命令提权执行
    Elevated(String),
}

impl Privilege {
    pub fn from_config(use_sudo: bool, sudo: &str) -> Self {
        if use_sudo {
            Privilege::Elevated(sudo.to_string())
        } else {
            Privilege::Direct
        }
    }

    /// 按提权方式包装命令
    pub fn wrap(&self, command: CommandLine) -> CommandLine {
        match self {
            Privilege::Direct => command,
            Privilege::Elevated(sudo) => {
                let mut args = Vec::with_capacity(command.args.len() + 1);
                args.push(command.program);
                args.extend(command.args);
                CommandLine {
                    program: sudo.clone(),
                    args,
                }
            }
        }
    }
}

/// 测试用命令执行器，`testing` feature 下对其他 crate 可见
#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// 记录所有调用的命令执行器，可按规则模拟失败
    #[derive(Debug, Default)]
    pub struct RecordingRunner {
        calls: Mutex<Vec<CommandLine>>,
        failures: Vec<String>,
        missing: Vec<String>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// 完整命令行包含 `pattern` 时以退出码 1 结束
        pub fn fail_on(mut self, pattern: &str) -> Self {
            self.failures.push(pattern.to_string());
            self
        }

        /// 模拟程序不存在（启动失败）
        pub fn missing_program(mut self, program: &str) -> Self {
            self.missing.push(program.to_string());
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .iter()
                .map(ToString::to_string)
                .collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        async fn run(&self, command: &CommandLine) -> Result<CommandOutput> {
            self.calls
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(command.clone());

            if self.missing.contains(&command.program) {
                return Err(io::Error::new(io::ErrorKind::NotFound, "program not found").into());
            }

            let rendered = command.to_string();
            if self.failures.iter().any(|p| rendered.contains(p.as_str())) {
                return Ok(CommandOutput {
                    code: Some(1),
                    stdout: String::new(),
                    stderr: format!("simulated failure: {rendered}"),
                });
            }

            Ok(CommandOutput {
                code: Some(0),
                ..Default::default()
            })
        }
    }
}
