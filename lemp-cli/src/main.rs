use lemp_cli::{
    CliApp, CliParseError, SUPPORTED_SUBCOMMANDS, USAGE, parse_cli, project_info,
    setup_logging,
};
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    // 解析命令行参数
    let cli = match parse_cli(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => exit_on_parse_error(err),
    };

    // 设置日志记录
    setup_logging(cli.verbose);
    debug!("{}", project_info::get_version_string());

    let app = match CliApp::new(cli.config.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            error!("❌ 加载配置失败: {}", e);
            std::process::exit(1);
        }
    };

    // 运行命令
    if let Err(e) = app.run(cli.command).await {
        error!("❌ 操作失败: {:#}", e);
        std::process::exit(1);
    }
}

/// 参数错误时输出提示并退出，此时还没有 `-v`，按默认级别输出日志
fn exit_on_parse_error(err: CliParseError) -> ! {
    let code = err.exit_code();
    match err {
        CliParseError::Display(e) => e.exit(),
        CliParseError::InvalidSubcommand(name) => {
            setup_logging(false);
            error!("❌ 无效的子命令: '{}'", name);
            error!("👉 支持的子命令: {}", SUPPORTED_SUBCOMMANDS.join(", "));
        }
        CliParseError::Usage(e) => {
            setup_logging(false);
            debug!("参数解析失败: {}", e);
            error!("用法: {}", USAGE);
        }
    }
    std::process::exit(code);
}
