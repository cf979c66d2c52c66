use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use imagecrypt::{
    cli::{Cli, Commands},
    handler::{handle_decrypt, handle_encrypt},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`encrypt` 或 `decrypt`）
/// 将执行分派到相应的处理函数，再把处理结果映射为进程退出码
fn main() -> ExitCode {
    env_logger::init();

    // 解析命令行参数，参数缺失或无效时 clap 会打印用法并以非零状态退出
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt(args) => handle_encrypt(args),
        Commands::Decrypt(args) => handle_decrypt(args).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
