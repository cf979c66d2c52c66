//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::DEFAULT_KEY;
use crate::steganography::Key;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// 一款基于红色通道奇偶性隐写的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或读取消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于红色通道奇偶性隐写的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或读取消息。\n密钥格式为 x,y,t0,t1,t2：起始像素坐标与 3 字节结束序列。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encrypt (隐藏) 和 decrypt (读取)。
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 把消息隐藏到无损格式图像中。
    Encrypt(EncryptArgs),

    /// 从经过隐写的图像中读取消息。
    Decrypt(DecryptArgs),
}

/// 'encrypt' 命令所需的参数。
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的消息。
    #[arg(short, long)]
    pub message: String,

    /// 隐写完成后，保存结果图像的输出路径。
    #[arg(short, long)]
    pub out: PathBuf,

    /// 密钥 x,y,t0,t1,t2。
    #[arg(short, long, default_value_t = DEFAULT_KEY)]
    pub key: Key,
}

/// 'decrypt' 命令所需的参数。
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// 已隐藏消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 密钥 x,y,t0,t1,t2，必须与隐藏时使用的一致。
    #[arg(short, long, default_value_t = DEFAULT_KEY)]
    pub key: Key,
}
