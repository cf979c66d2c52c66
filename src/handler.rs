//! # 命令处理逻辑模块
//!
//! 包含处理 `encrypt` 和 `decrypt` 子命令的高级业务逻辑。
//! 本模块负责协调图像读写、调用核心隐写算法以及向用户报告结果。

use crate::cli::{DecryptArgs, EncryptArgs};
use crate::constants::{DEFAULT_MAX_SCAN_BITS, PIXELS_PER_BYTE, TERMINATOR_LEN};
use crate::error::StegoError;
use crate::image_io::{self, ImageMetadata};
use crate::steganography::{capacity, decode, encode};
use anyhow::{Context, Result};
use colored::Colorize;

/// 处理 'Encrypt' 命令的执行逻辑。
///
/// 负责读取图像、检查对角线容量是否足够、调用嵌入引擎写入消息和结束序列，
/// 最后将结果写入输出图像文件。只有在嵌入全部成功后才会写文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、消息和密钥的 `EncryptArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像。
/// * 消息包含结束序列。
/// * 从起始坐标出发的对角线没有足够的像素。
/// * 无法写入输出图像文件。
pub fn handle_encrypt(args: EncryptArgs) -> Result<()> {
    let (mut pixels, metadata) = image_io::load(&args.image)?;
    print_metadata(&metadata);
    println!("Message is \"{}\"", args.message.cyan());

    encode(&mut pixels, args.message.as_bytes(), &args.key).map_err(|e| match e {
        StegoError::MessageContainsTerminator { offset } => anyhow::anyhow!(
            "The message contains the end sequence {:?} at byte {}. \nChoose a different key so the message can be recovered intact.",
            args.key.terminator,
            offset.to_string().red().bold()
        ),
        StegoError::CoordinateOutOfBounds { .. } => {
            let required = (args.message.len() + TERMINATOR_LEN) * PIXELS_PER_BYTE;
            let available = capacity(&pixels, &args.key);
            anyhow::Error::new(e).context(format!(
                "Not enough space along the diagonal starting at ({}, {}). \nRequired: {} pixels, Available: {}",
                args.key.x_start,
                args.key.y_start,
                required.to_string().red().bold(),
                available.to_string().green().bold()
            ))
        }
        other => anyhow::Error::new(other).context("Failed to hide the message in the image."),
    })?;

    image_io::save(&args.out, &pixels)?;

    println!(
        "The message has been successfully hidden and saved: {}",
        args.out.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decrypt' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像、沿密钥指定的对角线读取消息直到遇到结束序列，
/// 并打印恢复的消息 (非 UTF-8 字节会被替换)。
///
/// # Arguments
///
/// * `args` - 包含输入路径和密钥的 `DecryptArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像。
/// * 在扫描上限内找不到结束序列。
pub fn handle_decrypt(args: DecryptArgs) -> Result<Vec<u8>> {
    let (pixels, metadata) = image_io::load(&args.image)?;
    print_metadata(&metadata);

    let message = decode(&pixels, &args.key, DEFAULT_MAX_SCAN_BITS).with_context(|| {
        format!(
            "Failed to recover a message from '{}' with key {}. \nThe image may not contain a hidden message or the key is wrong.",
            args.image.to_string_lossy().red().bold(),
            args.key.to_string().red().bold()
        )
    })?;

    println!("{}", String::from_utf8_lossy(&message));

    Ok(message)
}

fn print_metadata(metadata: &ImageMetadata) {
    println!("{} {}", "metadata".bold(), metadata);
}
