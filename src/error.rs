//! # 错误类型模块
//!
//! 定义隐写核心可能返回的全部错误。核心不在内部恢复任何错误，
//! 一律以 `Err` 形式交给调用方处理。

use thiserror::Error;

/// 隐写核心使用的 `Result` 别名。
pub type Result<T> = std::result::Result<T, StegoError>;

/// 编码、解码以及像素缓冲区操作中可能出现的错误。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StegoError {
    /// 对角线遍历走出了图像边界。
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} image")]
    CoordinateOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// 在扫描上限内没有找到结束序列。
    #[error("no end sequence found after scanning {bits_read} bits")]
    DecodeScanExhausted { bits_read: usize },

    /// 消息本身包含结束序列，解码时会被提前截断。
    #[error("message contains the end sequence at byte offset {offset}")]
    MessageContainsTerminator { offset: usize },

    /// 平铺的像素数据长度与宽高不符。
    #[error("pixel data holds {actual} bytes but a {width}x{height} RGB image needs {expected}")]
    InvalidBufferLength {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// 宽高过大，像素数据的字节数无法表示。
    #[error("a {width}x{height} RGB image is too large to address")]
    DimensionsTooLarge { width: usize, height: usize },

    /// 某一行的长度与第一行不一致，或不是 3 的倍数。
    #[error("row {row} holds {actual} bytes, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// 无法解析的密钥字符串。
    #[error("invalid key '{0}': expected five comma-separated integers x,y,t0,t1,t2")]
    InvalidKey(String),
}
