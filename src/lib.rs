//! # imagecrypt 库
//!
//! 本库包含奇偶性隐写工具的核心逻辑：像素访问、位编解码与嵌入引擎，
//! 以及基于 `image` crate 的读写和命令行处理。

// 声明库包含的所有模块。

pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod handler;
pub mod image_io;
pub mod pixel;
pub mod steganography;

pub use error::{Result, StegoError};
pub use pixel::PixelBuffer;
pub use steganography::{Key, decode, decode_raw, encode};
