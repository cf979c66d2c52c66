//! # 嵌入引擎模块
//!
//! 沿对角线 (每个 bit 使 x、y 各加 1) 把消息逐位写入红色通道的奇偶性，
//! 随后追加 3 字节的结束序列；解码时沿同一路径读取，直到再次遇到结束序列。

use crate::codec::{ByteAssembler, decode_bit, encode_bit, message_bit};
use crate::constants::{PIXELS_PER_BYTE, TERMINATOR_LEN};
use crate::error::{Result, StegoError};
use crate::pixel::PixelBuffer;
use std::fmt;
use std::str::FromStr;

/// 共享密钥：起始像素坐标加上结束序列。
///
/// 这不是加密密钥，只决定嵌入位置和消息的结束标记。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub x_start: usize,
    pub y_start: usize,
    pub terminator: [u8; TERMINATOR_LEN],
}

impl Key {
    pub const fn new(x_start: usize, y_start: usize, t0: u8, t1: u8, t2: u8) -> Self {
        Self {
            x_start,
            y_start,
            terminator: [t0, t1, t2],
        }
    }
}

impl FromStr for Key {
    type Err = StegoError;

    /// 解析 `"x,y,t0,t1,t2"` 形式的密钥。
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StegoError::InvalidKey(s.to_string());

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [x, y, t0, t1, t2] = parts[..] else {
            return Err(invalid());
        };

        let coordinate = |v: &str| v.parse::<usize>().map_err(|_| invalid());
        let byte = |v: &str| v.parse::<u8>().map_err(|_| invalid());

        Ok(Self::new(
            coordinate(x)?,
            coordinate(y)?,
            byte(t0)?,
            byte(t1)?,
            byte(t2)?,
        ))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [t0, t1, t2] = self.terminator;
        write!(f, "{},{},{},{},{}", self.x_start, self.y_start, t0, t1, t2)
    }
}

/// 对角线路径从起点到图像边缘能容纳的 bit 数。
pub fn capacity(pixels: &PixelBuffer, key: &Key) -> usize {
    pixels
        .width()
        .min(pixels.height())
        .saturating_sub(key.x_start.max(key.y_start))
}

/// 把 `message` 及结束序列写入 `pixels`。
///
/// 所有校验都在修改像素之前完成，失败时缓冲区保持原样。
///
/// # Errors
///
/// * [`StegoError::MessageContainsTerminator`]：结束序列会在消息内部或与消息尾部拼接时提前出现。
/// * [`StegoError::CoordinateOutOfBounds`]：消息加结束序列超出对角线容量。
pub fn encode(pixels: &mut PixelBuffer, message: &[u8], key: &Key) -> Result<()> {
    let payload = [message, key.terminator.as_slice()].concat();

    if let Some(offset) = payload
        .windows(TERMINATOR_LEN)
        .position(|window| window == key.terminator)
        .filter(|&offset| offset < message.len())
    {
        return Err(StegoError::MessageContainsTerminator { offset });
    }

    let bits = payload.len() * PIXELS_PER_BYTE;
    let available = capacity(pixels, key);
    if bits > available {
        // 报告对角线上第一个真正落在图像外的像素
        let steps = pixels
            .width()
            .saturating_sub(key.x_start)
            .min(pixels.height().saturating_sub(key.y_start));
        return Err(StegoError::CoordinateOutOfBounds {
            x: key.x_start + steps,
            y: key.y_start + steps,
            width: pixels.width(),
            height: pixels.height(),
        });
    }

    log::debug!(
        "encoding {} bits from ({}, {}), capacity {} bits",
        bits,
        key.x_start,
        key.y_start,
        available
    );

    (0..bits).try_for_each(|i| {
        let (x, y) = (key.x_start + i, key.y_start + i);
        let [r, g, b] = pixels.get(x, y)?;
        pixels.set(x, y, [encode_bit(r, message_bit(&payload, i)), g, b])
    })
}

/// 读取隐藏的消息，返回值包含末尾的结束序列。
///
/// 实际读取上限为 `max_bits` 与图像容量中较小者，因此不会越界访问。
///
/// # Errors
///
/// 在上限内没有遇到结束序列时返回 [`StegoError::DecodeScanExhausted`]。
pub fn decode_raw(pixels: &PixelBuffer, key: &Key, max_bits: usize) -> Result<Vec<u8>> {
    let bound = max_bits.min(capacity(pixels, key));
    log::debug!(
        "scanning up to {} bits from ({}, {})",
        bound,
        key.x_start,
        key.y_start
    );

    let mut assembler = ByteAssembler::default();
    let mut output = Vec::new();

    for i in 0..bound {
        let [r, _, _] = pixels.get(key.x_start + i, key.y_start + i)?;

        if let Some(byte) = assembler.push(decode_bit(r)) {
            output.push(byte);
            if output.ends_with(&key.terminator) {
                log::debug!("end sequence found after {} bytes", output.len());
                return Ok(output);
            }
        }
    }

    Err(StegoError::DecodeScanExhausted { bits_read: bound })
}

/// 读取隐藏的消息并去掉结束序列。
pub fn decode(pixels: &PixelBuffer, key: &Key, max_bits: usize) -> Result<Vec<u8>> {
    let mut message = decode_raw(pixels, key, max_bits)?;
    message.truncate(message.len() - TERMINATOR_LEN);
    Ok(message)
}
