//! # 像素访问模块
//!
//! 以逻辑坐标 (x, y) 访问按行优先、通道交错 (R,G,B) 存储的像素数据。

use crate::error::{Result, StegoError};

/// 每个像素的通道数 (R, G, B)。
pub const CHANNELS: usize = 3;

/// 按行优先存储的 RGB 像素缓冲区。
///
/// 每行恰好 `3 * width` 字节，共 `height` 行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// 由平铺的像素数据构造缓冲区。
    ///
    /// # Errors
    ///
    /// * 宽高之积溢出时返回 [`StegoError::DimensionsTooLarge`]。
    /// * 当 `data.len()` 不等于 `3 * width * height` 时返回 [`StegoError::InvalidBufferLength`]。
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(StegoError::DimensionsTooLarge { width, height })?;
        if data.len() != expected {
            return Err(StegoError::InvalidBufferLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// 由逐行排列的像素数据构造缓冲区，宽度取自第一行。
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let row_len = rows.first().map_or(0, |row| row.as_ref().len());

        let mut data = Vec::with_capacity(row_len * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != row_len || row.len() % CHANNELS != 0 {
                return Err(StegoError::RaggedRow {
                    row: i,
                    expected: row_len - row_len % CHANNELS,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Self::new(row_len / CHANNELS, rows.len(), data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// 逐行迭代像素数据，宽度为 0 时每行都是空切片。
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let stride = self.width * CHANNELS;
        (0..self.height).map(move |y| &self.data[y * stride..(y + 1) * stride])
    }

    /// 读取 (x, y) 处像素的 `[r, g, b]`。
    ///
    /// x 从左到右，y 从上到下。
    pub fn get(&self, x: usize, y: usize) -> Result<[u8; 3]> {
        let i = self.offset(x, y)?;
        Ok([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// 将 (x, y) 处像素改写为 `rgb`。
    pub fn set(&mut self, x: usize, y: usize, rgb: [u8; 3]) -> Result<()> {
        let i = self.offset(x, y)?;
        self.data[i..i + CHANNELS].copy_from_slice(&rgb);
        Ok(())
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(StegoError::CoordinateOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y * self.width + x) * CHANNELS)
    }
}
