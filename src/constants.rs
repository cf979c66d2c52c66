use crate::steganography::Key;

/// 命令行未提供 `--key` 时使用的默认密钥：
/// 从像素 (502, 402) 开始嵌入，结束序列为 `[12, 12, 13]`。
pub const DEFAULT_KEY: Key = Key::new(502, 402, 12, 12, 13);

/// 结束序列的字节数。
pub const TERMINATOR_LEN: usize = 3;

/// 每个消息字节占用的像素数。
/// 每个像素只在红色通道的奇偶性中保存 1 bit。
pub const PIXELS_PER_BYTE: usize = 8;

/// 解码时最多读取的 bit 数。
/// 实际上限还会被图像的对角线容量进一步限制。
pub const DEFAULT_MAX_SCAN_BITS: usize = 1 << 20;
