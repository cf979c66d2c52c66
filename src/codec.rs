//! # 位编解码模块
//!
//! 用红色通道值的奇偶性表示 1 bit：偶数为 `1`，奇数为 `0`。
//! 每次写入对通道值的改动不超过 ±1。

/// 把 `bit` 写入红色通道值 `r`，返回新的通道值。
///
/// * `0`：偶数加 1 变为奇数，奇数保持不变。
/// * `1`：奇数变为偶数 (255 减 1，其余加 1)，偶数保持不变。
pub fn encode_bit(r: u8, bit: u8) -> u8 {
    let odd = r % 2 == 1;
    match (bit & 1, odd) {
        (0, false) => r + 1,
        (1, true) if r == u8::MAX => r - 1,
        (1, true) => r + 1,
        _ => r,
    }
}

/// 从红色通道值读出 1 bit：偶数为 `1`，奇数为 `0`。
pub fn decode_bit(r: u8) -> u8 {
    (r % 2 == 0) as u8
}

/// 取消息中第 `index` 个 bit，每个字节内从最低位开始。
pub fn message_bit(bytes: &[u8], index: usize) -> u8 {
    (bytes[index / 8] >> (index % 8)) & 1
}

/// 反转 8 位值的位序。
pub fn reverse_bits_8(value: u8) -> u8 {
    (0..8).fold(0, |acc, i| (acc << 1) | ((value >> i) & 1))
}

/// 解码时的字节组装器。
///
/// 新到的 bit 从低位移入，凑满 8 bit 后反转位序得到原始字节。
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteAssembler {
    working: u8,
    count: u8,
}

impl ByteAssembler {
    /// 移入一个 bit；凑满一个字节时返回该字节并重置状态。
    pub fn push(&mut self, bit: u8) -> Option<u8> {
        self.working = (self.working << 1) | (bit & 1);
        self.count += 1;

        if self.count < 8 {
            return None;
        }

        let byte = reverse_bits_8(self.working);
        *self = Self::default();
        Some(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_parity_matches_bit() {
        for r in 0..=u8::MAX {
            for bit in 0..=1u8 {
                let encoded = encode_bit(r, bit);
                assert_eq!(encoded % 2, 1 - bit, "r = {r}, bit = {bit}");
                assert!(encoded.abs_diff(r) <= 1, "r = {r}, bit = {bit}");
                assert_eq!(decode_bit(encoded), bit);
            }
        }
    }

    #[test]
    fn encoding_one_into_255_does_not_wrap() {
        assert_eq!(encode_bit(255, 1), 254);
        assert_eq!(encode_bit(255, 0), 255);
        assert_eq!(encode_bit(254, 0), 255);
    }

    #[test]
    fn reverse_bits_is_an_involution() {
        for x in 0..=u8::MAX {
            assert_eq!(reverse_bits_8(reverse_bits_8(x)), x);
            assert_eq!(reverse_bits_8(x), x.reverse_bits());
        }
        assert_eq!(reverse_bits_8(0b0000_0001), 0b1000_0000);
        assert_eq!(reverse_bits_8(0b0001_0010), 0b0100_1000);
    }

    #[test]
    fn message_bits_are_lsb_first() {
        // 'H' = 0x48 = 0b0100_1000
        let bits: Vec<u8> = (0..8).map(|i| message_bit(b"H", i)).collect();
        assert_eq!(bits, [0, 0, 0, 1, 0, 0, 1, 0]);
        assert_eq!(message_bit(b"HI", 8), 1);
    }

    #[test]
    fn assembler_recovers_lsb_first_bytes() {
        let mut assembler = ByteAssembler::default();
        let mut out = Vec::new();
        for i in 0..16 {
            if let Some(byte) = assembler.push(message_bit(b"HI", i)) {
                out.push(byte);
            }
        }
        assert_eq!(out, b"HI");
    }
}
