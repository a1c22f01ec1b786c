//! 256-bit big-endian scalars.
//!
//! Scalars here are plain 256-bit integers, deliberately not reduced
//! modulo the group order: callers that consume attacker-supplied
//! exponents rely on multiplication treating the full integer.

/// A 256-bit multiplication scalar, stored as big-endian bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scalar(pub [u8; 32]);

impl Scalar {
    pub const BYTES: usize = 32;

    pub const ZERO: Scalar = Scalar([0u8; 32]);

    pub fn from_be_bytes(bytes: [u8; 32]) -> Scalar {
        Scalar(bytes)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Bit `i`, counting from the least significant bit.
    pub fn bit(&self, i: usize) -> bool {
        debug_assert!(i < 256);
        (self.0[31 - (i / 8)] >> (i % 8)) & 1 == 1
    }

    /// Iterates over all 256 bits from most significant to least
    /// significant, as a double-and-add schedule.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..256).rev().map(move |i| self.bit(i))
    }

    /// Extracts the `c`-bit window whose least significant bit is at
    /// position `pos`. Windows may run off the top end of the scalar;
    /// missing bits read as zero.
    pub fn window(&self, pos: usize, c: usize) -> usize {
        debug_assert!(c <= usize::BITS as usize - 1);
        let mut acc = 0usize;
        for i in (0..c).rev() {
            acc <<= 1;
            if pos + i < 256 && self.bit(pos + i) {
                acc |= 1;
            }
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_detection() {
        assert!(Scalar::ZERO.is_zero());
        let mut b = [0u8; 32];
        b[31] = 1;
        assert!(!Scalar::from_be_bytes(b).is_zero());
    }

    #[test]
    fn bit_order_is_big_endian() {
        let mut b = [0u8; 32];
        b[31] = 0b0000_0101;
        b[0] = 0x80;
        let s = Scalar::from_be_bytes(b);
        assert!(s.bit(0));
        assert!(!s.bit(1));
        assert!(s.bit(2));
        assert!(s.bit(255));
        assert!(!s.bit(254));

        let mut bits = s.bits();
        assert_eq!(bits.next(), Some(true)); // bit 255
        assert_eq!(bits.last(), Some(true)); // bit 0
    }

    #[test]
    fn window_extraction() {
        let mut b = [0u8; 32];
        b[31] = 0xb4; // 1011_0100
        let s = Scalar::from_be_bytes(b);
        assert_eq!(s.window(0, 4), 0x4);
        assert_eq!(s.window(4, 4), 0xb);
        assert_eq!(s.window(2, 3), 0b101);
        // Runs past bit 255: the missing high bits read as zero.
        assert_eq!(s.window(252, 7), 0);
    }
}
