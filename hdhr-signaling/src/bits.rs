//! Bit-level cursor over a byte buffer.
//!
//! Every L1 signaling field is extracted through this reader: big-endian bit
//! order, most-significant bit of byte 0 first, reads crossing byte
//! boundaries freely. Each decode call owns its own cursor; there is no
//! shared parser state.

use crate::error::BitsExhausted;

/// Stateful reader extracting unsigned integers of 1..=32 bits at a time.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Total length of the buffer in bits.
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8
    }

    /// Current offset in bits from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bits left before the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.bit_len() - self.pos
    }

    fn check(&self, count: usize) -> Result<(), BitsExhausted> {
        if self.pos + count > self.bit_len() {
            return Err(BitsExhausted {
                offset: self.pos,
                wanted: count,
                len: self.bit_len(),
            });
        }
        Ok(())
    }

    /// Read `count` bits (1..=32) as an unsigned integer, MSB first, and
    /// advance the cursor.
    ///
    /// The bounds check happens before any bit is consumed; a failed read
    /// leaves the cursor where it was.
    pub fn read(&mut self, count: u32) -> Result<u32, BitsExhausted> {
        debug_assert!((1..=32).contains(&count));
        self.check(count as usize)?;

        let mut value: u32 = 0;
        for _ in 0..count {
            let bit = (self.data[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | u32::from(bit);
            self.pos += 1;
        }
        Ok(value)
    }

    /// Read `count` bits (1..=64) into a 64-bit accumulator.
    ///
    /// Wide fields are assembled from two 32-bit reads.
    pub fn read_long(&mut self, count: u32) -> Result<u64, BitsExhausted> {
        debug_assert!((1..=64).contains(&count));
        self.check(count as usize)?;

        if count <= 32 {
            return self.read(count).map(u64::from);
        }
        let high = self.read(count - 32)?;
        let low = self.read(32)?;
        Ok((u64::from(high) << 32) | u64::from(low))
    }

    /// Discard `count` bits without interpreting them (reserved fields,
    /// padding runs).
    pub fn skip(&mut self, count: usize) -> Result<(), BitsExhausted> {
        self.check(count)?;
        self.pos += count;
        Ok(())
    }
}

/// Bit-packing counterpart of [`BitReader`], used by tests to construct
/// signaling fixtures field by field.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct BitWriter {
    bits: Vec<bool>,
}

#[cfg(test)]
impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `count` bits of `value`, MSB first.
    pub fn push(&mut self, value: u64, count: u32) {
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Pack into bytes, zero-padding the final partial byte.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut out = vec![0u8; (self.bits.len() + 7) / 8];
        for (i, bit) in self.bits.iter().enumerate() {
            if *bit {
                out[i / 8] |= 1 << (7 - i % 8);
            }
        }
        out
    }

    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }
}
