// libpicopass/src/protocol/bit_buffer.rs

use crate::{Error, Result};

/// Byte buffer with an exact bit length and a fixed byte capacity.
///
/// Frames on the air are not necessarily byte aligned, so the bit count is
/// tracked separately from the stored bytes. Writes never grow the buffer
/// beyond the capacity chosen at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitBuffer {
    data: Vec<u8>,
    size_bits: usize,
    capacity: usize,
}

impl BitBuffer {
    /// Empty buffer able to hold `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            size_bits: 0,
            capacity,
        }
    }

    /// Buffer holding `size_bits` bits taken from `bytes`. Bits beyond
    /// `size_bits` in the final byte are kept as given.
    pub fn from_bits(bytes: &[u8], size_bits: usize) -> Result<Self> {
        let needed = size_bits.div_ceil(8);
        if bytes.len() < needed {
            return Err(Error::InvalidLength {
                expected: needed,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            data: bytes[..needed].to_vec(),
            size_bits,
            capacity: needed,
        })
    }

    /// Byte-aligned buffer holding exactly `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
            size_bits: bytes.len() * 8,
            capacity: bytes.len(),
        }
    }

    pub fn size_bits(&self) -> usize {
        self.size_bits
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.size_bits == 0
    }

    pub fn byte(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn reset(&mut self) {
        self.data.clear();
        self.size_bits = 0;
    }

    /// Replace the contents with `bytes`.
    pub fn copy_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > self.capacity {
            return Err(Error::BufferOverflow {
                capacity: self.capacity,
                requested: bytes.len(),
            });
        }
        self.data.clear();
        self.data.extend_from_slice(bytes);
        self.size_bits = bytes.len() * 8;
        Ok(())
    }

    /// Append one whole byte. The current contents must be byte aligned.
    pub fn append_byte(&mut self, byte: u8) -> Result<()> {
        if self.data.len() >= self.capacity {
            return Err(Error::BufferOverflow {
                capacity: self.capacity,
                requested: self.data.len() + 1,
            });
        }
        if self.size_bits % 8 != 0 {
            return Err(Error::InvalidLength {
                expected: self.data.len() * 8,
                actual: self.size_bits,
            });
        }
        self.data.push(byte);
        self.size_bits += 8;
        Ok(())
    }
}
