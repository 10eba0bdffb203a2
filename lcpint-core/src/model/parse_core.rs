//! Block-packed bit string of a single parse core
//!
//! Bit index 0 is the least significant bit of the whole value. Blocks are
//! stored most significant first, so bit `i` lives in
//! `blocks[len - 1 - i / 32]` at position `i % 32`. Bits of the first block
//! at or above `bit_size` are padding.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::format::BLOCK_BITS;
use crate::validation::{block_count, validate_blocks, validate_field_width};
use crate::LcpError;

/// A single parse unit's bit string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Core {
    /// Number of significant bits
    bit_size: usize,
    /// Fixed-width words, most significant block first
    blocks: Vec<u32>,
    /// First symbol covered by this core in the normalized input
    start: usize,
    /// One past the last covered symbol
    end: usize,
}

impl Core {
    /// Create a core from its bit size and block storage
    ///
    /// The block count must be exactly `ceil(bit_size / 32)`. A zero-width
    /// core with no blocks is accepted here and rejected by the encoder.
    pub fn new(bit_size: usize, blocks: Vec<u32>) -> Result<Self, LcpError> {
        validate_blocks(bit_size, blocks.len())?;
        Ok(Self {
            bit_size,
            blocks,
            start: 0,
            end: 0,
        })
    }

    /// Pack fixed-width fields into a new core, first field most significant
    pub fn pack(fields: &[u32], width: u32) -> Result<Self, LcpError> {
        validate_field_width(width)?;

        let width_bits = width as usize;
        let bit_size = fields.len() * width_bits;
        let mut blocks = vec![0u32; block_count(bit_size)];

        for (position, &value) in fields.iter().enumerate() {
            if width < 32 && value >> width != 0 {
                return Err(LcpError::FieldOverflow { value, width });
            }

            // Lowest bit index occupied by this field
            let base = (fields.len() - 1 - position) * width_bits;
            for offset in 0..width_bits {
                if (value >> offset) & 1 == 1 {
                    let (block, shift) = locate(blocks.len(), base + offset);
                    blocks[block] |= 1 << shift;
                }
            }
        }

        Ok(Self {
            bit_size,
            blocks,
            start: 0,
            end: 0,
        })
    }

    /// Attach the symbol span this core covers
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Number of significant bits
    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    /// Block storage, most significant block first
    pub fn blocks(&self) -> &[u32] {
        &self.blocks
    }

    /// Symbol span as `(start, end)`, end exclusive
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Read bit `index`, counting from the least significant bit
    ///
    /// Returns `None` for indices at or above `bit_size`.
    pub fn bit(&self, index: usize) -> Option<bool> {
        if index >= self.bit_size {
            return None;
        }
        let (block, shift) = locate(self.blocks.len(), index);
        Some((self.blocks[block] >> shift) & 1 == 1)
    }
}

/// Map a bit index to `(block, shift)` for `block_len` blocks
#[inline]
fn locate(block_len: usize, index: usize) -> (usize, u32) {
    (
        block_len - 1 - index / BLOCK_BITS,
        (index % BLOCK_BITS) as u32,
    )
}

/// Renders the significant bits most significant first
impl fmt::Binary for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in (0..self.bit_size).rev() {
            let digit = if self.bit(index) == Some(true) { '1' } else { '0' };
            fmt::Write::write_char(f, digit)?;
        }
        Ok(())
    }
}
