//! Block count validation for block-packed bit strings
//!
//! Pure arithmetic on bit sizes and block counts with no I/O.

use crate::format::BLOCK_BITS;
use crate::LcpError;

/// Number of 32-bit blocks needed to hold `bit_size` bits
///
/// Zero bits need zero blocks.
pub const fn block_count(bit_size: usize) -> usize {
    bit_size.div_ceil(BLOCK_BITS)
}

/// Validate that `blocks` words are exactly enough for `bit_size` bits
pub const fn validate_blocks(bit_size: usize, blocks: usize) -> Result<(), LcpError> {
    if block_count(bit_size) != blocks {
        return Err(LcpError::BlockCountMismatch { bit_size, blocks });
    }
    Ok(())
}

/// Validate a packing field width
pub const fn validate_field_width(width: u32) -> Result<(), LcpError> {
    if width == 0 || width as usize > BLOCK_BITS {
        return Err(LcpError::InvalidFieldWidth(width));
    }
    Ok(())
}
