//! Folding cores into canonical 32-bit integers
//!
//! A core of width `B <= 32` folds to its value right-aligned in a `u32`.
//! Wider cores keep only their least significant 32 bits (bit indices
//! `31..=0`); every higher bit is discarded. Both cases read bits through
//! [`Core::bit`].

use crate::format::FOLD_WIDTH;
use crate::model::Core;
use crate::LcpError;

/// Fold a core into a 32-bit unsigned integer
pub fn fold(core: &Core) -> Result<u32, LcpError> {
    if core.bit_size() == 0 {
        return Err(LcpError::ZeroWidthCore);
    }

    let width = core.bit_size().min(FOLD_WIDTH);
    let mut result: u32 = 0;

    for index in (0..width).rev() {
        let bit = core.bit(index).unwrap_or(false);
        result = (result << 1) | u32::from(bit);
    }

    Ok(result)
}

/// Fold every core in order, pairing each result with the core's index
///
/// Failures are yielded in place so the caller decides how to report them;
/// the surviving values keep their relative order.
pub fn fold_all<'a, I>(cores: I) -> impl Iterator<Item = (usize, Result<u32, LcpError>)> + 'a
where
    I: IntoIterator<Item = &'a Core>,
    I::IntoIter: 'a,
{
    cores
        .into_iter()
        .enumerate()
        .map(|(index, core)| (index, fold(core)))
}
