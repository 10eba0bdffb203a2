//! Bit layout and output format constants

/// Width of one storage block in bits
pub const BLOCK_BITS: usize = 32;

/// Width of a folded core in bits
pub const FOLD_WIDTH: usize = 32;

/// Deepen level used when none is requested
pub const DEFAULT_DEEPEN_LEVEL: u32 = 1;

/// Byte written after every encoded integer
pub const OUTPUT_SEPARATOR: u8 = b' ';

/// Infix placed between the input path and the level in output file names
pub const OUTPUT_LEVEL_INFIX: &str = "-level";

/// Extension appended to output file names
pub const OUTPUT_EXTENSION: &str = ".txt";
