//! Storage and output format definitions
//!
//! Pure constants describing how cores are laid out in blocks and how
//! encoded integers are rendered. No I/O.

pub mod constants;

pub use constants::{BLOCK_BITS, DEFAULT_DEEPEN_LEVEL, FOLD_WIDTH};
