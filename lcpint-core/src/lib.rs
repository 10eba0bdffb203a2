#![no_std]

//! LCP Core - bit-string model and 32-bit folding for parse cores
//!
//! This crate provides the data model shared by parse structure builders and
//! the integer encoder: block-packed cores, the ordered structure that owns
//! them, and the folding rule that turns each core into one `u32`. It does
//! no I/O.

extern crate alloc;

pub mod alphabet;
pub mod encoding;
pub mod error;
pub mod format;
pub mod model;
pub mod traits;
pub mod validation;

pub use alphabet::{Alphabet, AlphabetSpec};
pub use encoding::{fold, fold_all};
pub use error::*;
pub use format::*;
pub use model::{Core, Lps};
pub use traits::*;
pub use validation::{block_count, parse_deepen_level};
