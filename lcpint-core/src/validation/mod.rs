//! Validation utilities
//!
//! Pure validation and parsing functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{block_count, validate_blocks, validate_field_width};
pub use parsing::parse_deepen_level;
