//! Data model: cores and the parse structure that owns them

mod lps;
mod parse_core;

pub use lps::Lps;
pub use parse_core::Core;
