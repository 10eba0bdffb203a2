//! Locally consistent parsing
//!
//! A reference [`StructureBuilder`](lcpint_core::StructureBuilder): the base
//! level finds cores over alphabet codes, and every deepen iteration labels
//! each core against its predecessor by deterministic coin tossing and finds
//! cores again over those labels.

mod builder;
mod coin_toss;
mod landmarks;

pub use builder::LcpBuilder;
pub use coin_toss::coin_toss;
pub use landmarks::find_core_spans;
