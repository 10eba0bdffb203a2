//! Abstract interfaces between the pipeline stages
//!
//! Traits are pure interfaces - no concrete implementations beyond the
//! in-memory `Vec<u32>` sink.

pub mod builder;
pub mod sink;

pub use builder::StructureBuilder;
pub use sink::EncodedSink;
