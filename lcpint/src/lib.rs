//! LCPINT - LCP cores as a stream of 32-bit integers
//!
//! This library normalizes a text corpus, parses it into locally consistent
//! cores, refines the parse to a requested depth and writes every core as
//! one unsigned 32-bit integer.
//!
//! ## Architecture
//!
//! - **lcpint-core**: core bit-string model, folding rule and traits (no I/O)
//! - **lcpint**: input normalization, the reference LCP builder, the integer
//!   stream writer and the run driver
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lcpint::{run, RunConfig};
//!
//! fn example() -> Result<(), lcpint::PipelineError> {
//!     let config = RunConfig::new("reads.txt").with_deepen_level(2);
//!     let summary = run(&config)?;
//!     println!("{} integers written to {}", summary.written, summary.output.display());
//!     Ok(())
//! }
//! ```

pub use lcpint_core::{
    // Data model
    Core, Lps,
    // Folding
    fold, fold_all,
    // Interfaces
    EncodedSink, StructureBuilder,
    // Configuration
    Alphabet, AlphabetSpec,
    // Errors
    LcpError,
};

pub mod cli;
pub mod config;
pub mod encoder;
pub mod error;
pub mod input;
pub mod lcp;
pub mod pipeline;
pub mod writer;

pub use encoder::{encode_into, encode_lps, EncodeStats};
pub use error::PipelineError;
pub use lcp::LcpBuilder;
pub use pipeline::{output_path, run, run_with_builder, RunConfig, RunSummary};
pub use writer::IntegerStreamWriter;
