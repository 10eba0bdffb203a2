//! Command-line arguments

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use lcpint_core::{parse_deepen_level, DEFAULT_DEEPEN_LEVEL};

use crate::pipeline::RunConfig;

#[derive(Debug, Parser)]
#[command(name = "lcpint", author, version, long_about = None)]
#[command(
    about = "Parse a corpus into LCP cores and write each core as a 32-bit integer",
    after_help = "Output is written to <INPUT_FILE>-level<DEEPEN_LEVEL>.txt"
)]
pub struct Cli {
    /// Input corpus; whitespace is ignored
    #[arg(short = 'i', value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Number of refinement iterations applied before encoding
    #[arg(
        short = 'd',
        value_name = "DEEPEN_LEVEL",
        default_value_t = DEFAULT_DEEPEN_LEVEL,
        value_parser = parse_deepen_level,
        allow_negative_numbers = true
    )]
    pub deepen_level: u32,

    /// JSON alphabet description (defaults to A, C, G, T)
    #[arg(short = 'a', value_name = "ALPHABET_JSON")]
    pub alphabet: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            input: self.input,
            deepen_level: self.deepen_level,
            alphabet: self.alphabet,
        }
    }
}

/// Parse a full argument vector, program name first
pub fn parse_args<I, T>(args: I) -> Result<RunConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(Cli::into_config)
}
