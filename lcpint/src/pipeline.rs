//! Run driver: normalize, build, deepen, encode, write

use std::path::{Path, PathBuf};

use lcpint_core::format::constants::{OUTPUT_EXTENSION, OUTPUT_LEVEL_INFIX};
use lcpint_core::{EncodedSink, StructureBuilder, DEFAULT_DEEPEN_LEVEL};

use crate::config::load_alphabet;
use crate::encoder::encode_into;
use crate::error::{PipelineError, Result};
use crate::input::read_normalized;
use crate::lcp::LcpBuilder;
use crate::writer::IntegerStreamWriter;

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Input corpus
    pub input: PathBuf,
    /// Refinement iterations applied before encoding
    pub deepen_level: u32,
    /// Optional JSON alphabet description
    pub alphabet: Option<PathBuf>,
}

impl RunConfig {
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            deepen_level: DEFAULT_DEEPEN_LEVEL,
            alphabet: None,
        }
    }

    pub fn with_deepen_level(mut self, level: u32) -> Self {
        self.deepen_level = level;
        self
    }

    pub fn with_alphabet<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.alphabet = Some(path.into());
        self
    }

    /// Where this run writes its integers
    pub fn output_path(&self) -> PathBuf {
        output_path(&self.input, self.deepen_level)
    }
}

/// `<input>-level<level>.txt`, concatenated literally
pub fn output_path(input: &Path, level: u32) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(OUTPUT_LEVEL_INFIX);
    name.push(level.to_string());
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub level: u32,
    /// Symbols left after normalization
    pub symbols: usize,
    /// Cores at the requested level
    pub cores: usize,
    /// Integers written
    pub written: usize,
    /// Cores skipped by the encoder
    pub skipped: usize,
}

/// Run the pipeline with the reference LCP builder
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let alphabet = load_alphabet(config.alphabet.as_deref())?;
    run_with_builder(config, &LcpBuilder::new(&alphabet))
}

/// Run the pipeline with any structure builder
pub fn run_with_builder<B>(config: &RunConfig, builder: &B) -> Result<RunSummary>
where
    B: StructureBuilder,
    PipelineError: From<B::Error>,
{
    let symbols = read_normalized(&config.input)?;
    let symbol_count = symbols.len();

    let mut lps = builder.build(&symbols)?;
    drop(symbols);
    builder.deepen(&mut lps, config.deepen_level)?;

    if lps.is_empty() {
        tracing::info!(
            level = config.deepen_level,
            "no cores at requested level, output will be empty"
        );
    }

    let output = config.output_path();
    let mut writer = IntegerStreamWriter::create(&output)?;
    let stats = encode_into(&lps, &mut writer)?;
    let written = writer.finish()?;

    let summary = RunSummary {
        output,
        level: config.deepen_level,
        symbols: symbol_count,
        cores: lps.len(),
        written,
        skipped: stats.skipped,
    };
    tracing::info!(
        output = %summary.output.display(),
        level = summary.level,
        symbols = summary.symbols,
        cores = summary.cores,
        written = summary.written,
        skipped = summary.skipped,
        "run complete"
    );
    Ok(summary)
}
