//! Decimal integer stream output
//!
//! Each value is written as ASCII decimal followed by a single space. The
//! stream has no header, count or trailing newline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lcpint_core::format::constants::OUTPUT_SEPARATOR;
use lcpint_core::EncodedSink;

use crate::error::{PipelineError, Result};

/// Buffered writer of space-separated `u32` tokens
///
/// The underlying handle is closed when the writer is dropped, whether or
/// not [`finish`](Self::finish) was reached.
#[derive(Debug)]
pub struct IntegerStreamWriter<W: Write> {
    inner: BufWriter<W>,
    target: String,
    written: usize,
}

impl IntegerStreamWriter<File> {
    /// Create (or truncate) the output file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| PipelineError::OpenOutput {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened output");
        Ok(Self::new(file, path.display().to_string()))
    }
}

impl<W: Write> IntegerStreamWriter<W> {
    /// Wrap an arbitrary writer; `target` names it in error messages
    pub fn new(inner: W, target: impl Into<String>) -> Self {
        Self {
            inner: BufWriter::new(inner),
            target: target.into(),
            written: 0,
        }
    }

    /// Write one value and its separator
    pub fn write_value(&mut self, value: u32) -> Result<()> {
        write!(self.inner, "{value}")
            .and_then(|()| self.inner.write_all(&[OUTPUT_SEPARATOR]))
            .map_err(|source| self.write_error(source))?;
        self.written += 1;
        Ok(())
    }

    /// Tokens written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered output and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        let target = self.target;
        self.inner
            .into_inner()
            .map_err(|e| PipelineError::WriteOutput {
                target,
                source: e.into_error(),
            })
    }

    fn write_error(&self, source: std::io::Error) -> PipelineError {
        PipelineError::WriteOutput {
            target: self.target.clone(),
            source,
        }
    }
}

impl<W: Write> EncodedSink for IntegerStreamWriter<W> {
    type Output = usize;
    type Error = PipelineError;

    fn accept(&mut self, value: u32) -> Result<()> {
        self.write_value(value)
    }

    /// Flush and report the number of tokens written
    fn finish(mut self) -> Result<usize> {
        self.inner.flush().map_err(|source| self.write_error(source))?;
        Ok(self.written)
    }
}
