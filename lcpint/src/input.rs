//! Input reading and whitespace normalization
//!
//! The raw input is only borrowed while it is filtered; the caller receives
//! an owned buffer holding the non-whitespace bytes in their original order.

use std::fs::File;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// Check for C-locale whitespace: space, `\t`, `\n`, `\v`, `\f` and `\r`
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab.
#[inline]
pub fn is_c_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Copy the non-whitespace bytes of `raw` into a new buffer
pub fn normalize(raw: &[u8]) -> Result<Vec<u8>> {
    let mut symbols = Vec::new();
    symbols
        .try_reserve_exact(raw.len())
        .map_err(|_| PipelineError::Allocation {
            what: "normalized symbol buffer",
            bytes: raw.len(),
        })?;

    symbols.extend(raw.iter().copied().filter(|&b| !is_c_whitespace(b)));
    Ok(symbols)
}

/// Read `path` and return its normalized symbol stream
pub fn read_normalized<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PipelineError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    let len = file
        .metadata()
        .map_err(|source| PipelineError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    // Empty files cannot be mapped on every platform
    if len == 0 {
        tracing::debug!(path = %path.display(), "input is empty");
        return Ok(Vec::new());
    }

    let symbols = read_and_normalize(&file, path)?;
    tracing::debug!(
        path = %path.display(),
        raw_bytes = len,
        symbols = symbols.len(),
        "normalized input"
    );
    Ok(symbols)
}

#[cfg(feature = "mmap")]
fn read_and_normalize(file: &File, path: &Path) -> Result<Vec<u8>> {
    use memmap2::MmapOptions;

    // SAFETY: Read-only mapping; the map is dropped before this function
    // returns and only the filtered copy escapes.
    let mmap = unsafe {
        MmapOptions::new()
            .map(file)
            .map_err(|source| PipelineError::ReadInput {
                path: path.to_path_buf(),
                source,
            })?
    };

    normalize(&mmap)
}

#[cfg(not(feature = "mmap"))]
fn read_and_normalize(file: &File, path: &Path) -> Result<Vec<u8>> {
    use std::io::Read;

    let mut raw = Vec::new();
    (&*file)
        .read_to_end(&mut raw)
        .map_err(|source| PipelineError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;

    normalize(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_normalize_strips_all_c_whitespace() {
        let raw = b" AC\tG\nT\x0BA\x0CC\rG ";
        assert_eq!(normalize(raw).unwrap(), b"ACGTACG");
    }

    #[test]
    fn test_normalize_keeps_other_bytes() {
        let raw = b"a-b_c\x00d\x7F";
        assert_eq!(normalize(raw).unwrap(), raw.to_vec());
    }

    #[test]
    fn test_normalize_empty_results() {
        assert!(normalize(b"").unwrap().is_empty());
        assert!(normalize(b" \n\t\r\x0B\x0C").unwrap().is_empty());
    }

    #[test]
    fn test_read_normalized_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"GAT\nTACA\n").unwrap();
        file.flush().unwrap();

        assert_eq!(read_normalized(file.path()).unwrap(), b"GATTACA");
    }

    #[test]
    fn test_read_normalized_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(read_normalized(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_normalized_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_normalized(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, PipelineError::OpenInput { .. }));
    }
}
