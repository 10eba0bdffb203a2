//! Alphabet configuration loading
//!
//! An alphabet file is a JSON object:
//!
//! ```json
//! { "symbols": "ACGTN", "case_insensitive": true }
//! ```

use std::fs;
use std::path::Path;

use lcpint_core::{Alphabet, AlphabetSpec};

use crate::error::{PipelineError, Result};

/// Load the alphabet at `path`, or the built-in DNA alphabet when `None`
pub fn load_alphabet(path: Option<&Path>) -> Result<Alphabet> {
    let Some(path) = path else {
        return Ok(Alphabet::dna());
    };

    let config_error = |reason: String| PipelineError::AlphabetConfig {
        path: path.to_path_buf(),
        reason,
    };

    let text = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    let spec: AlphabetSpec = serde_json::from_str(&text).map_err(|e| config_error(e.to_string()))?;
    let alphabet = Alphabet::from_spec(&spec).map_err(|e| config_error(e.to_string()))?;

    tracing::debug!(
        path = %path.display(),
        symbols = alphabet.len(),
        bits = alphabet.bits_per_symbol(),
        "loaded alphabet"
    );
    Ok(alphabet)
}
