//! Error types for LCP core operations

/// Errors that can occur while modelling, packing or folding cores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcpError {
    /// Core has no significant bits
    ZeroWidthCore,
    /// Block storage does not match the declared bit size
    BlockCountMismatch { bit_size: usize, blocks: usize },
    /// Packed field width outside 1..=32
    InvalidFieldWidth(u32),
    /// Field value does not fit in the packing width
    FieldOverflow { value: u32, width: u32 },
    /// Alphabet is empty or lists a symbol twice
    InvalidAlphabet,
    /// Deepen level is not a decimal number
    InvalidLevel,
    /// Deepen level is negative
    NegativeLevel,
    /// Deepen level does not fit in 32 bits
    LevelOverflow,
}

impl core::fmt::Display for LcpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LcpError::ZeroWidthCore => write!(f, "core has a bit size of zero"),
            LcpError::BlockCountMismatch { bit_size, blocks } => write!(
                f,
                "core of {bit_size} bits cannot be stored in {blocks} blocks"
            ),
            LcpError::InvalidFieldWidth(width) => {
                write!(f, "field width {width} is outside 1..=32")
            }
            LcpError::FieldOverflow { value, width } => {
                write!(f, "value {value} does not fit in {width} bits")
            }
            LcpError::InvalidAlphabet => write!(f, "alphabet is empty or has duplicate symbols"),
            LcpError::InvalidLevel => write!(f, "deepen level must be a non-negative integer"),
            LcpError::NegativeLevel => write!(f, "deepen level must be non-negative"),
            LcpError::LevelOverflow => write!(f, "deepen level is too large"),
        }
    }
}

impl core::error::Error for LcpError {}

/// Result type for LCP core operations
pub type Result<T> = core::result::Result<T, LcpError>;
