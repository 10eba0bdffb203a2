//! Symbol alphabet: the explicit configuration value handed to builders
//!
//! Each symbol byte maps to a small integer code. Codes are assigned in
//! declaration order and packed at the minimal width able to hold the
//! largest one.

use alloc::string::String;
use hashbrown::HashMap;

use crate::LcpError;

/// Serializable description of an alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct AlphabetSpec {
    /// Symbols in code order; the first symbol gets code 0
    pub symbols: String,
    /// Map lowercase and uppercase ASCII letters to the same code
    #[cfg_attr(feature = "serde", serde(default))]
    pub case_insensitive: bool,
}

/// Symbol-to-code table with a fixed code width
#[derive(Debug, Clone)]
pub struct Alphabet {
    codes: HashMap<u8, u32>,
    bits_per_symbol: u32,
    size: usize,
}

impl Alphabet {
    /// Nucleotide alphabet: A, C, G, T as 0..=3, case-insensitive, 2 bits
    pub fn dna() -> Self {
        let mut codes = HashMap::with_capacity(8);
        for (code, symbol) in (0u32..).zip(*b"ACGT") {
            codes.insert(symbol, code);
            codes.insert(symbol.to_ascii_lowercase(), code);
        }

        Self {
            codes,
            bits_per_symbol: 2,
            size: 4,
        }
    }

    /// Build an alphabet from its description
    pub fn from_spec(spec: &AlphabetSpec) -> Result<Self, LcpError> {
        if spec.symbols.is_empty() {
            return Err(LcpError::InvalidAlphabet);
        }

        let mut codes = HashMap::with_capacity(spec.symbols.len() * 2);
        let mut size = 0usize;

        for (code, symbol) in spec.symbols.bytes().enumerate() {
            let code = code as u32;
            if codes.insert(symbol, code).is_some() {
                return Err(LcpError::InvalidAlphabet);
            }
            if spec.case_insensitive && symbol.is_ascii_alphabetic() {
                let other = if symbol.is_ascii_uppercase() {
                    symbol.to_ascii_lowercase()
                } else {
                    symbol.to_ascii_uppercase()
                };
                if codes.insert(other, code).is_some() {
                    return Err(LcpError::InvalidAlphabet);
                }
            }
            size += 1;
        }

        Ok(Self {
            codes,
            bits_per_symbol: bits_for(size as u32 - 1),
            size,
        })
    }

    /// Code for `symbol`, if it belongs to the alphabet
    pub fn code(&self, symbol: u8) -> Option<u32> {
        self.codes.get(&symbol).copied()
    }

    /// Width in bits of every symbol code
    pub fn bits_per_symbol(&self) -> u32 {
        self.bits_per_symbol
    }

    /// Number of distinct codes
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the alphabet has no symbols
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

/// Minimal bit width able to hold `value`, at least 1
pub const fn bits_for(value: u32) -> u32 {
    if value == 0 {
        1
    } else {
        u32::BITS - value.leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dna_alphabet() {
        let dna = Alphabet::dna();
        assert_eq!(dna.bits_per_symbol(), 2);
        assert_eq!(dna.len(), 4);
        assert_eq!(dna.code(b'A'), Some(0));
        assert_eq!(dna.code(b'c'), Some(1));
        assert_eq!(dna.code(b'G'), Some(2));
        assert_eq!(dna.code(b't'), Some(3));
        assert_eq!(dna.code(b'N'), None);
        assert!(!dna.is_empty());
    }

    #[test]
    fn test_from_spec_widths() {
        let single = Alphabet::from_spec(&AlphabetSpec {
            symbols: String::from("x"),
            case_insensitive: false,
        })
        .unwrap();
        assert_eq!(single.bits_per_symbol(), 1);

        let five = Alphabet::from_spec(&AlphabetSpec {
            symbols: String::from("ACGTN"),
            case_insensitive: false,
        })
        .unwrap();
        assert_eq!(five.bits_per_symbol(), 3);
        assert_eq!(five.code(b'N'), Some(4));
        assert_eq!(five.code(b'a'), None);
    }

    #[test]
    fn test_from_spec_rejects_invalid() {
        let empty = AlphabetSpec {
            symbols: String::new(),
            case_insensitive: false,
        };
        assert_eq!(
            Alphabet::from_spec(&empty).unwrap_err(),
            LcpError::InvalidAlphabet
        );

        let duplicate = AlphabetSpec {
            symbols: String::from("ACA"),
            case_insensitive: false,
        };
        assert_eq!(
            Alphabet::from_spec(&duplicate).unwrap_err(),
            LcpError::InvalidAlphabet
        );

        // 'a' and 'A' collide once case is folded
        let folded = AlphabetSpec {
            symbols: String::from("Aa"),
            case_insensitive: true,
        };
        assert_eq!(
            Alphabet::from_spec(&folded).unwrap_err(),
            LcpError::InvalidAlphabet
        );
    }

    #[test]
    fn test_bits_for() {
        assert_eq!(bits_for(0), 1);
        assert_eq!(bits_for(1), 1);
        assert_eq!(bits_for(2), 2);
        assert_eq!(bits_for(3), 2);
        assert_eq!(bits_for(4), 3);
        assert_eq!(bits_for(u32::MAX), 32);
    }
}
