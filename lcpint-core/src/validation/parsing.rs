//! Parsing utilities for command-line values
//!
//! Pure parsing functions with no I/O dependencies.

use crate::LcpError;

/// Parse a deepen level
///
/// Only plain decimal digits are accepted. A leading `-` followed by digits
/// is reported as [`LcpError::NegativeLevel`] so callers can tell a negative
/// level from garbage.
pub fn parse_deepen_level(level_str: &str) -> Result<u32, LcpError> {
    if let Some(rest) = level_str.strip_prefix('-') {
        return match parse_u32(rest) {
            Ok(_) | Err(LcpError::LevelOverflow) => Err(LcpError::NegativeLevel),
            Err(e) => Err(e),
        };
    }

    parse_u32(level_str)
}

/// Parse a u32 from ASCII digits with overflow checking
fn parse_u32(s: &str) -> Result<u32, LcpError> {
    if s.is_empty() {
        return Err(LcpError::InvalidLevel);
    }

    let mut result: u32 = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(LcpError::InvalidLevel);
        }

        let digit = u32::from(byte - b'0');

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(LcpError::LevelOverflow)?;
    }

    Ok(result)
}
