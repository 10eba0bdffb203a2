//! Parse structure builder interface

use crate::model::Lps;

/// Builds and refines the parse structure for a normalized symbol stream
///
/// Releasing a structure is dropping its [`Lps`].
pub trait StructureBuilder {
    type Error;

    /// Build the base-level structure (level 0)
    fn build(&self, symbols: &[u8]) -> Result<Lps, Self::Error>;

    /// Refine `lps` in place until it reflects `level` iterations
    ///
    /// May change both the number of cores and their widths.
    fn deepen(&self, lps: &mut Lps, level: u32) -> Result<(), Self::Error>;
}
