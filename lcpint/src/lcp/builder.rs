//! Reference locally consistent parse builder

use std::ops::Range;

use lcpint_core::alphabet::bits_for;
use lcpint_core::{Alphabet, Core, LcpError, Lps, StructureBuilder};

use super::coin_toss::coin_toss;
use super::landmarks::find_core_spans;

/// Builds LCP structures using a borrowed alphabet
#[derive(Debug, Clone, Copy)]
pub struct LcpBuilder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> LcpBuilder<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Map symbols to codes; unknown symbols become code 0
    fn encode_symbols(&self, symbols: &[u8]) -> Vec<u32> {
        let mut unknown = 0usize;
        let labels = symbols
            .iter()
            .map(|&symbol| {
                self.alphabet.code(symbol).unwrap_or_else(|| {
                    unknown += 1;
                    0
                })
            })
            .collect();

        if unknown > 0 {
            tracing::warn!(unknown, "symbols outside the alphabet were mapped to code 0");
        }
        labels
    }

    /// One refinement iteration over `cores`
    fn refine(&self, cores: &[Core]) -> Result<Vec<Core>, LcpError> {
        if cores.len() < 2 {
            return Ok(Vec::new());
        }

        let labels: Vec<u32> = cores
            .windows(2)
            .map(|pair| coin_toss(&pair[0], &pair[1]))
            .collect();
        let spans: Vec<(usize, usize)> = cores[1..].iter().map(Core::span).collect();
        let width = labels.iter().copied().max().map_or(1, bits_for);

        pack_spans(&labels, &spans, width)
    }
}

impl StructureBuilder for LcpBuilder<'_> {
    type Error = LcpError;

    fn build(&self, symbols: &[u8]) -> Result<Lps, Self::Error> {
        let labels = self.encode_symbols(symbols);
        let spans: Vec<(usize, usize)> = (0..labels.len()).map(|i| (i, i + 1)).collect();
        let cores = pack_spans(&labels, &spans, self.alphabet.bits_per_symbol())?;

        tracing::debug!(symbols = symbols.len(), cores = cores.len(), "built base level");
        Ok(Lps::new(cores))
    }

    fn deepen(&self, lps: &mut Lps, level: u32) -> Result<(), Self::Error> {
        if level <= lps.level() {
            tracing::debug!(
                current = lps.level(),
                requested = level,
                "structure already at requested level"
            );
            return Ok(());
        }

        while lps.level() < level {
            if lps.is_empty() {
                lps.advance_to(level);
                tracing::debug!(level, "structure exhausted");
                break;
            }
            let next = self.refine(lps.cores())?;
            lps.advance(next);
            tracing::debug!(level = lps.level(), cores = lps.len(), "deepened");
        }

        Ok(())
    }
}

/// Find cores over `labels` and pack each one at `width` bits per label
///
/// `spans[i]` is the symbol span covered by label `i`.
fn pack_spans(
    labels: &[u32],
    spans: &[(usize, usize)],
    width: u32,
) -> Result<Vec<Core>, LcpError> {
    find_core_spans(labels)
        .into_iter()
        .map(|Range { start, end }| {
            let symbol_start = spans[start].0;
            let symbol_end = spans[end - 1].1;
            Ok(Core::pack(&labels[start..end], width)?.with_span(symbol_start, symbol_end))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcpint_core::fold;

    fn folded(lps: &Lps) -> Vec<u32> {
        lps.cores().iter().map(|core| fold(core).unwrap()).collect()
    }

    #[test]
    fn test_build_gattaca() {
        let alphabet = Alphabet::dna();
        let builder = LcpBuilder::new(&alphabet);
        let lps = builder.build(b"GATTACA").unwrap();

        assert_eq!(lps.level(), 0);
        assert_eq!(folded(&lps), vec![0b100011, 0b0011_1100, 0b110001]);
        let spans: Vec<_> = lps.cores().iter().map(Core::span).collect();
        assert_eq!(spans, vec![(0, 3), (1, 5), (3, 6)]);
    }

    #[test]
    fn test_build_is_case_insensitive() {
        let alphabet = Alphabet::dna();
        let builder = LcpBuilder::new(&alphabet);
        assert_eq!(
            builder.build(b"gattaca").unwrap(),
            builder.build(b"GATTACA").unwrap()
        );
    }

    #[test]
    fn test_build_empty_input() {
        let alphabet = Alphabet::dna();
        let builder = LcpBuilder::new(&alphabet);
        let lps = builder.build(b"").unwrap();
        assert!(lps.is_empty());
    }

    #[test]
    fn test_unknown_symbols_map_to_zero() {
        let alphabet = Alphabet::dna();
        let builder = LcpBuilder::new(&alphabet);
        // N reads as A
        assert_eq!(
            builder.build(b"GNTTNCN").unwrap(),
            builder.build(b"GATTACA").unwrap()
        );
    }

    #[test]
    fn test_deepen_zero_keeps_base() {
        let alphabet = Alphabet::dna();
        let builder = LcpBuilder::new(&alphabet);
        let mut lps = builder.build(b"GATTACA").unwrap();
        let base = lps.clone();

        builder.deepen(&mut lps, 0).unwrap();
        assert_eq!(lps, base);
    }

    #[test]
    fn test_deepen_exhausts_short_input() {
        let alphabet = Alphabet::dna();
        let builder = LcpBuilder::new(&alphabet);
        let mut lps = builder.build(b"GATTACA").unwrap();

        // Three cores give two labels, too few for a landmark
        builder.deepen(&mut lps, 1).unwrap();
        assert_eq!(lps.level(), 1);
        assert!(lps.is_empty());

        builder.deepen(&mut lps, 3).unwrap();
        assert_eq!(lps.level(), 3);
        assert!(lps.is_empty());
    }

    #[test]
    fn test_deepen_produces_wider_cores_with_nested_spans() {
        let alphabet = Alphabet::dna();
        let builder = LcpBuilder::new(&alphabet);
        let text = b"GATTACAGGCTTAACGTACGATCGGATCCATGCAAGTCCGATTACAGATACCAGGT\
                     TTACGGATCAAGCTAGCTAGGCATCGATCGGCTAACGTTAGCATCGGATTCAGCAT";
        let mut lps = builder.build(text).unwrap();
        let base_len = lps.len();
        assert!(base_len > 10);

        builder.deepen(&mut lps, 1).unwrap();
        assert_eq!(lps.level(), 1);
        assert!(!lps.is_empty());
        assert!(lps.len() < base_len);

        for core in lps.cores() {
            let (start, end) = core.span();
            assert!(start < end && end <= text.len());
            assert!(core.bit_size() >= 2);
            assert!(fold(core).is_ok());
        }

        let starts: Vec<usize> = lps.cores().iter().map(|c| c.span().0).collect();
        assert!(starts.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_deepen_exhausted_structure_jumps_to_level() {
        let alphabet = Alphabet::dna();
        let builder = LcpBuilder::new(&alphabet);
        let mut lps = builder.build(b"GATTACA").unwrap();

        builder.deepen(&mut lps, u32::MAX).unwrap();
        assert_eq!(lps.level(), u32::MAX);
        assert!(lps.is_empty());
    }

    #[test]
    fn test_deepen_below_current_level_is_noop() {
        let alphabet = Alphabet::dna();
        let builder = LcpBuilder::new(&alphabet);
        let mut lps = builder.build(b"GATTACA").unwrap();
        builder.deepen(&mut lps, 2).unwrap();

        builder.deepen(&mut lps, 1).unwrap();
        assert_eq!(lps.level(), 2);
    }
}
