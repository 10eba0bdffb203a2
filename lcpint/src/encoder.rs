//! Encoding a parse structure into a sink
//!
//! Cores that fail to fold are logged and skipped; the remaining values
//! reach the sink in core order.

use lcpint_core::{fold_all, EncodedSink, Lps};

/// Counts from one encoding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Values accepted by the sink
    pub encoded: usize,
    /// Cores skipped because they could not be folded
    pub skipped: usize,
}

/// Fold every core of `lps` into `sink`
///
/// Only sink errors abort the pass.
pub fn encode_into<S: EncodedSink>(lps: &Lps, sink: &mut S) -> Result<EncodeStats, S::Error> {
    let mut stats = EncodeStats::default();

    for (index, folded) in fold_all(lps) {
        match folded {
            Ok(value) => {
                sink.accept(value)?;
                stats.encoded += 1;
            }
            Err(error) => {
                tracing::warn!(core = index, %error, "failed to encode core, skipping");
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}

/// Fold every core of `lps` into memory
pub fn encode_lps(lps: &Lps) -> (Vec<u32>, EncodeStats) {
    let mut values = Vec::with_capacity(lps.len());
    let stats = match encode_into(lps, &mut values) {
        Ok(stats) => stats,
        Err(never) => match never {},
    };
    (values, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcpint_core::{Core, StructureBuilder};

    fn lps_with_defect() -> Lps {
        let mut lps = Lps::new(vec![Core::new(4, vec![7]).unwrap()]);
        lps.advance(vec![
            Core::new(40, vec![0xFFFF_FFFF, 0x0000_000F]).unwrap(),
            Core::new(0, vec![]).unwrap(),
            Core::new(32, vec![0xDEAD_BEEF]).unwrap(),
            Core::new(3, vec![0b101]).unwrap(),
        ]);
        lps
    }

    #[test]
    fn test_encode_skips_defective_core() {
        let (values, stats) = encode_lps(&lps_with_defect());
        assert_eq!(values, vec![15, 0xDEAD_BEEF, 5]);
        assert_eq!(
            stats,
            EncodeStats {
                encoded: 3,
                skipped: 1
            }
        );
    }

    #[test]
    fn test_encode_empty_structure() {
        let (values, stats) = encode_lps(&Lps::default());
        assert!(values.is_empty());
        assert_eq!(stats, EncodeStats::default());
    }

    #[test]
    fn test_encode_built_structure() {
        let alphabet = lcpint_core::Alphabet::dna();
        let lps = crate::lcp::LcpBuilder::new(&alphabet)
            .build(b"GATTACA")
            .unwrap();
        let (values, stats) = encode_lps(&lps);
        assert_eq!(values, vec![35, 60, 49]);
        assert_eq!(stats.skipped, 0);
    }

    struct FailingSink {
        accepted: usize,
    }

    impl EncodedSink for FailingSink {
        type Output = ();
        type Error = &'static str;

        fn accept(&mut self, _value: u32) -> Result<(), Self::Error> {
            if self.accepted == 1 {
                return Err("sink full");
            }
            self.accepted += 1;
            Ok(())
        }

        fn finish(self) -> Result<Self::Output, Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_error_aborts() {
        let mut sink = FailingSink { accepted: 0 };
        assert_eq!(encode_into(&lps_with_defect(), &mut sink), Err("sink full"));
        assert_eq!(sink.accepted, 1);
    }
}
