//! Deterministic coin tossing between adjacent cores

use lcpint_core::Core;

/// Label `current` relative to its predecessor
///
/// The label is `2 * p + b`, where `p` is the lowest bit index at which the
/// two cores differ and `b` is `current`'s bit there. Bits past a core's
/// width read as zero. Identical cores get `2 * max_width`, which no
/// differing pair can produce.
pub fn coin_toss(previous: &Core, current: &Core) -> u32 {
    let limit = previous.bit_size().max(current.bit_size());

    for index in 0..limit {
        let ours = current.bit(index).unwrap_or(false);
        let theirs = previous.bit(index).unwrap_or(false);
        if ours != theirs {
            return label(index, ours);
        }
    }

    label(limit, false)
}

fn label(index: usize, bit: bool) -> u32 {
    (index as u32).saturating_mul(2).saturating_add(u32::from(bit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core(fields: &[u32], width: u32) -> Core {
        Core::pack(fields, width).unwrap()
    }

    #[test]
    fn test_differs_at_lowest_bit() {
        // 100011 vs 00111100: bit 0 differs, current bit is 0
        assert_eq!(coin_toss(&core(&[2, 0, 3], 2), &core(&[0, 3, 3, 0], 2)), 0);
        // 00111100 vs 110001: bit 0 differs, current bit is 1
        assert_eq!(coin_toss(&core(&[0, 3, 3, 0], 2), &core(&[3, 0, 1], 2)), 1);
    }

    #[test]
    fn test_differs_higher_up() {
        // 0b0100 vs 0b1100: first difference at bit 3, current bit is 1
        assert_eq!(coin_toss(&core(&[0b0100], 4), &core(&[0b1100], 4)), 7);
    }

    #[test]
    fn test_width_difference_reads_zero() {
        // Same low bits, longer core has a set bit past the shorter width
        assert_eq!(coin_toss(&core(&[1], 2), &core(&[1, 1], 2)), 5);
        assert_eq!(coin_toss(&core(&[1, 1], 2), &core(&[1], 2)), 4);
    }

    #[test]
    fn test_identical_cores() {
        let a = core(&[1, 2, 3], 2);
        assert_eq!(coin_toss(&a, &a.clone()), 12);
    }
}
