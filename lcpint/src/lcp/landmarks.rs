//! Core discovery over a label sequence
//!
//! A core is anchored at a landmark and spans the landmark plus one
//! neighbor on each side:
//!
//! - a maximal run of two or more equal labels,
//! - a strict local minimum,
//! - a strict local maximum neither of whose neighbors is a local minimum.
//!
//! Spans are half-open label ranges returned in order of their start.

use std::ops::Range;

/// Find every core span in `labels`
pub fn find_core_spans(labels: &[u32]) -> Vec<Range<usize>> {
    let n = labels.len();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < n {
        let run_end = run_end(labels, i);
        if run_end - i >= 2 {
            spans.push(i.saturating_sub(1)..(run_end + 1).min(n));
            i = run_end;
            continue;
        }

        if is_local_min(labels, i)
            || (is_local_max(labels, i)
                && !is_local_min(labels, i - 1)
                && !is_local_min(labels, i + 1))
        {
            spans.push(i - 1..i + 2);
        }
        i += 1;
    }

    spans
}

/// One past the last index of the run of equal labels starting at `start`
fn run_end(labels: &[u32], start: usize) -> usize {
    let value = labels[start];
    labels[start..]
        .iter()
        .position(|&label| label != value)
        .map_or(labels.len(), |offset| start + offset)
}

fn is_local_min(labels: &[u32], i: usize) -> bool {
    i >= 1 && i + 1 < labels.len() && labels[i] < labels[i - 1] && labels[i] < labels[i + 1]
}

fn is_local_max(labels: &[u32], i: usize) -> bool {
    i >= 1 && i + 1 < labels.len() && labels[i] > labels[i - 1] && labels[i] > labels[i + 1]
}
