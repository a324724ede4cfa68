use std::cmp::Ordering;
use std::ops::Range;

use crate::term::Term;

/// Heavier first. Callers sort stably, so ties keep their incoming order.
pub(super) fn weight_ordering(a: &Term, b: &Term) -> Ordering {
    b.weight().cmp(&a.weight())
}

pub(super) fn ranked_indices(entries: &[Term], range: Range<usize>) -> Vec<usize> {
    let mut indices: Vec<usize> = range.collect();
    indices.sort_by(|&a, &b| weight_ordering(&entries[a], &entries[b]));
    indices
}
