//! Significance order for ranked term lists.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::accumulator::Term;

/// Higher counts first; equal counts by term text, ascending.
pub fn compare(a: &Term, b: &Term) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term))
}

pub fn rank(terms: &mut [Term]) {
    terms.par_sort_unstable_by(compare);
}
