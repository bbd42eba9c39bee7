use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ranking;

/// A counted term in the ranked output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    pub term: String,
    pub count: usize,
}

impl Term {
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// Running term counts shared by every language pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TermAccumulator {
    counts: HashMap<String, usize>,
}

impl TermAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to the count of `term`, inserting it when absent.
    pub fn push(&mut self, term: impl Into<String>, delta: usize) {
        *self.counts.entry(term.into()).or_insert(0) += delta;
    }

    pub fn get(&self, term: &str) -> Option<usize> {
        self.counts.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Terms seen at least `minimum_count` times, in rank order.
    pub fn finalize(&self, minimum_count: usize) -> Vec<Term> {
        let mut terms: Vec<Term> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count >= minimum_count)
            .map(|(term, &count)| Term::new(term.as_str(), count))
            .collect();
        ranking::rank(&mut terms);
        terms
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
