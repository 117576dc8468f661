//! Symbol frequency counting.
//!
//! A single pass over the input produces the occurrence count of every
//! distinct symbol. The table is rebuilt from scratch for each input, so
//! nothing from an earlier build survives.

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts of the distinct symbols in one input sequence.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    counts: HashMap<S, usize>,
}

impl<S: Eq + Hash> PartialEq for FrequencyTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<S: Eq + Hash> Eq for FrequencyTable<S> {}

impl<S> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<S: Copy + Eq + Hash> FrequencyTable<S> {
    /// Count every symbol in `data`.
    pub fn from_symbols(data: &[S]) -> Self {
        let mut counts = HashMap::new();
        for &s in data {
            *counts.entry(s).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrence count of `symbol`, if it was seen.
    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbols counted (the input length).
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(symbol, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (S, usize)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}

impl<S: Copy + Eq + Hash + Ord> FrequencyTable<S> {
    /// `(symbol, count)` pairs ordered by symbol.
    pub fn sorted(&self) -> Vec<(S, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(s, _)| s);
        entries
    }
}
