//! Code table derivation.
//!
//! Codes are root-to-leaf paths rendered as text: one `0` per left step and
//! one `1` per right step. They are not packed into bytes.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use crate::error::{Error, Result};
use crate::tree::{Node, Tree};

/// Marker for a step to the left child.
pub const LEFT: char = '0';

/// Marker for a step to the right child.
pub const RIGHT: char = '1';

/// Symbol to code mapping for one built tree.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    codes: HashMap<S, String>,
}

impl<S: Eq + Hash> PartialEq for CodeTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.codes == other.codes
    }
}

impl<S: Eq + Hash> Eq for CodeTable<S> {}

impl<S> Default for CodeTable<S> {
    fn default() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }
}

impl<S: Copy + Eq + Hash + std::fmt::Debug> CodeTable<S> {
    /// Walk `tree` once and record the path to every leaf.
    pub fn from_tree(tree: &Tree<S>) -> Self {
        let mut codes = HashMap::new();
        let mut stack = vec![(tree.root(), String::new())];

        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    // A root leaf would have an empty path; never emit a zero-length code.
                    let code = if path.is_empty() {
                        LEFT.to_string()
                    } else {
                        path
                    };
                    trace!(symbol = ?symbol, code = %code, "assigned code");
                    codes.insert(*symbol, code);
                }
                Node::Internal { left, right, .. } => {
                    if let Some(right) = right {
                        let mut right_path = path.clone();
                        right_path.push(RIGHT);
                        stack.push((right.as_ref(), right_path));
                    }
                    let mut left_path = path;
                    left_path.push(LEFT);
                    stack.push((left.as_ref(), left_path));
                }
            }
        }

        Self { codes }
    }

    /// Code assigned to `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True before any tree has been walked.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (S, &str)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_str()))
    }

    /// Number of markers `data` encodes to.
    ///
    /// Fails with [`Error::UnknownSymbol`] on the first symbol without a code.
    pub fn encoded_len(&self, data: &[S]) -> Result<usize> {
        data.iter().enumerate().try_fold(0, |total, (i, s)| {
            self.codes
                .get(s)
                .map(|code| total + code.len())
                .ok_or_else(|| Error::unknown_symbol(i, s))
        })
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        // After sorting, a prefix sorts immediately before some code it prefixes.
        codes.sort_unstable();
        codes.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}

impl<S: Copy + Eq + Hash + Ord> CodeTable<S> {
    /// `(symbol, code)` pairs ordered by symbol.
    pub fn sorted(&self) -> Vec<(S, &str)> {
        let mut entries: Vec<_> = self.codes.iter().map(|(&s, c)| (s, c.as_str())).collect();
        entries.sort_unstable_by_key(|&(s, _)| s);
        entries
    }
}
