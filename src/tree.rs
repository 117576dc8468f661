//! Huffman tree construction.
//!
//! The classic greedy merge: every distinct symbol starts as a leaf in a
//! min-priority queue keyed by frequency, and the two lightest nodes are
//! repeatedly combined under a new internal node until one root remains.
//!
//! # Tie-breaking
//!
//! Leaves are queued by ascending frequency and, within one frequency, by
//! descending symbol. Every queued node carries an insertion sequence number,
//! and nodes of equal frequency leave the queue in insertion order, so the
//! same input always produces the same tree.
//! Code lengths are optimal under any deterministic rule; this one just makes
//! the output reproducible across processes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Huffman tree node.
///
/// Internal nodes own both children. The right child is absent only at the
/// root of a tree built from a single distinct symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A symbol and its occurrence count.
    Leaf {
        /// The symbol.
        symbol: S,
        /// Occurrence count.
        freq: usize,
    },
    /// A routing node; `freq` is the sum of its children.
    Internal {
        /// Subtree reached by a `0` marker.
        left: Box<Node<S>>,
        /// Subtree reached by a `1` marker.
        right: Option<Box<Node<S>>>,
        /// Combined frequency.
        freq: usize,
    },
}

impl<S> Node<S> {
    /// Combined frequency of every symbol under this node.
    pub fn freq(&self) -> usize {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol held by a leaf.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Child selected by one step: `false` goes left, `true` goes right.
    ///
    /// Returns `None` for leaves and for an absent right child.
    pub fn child(&self, right: bool) -> Option<&Node<S>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, .. } if !right => Some(left),
            Node::Internal { right, .. } => right.as_deref(),
        }
    }

    fn merge(left: Node<S>, right: Node<S>) -> Self {
        let freq = left.freq() + right.freq();
        Node::Internal {
            left: Box::new(left),
            right: Some(Box::new(right)),
            freq,
        }
    }
}

/// Queue entry: min-ordered by frequency, then by insertion sequence.
struct Pending<S> {
    freq: usize,
    seq: usize,
    node: Node<S>,
}

impl<S> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl<S> Eq for Pending<S> {}

impl<S> Ord for Pending<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A built Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<S> {
    root: Node<S>,
}

impl<S: Copy + Eq + Hash + Ord> Tree<S> {
    /// Build the optimal prefix tree for the given frequencies.
    ///
    /// A single distinct symbol yields a root whose left child is that
    /// symbol's leaf and whose right child is absent, so the symbol still
    /// gets the one-marker code `0`.
    pub fn build(frequencies: &FrequencyTable<S>) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(Error::InvalidInput);
        }

        let mut leaves: Vec<(S, usize)> = frequencies.iter().collect();
        leaves.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)));

        let mut pq = BinaryHeap::with_capacity(leaves.len());
        let mut seq = 0;
        for (symbol, freq) in leaves {
            pq.push(Pending {
                freq,
                seq,
                node: Node::Leaf { symbol, freq },
            });
            seq += 1;
        }

        while pq.len() > 1 {
            if let (Some(left), Some(right)) = (pq.pop(), pq.pop()) {
                let node = Node::merge(left.node, right.node);
                pq.push(Pending {
                    freq: node.freq(),
                    seq,
                    node,
                });
                seq += 1;
            }
        }

        let root = match pq.pop() {
            None => return Err(Error::InvalidInput),
            Some(Pending { node, freq, .. }) if node.is_leaf() => Node::Internal {
                left: Box::new(node),
                right: None,
                freq,
            },
            Some(pending) => pending.node,
        };

        Ok(Self { root })
    }
}

impl<S> Tree<S> {
    /// The root node. Always internal.
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Total occurrence count of all symbols.
    pub fn freq(&self) -> usize {
        self.root.freq()
    }

    /// True when the tree was built from one distinct symbol.
    pub fn is_single_symbol(&self) -> bool {
        matches!(&self.root, Node::Internal { right: None, .. })
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => max = max.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((left.as_ref(), depth + 1));
                    if let Some(right) = right {
                        stack.push((right.as_ref(), depth + 1));
                    }
                }
            }
        }
        max
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(left);
                    if let Some(right) = right {
                        stack.push(right);
                    }
                }
            }
        }
        count
    }

    /// Sum over leaves of `freq * depth`: the length of the encoded input.
    ///
    /// Equal to the sum of all internal node frequencies.
    pub fn weighted_path_length(&self) -> usize {
        let mut total = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if let Node::Internal { left, right, freq } = node {
                total += freq;
                stack.push(left);
                if let Some(right) = right {
                    stack.push(right);
                }
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(data: &[u8]) -> Result<Tree<u8>> {
        Tree::build(&FrequencyTable::from_symbols(data))
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(build(b""), Err(Error::InvalidInput));
    }

    #[test]
    fn test_single_symbol_shape() {
        let tree = build(b"aaaa").unwrap();
        assert!(tree.is_single_symbol());
        assert_eq!(tree.freq(), 4);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.leaf_count(), 1);

        let root = tree.root();
        assert!(!root.is_leaf());
        assert_eq!(root.child(false).and_then(Node::symbol), Some(&b'a'));
        assert!(root.child(true).is_none());
        assert_eq!(tree.weighted_path_length(), 4);
    }

    #[test]
    fn test_internal_freq_is_sum_of_children() {
        let tree = build(b"hello world").unwrap();
        assert_eq!(tree.freq(), 11);
        assert_eq!(tree.leaf_count(), 8);

        let mut stack = vec![tree.root()];
        while let Some(node) = stack.pop() {
            if let Node::Internal { left, right, freq } = node {
                let right = right.as_deref().expect("binary node");
                assert_eq!(*freq, left.freq() + right.freq());
                stack.push(left);
                stack.push(right);
            }
        }
    }

    #[test]
    fn test_skewed_distribution_is_optimal() {
        // a:5 b:2 c:1 d:1 -> lengths 1, 2, 3, 3
        let tree = build(b"aaaaabbcd").unwrap();
        assert_eq!(tree.weighted_path_length(), 5 + 2 * 2 + 3 + 3);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_equal_frequencies_are_balanced() {
        let tree = build(b"abcdefgh").unwrap();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.weighted_path_length(), 8 * 3);
    }

    #[test]
    fn test_deterministic() {
        let first = build(b"mississippi river").unwrap();
        for _ in 0..8 {
            assert_eq!(build(b"mississippi river").unwrap(), first);
        }
    }

    #[test]
    fn test_ties_merge_highest_symbols_first() {
        // a, b, c all weigh 1: c and b merge first, a is left of that pair.
        let tree = build(b"abc").unwrap();
        let root = tree.root();
        assert_eq!(root.child(false).and_then(Node::symbol), Some(&b'a'));
        let pair = root.child(true).unwrap();
        assert_eq!(pair.child(false).and_then(Node::symbol), Some(&b'c'));
        assert_eq!(pair.child(true).and_then(Node::symbol), Some(&b'b'));
    }
}
