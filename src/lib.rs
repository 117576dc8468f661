//! # Huffman Coding
//!
//! *Optimal prefix codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives `E` a single dot and `Q` four symbols, because `E` is far
//! more common. Huffman coding does the same thing optimally: frequent symbols
//! get short codes, rare ones get long codes, and no code is the beginning of
//! another, so a stream of codes can be split back apart without separators.
//!
//! ## The Problem
//!
//! A fixed-width code spends the same number of bits on every symbol no matter
//! how often it occurs. Given exact counts, we want the prefix-free code that
//! minimizes the total encoded length.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down, not always optimal
//! 1952  Huffman     Bottom-up greedy merge: provably optimal prefix codes
//! 1978  Gallager    Adaptive Huffman coding
//! 1990s Deflate     Canonical Huffman codes in zip, gzip, PNG
//! ```
//!
//! ## Algorithm
//!
//! Put one leaf per distinct symbol into a min-priority queue keyed by count.
//! Remove the two lightest nodes, join them under a new node whose weight is
//! their sum, and put that back. When one node remains it is the root. A
//! symbol's code is its root-to-leaf path, `0` for left and `1` for right.
//!
//! For frequencies $f_s$ and code lengths $\ell_s$ the encoded length is
//!
//! ```text
//! L = sum_s f_s * l_s
//! ```
//!
//! and no prefix-free code achieves a smaller $L$.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n + k \log k)$ for $n$ input symbols, $k$ distinct.
//! - **Encode**: $O(n + L)$.
//! - **Decode**: $O(L)$, one tree step per marker.
//!
//! ## Failure Modes
//!
//! 1. **Single symbol**: the merge loop never runs. The root gets the lone
//!    leaf as its left child so the symbol still has the code `0`.
//! 2. **Truncated stream**: decoding that stops mid-code is reported, never
//!    silently dropped.
//!
//! ## Implementation Notes
//!
//! Codes are text made of `0` and `1` markers, one marker per character, not
//! packed bits. [`HuffmanTree`] is the stateful engine; [`HuffmanEncoder`] and
//! [`HuffmanDecoder`] work directly on a [`CodeTable`] or [`Tree`].
//!
//! ```
//! use huffman::HuffmanTree;
//!
//! let mut engine = HuffmanTree::new();
//! engine.build_tree(b"hello world")?;
//!
//! let bits = engine.encode(b"hello world")?;
//! assert!(bits.len() < 11 * 3);
//! assert_eq!(engine.decode(&bits)?, b"hello world");
//! # Ok::<(), huffman::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod stats;
pub mod tree;

pub use code::CodeTable;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use huffman::{HuffmanDecoder, HuffmanEncoder, HuffmanTree};
pub use stats::CompressionStats;
pub use tree::{Node, Tree};
