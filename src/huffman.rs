//! Huffman encoder, decoder, and the stateful engine tying them together.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! It was the first practical algorithm for constructing optimal prefix codes.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::code::{CodeTable, LEFT, RIGHT};
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{Node, Tree};

/// Huffman encoder over a built code table.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanEncoder<'a, S> {
    codes: &'a CodeTable<S>,
}

impl<'a, S: Copy + Eq + Hash + Debug> HuffmanEncoder<'a, S> {
    /// Create an encoder from a code table.
    pub fn new(codes: &'a CodeTable<S>) -> Self {
        Self { codes }
    }

    /// Concatenate the code of every symbol in `data`, in order.
    pub fn encode(&self, data: &[S]) -> Result<String> {
        let mut bits = String::with_capacity(self.codes.encoded_len(data)?);
        for (i, s) in data.iter().enumerate() {
            let code = self.codes.get(s).ok_or_else(|| Error::unknown_symbol(i, s))?;
            bits.push_str(code);
        }
        Ok(bits)
    }
}

/// Huffman decoder walking a built tree.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanDecoder<'a, S> {
    tree: &'a Tree<S>,
}

impl<'a, S: Copy> HuffmanDecoder<'a, S> {
    /// Create a decoder from a tree.
    pub fn new(tree: &'a Tree<S>) -> Self {
        Self { tree }
    }

    /// Decode a marker string into a symbol sequence.
    ///
    /// Starts at the root, steps left on `0` and right on `1`, and emits a
    /// symbol and returns to the root at every leaf. The stream must end at
    /// the root. Nothing is returned on failure.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        let root = self.tree.root();
        let mut out = Vec::with_capacity(bits.len() / self.tree.depth().max(1));
        let mut current = root;

        for (offset, marker) in bits.chars().enumerate() {
            let right = match marker {
                LEFT => false,
                RIGHT => true,
                _ => {
                    return Err(Error::InvalidEncoding {
                        offset,
                        reason: "marker is not '0' or '1'",
                    })
                }
            };

            current = current.child(right).ok_or(Error::InvalidEncoding {
                offset,
                reason: "marker leads to an absent child",
            })?;

            if let Node::Leaf { symbol, .. } = current {
                out.push(*symbol);
                current = root;
            }
        }

        if !std::ptr::eq(current, root) {
            return Err(Error::IncompleteSequence { decoded: out.len() });
        }
        Ok(out)
    }
}

/// Stateful Huffman engine.
///
/// Holds the frequency table, tree, and code table of the most recent
/// successful [`build_tree`](Self::build_tree). Each build replaces all three;
/// nothing carries over between builds.
///
/// Not synchronized. Share across threads only behind an exclusive lock.
#[derive(Debug, Clone)]
pub struct HuffmanTree<S = u8> {
    frequencies: FrequencyTable<S>,
    codes: CodeTable<S>,
    tree: Option<Tree<S>>,
}

impl<S> Default for HuffmanTree<S> {
    fn default() -> Self {
        Self {
            frequencies: FrequencyTable::default(),
            codes: CodeTable::default(),
            tree: None,
        }
    }
}

impl<S: Copy + Eq + Hash + Ord + Debug> HuffmanTree<S> {
    /// Create an unbuilt engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine already built from `data`.
    pub fn from_symbols(data: &[S]) -> Result<Self> {
        let mut engine = Self::new();
        engine.build_tree(data)?;
        Ok(engine)
    }

    /// Count `data`, build its tree, and derive the code table.
    ///
    /// Fails with [`Error::InvalidInput`] on empty input, leaving any
    /// previous build in place.
    pub fn build_tree(&mut self, data: &[S]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::InvalidInput);
        }

        let frequencies = FrequencyTable::from_symbols(data);
        let tree = Tree::build(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);

        debug!(
            symbols = data.len(),
            distinct = frequencies.len(),
            depth = tree.depth(),
            "built huffman tree"
        );

        self.frequencies = frequencies;
        self.codes = codes;
        self.tree = Some(tree);
        Ok(())
    }

    /// Encode `data` with the current code table.
    pub fn encode(&self, data: &[S]) -> Result<String> {
        if self.tree.is_none() {
            return Err(Error::NotBuilt);
        }
        let bits = HuffmanEncoder::new(&self.codes).encode(data)?;
        debug!(symbols = data.len(), markers = bits.len(), "encoded");
        Ok(bits)
    }

    /// Decode a marker string with the current tree.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        let tree = self.tree.as_ref().ok_or(Error::NotBuilt)?;
        let out = HuffmanDecoder::new(tree).decode(bits)?;
        debug!(markers = bits.len(), symbols = out.len(), "decoded");
        Ok(out)
    }

    /// Frequencies of the last built input. Empty before the first build.
    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    /// Current code table. Empty before the first build.
    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    /// The current tree, if built.
    pub fn tree(&self) -> Option<&Tree<S>> {
        self.tree.as_ref()
    }

    /// True once a build has succeeded.
    pub fn is_built(&self) -> bool {
        self.tree.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huffman_roundtrip() {
        let data = b"abracadabra";
        let engine = HuffmanTree::from_symbols(data).unwrap();

        let bits = engine.encode(data).unwrap();
        let decoded = engine.decode(&bits).unwrap();

        assert_eq!(data.to_vec(), decoded);
    }

    #[test]
    fn test_encoder_decoder_without_engine() {
        let data = b"the quick brown fox";
        let tree = Tree::build(&FrequencyTable::from_symbols(data)).unwrap();
        let codes = CodeTable::from_tree(&tree);

        let bits = HuffmanEncoder::new(&codes).encode(data).unwrap();
        assert_eq!(bits.len(), tree.weighted_path_length());
        assert_eq!(HuffmanDecoder::new(&tree).decode(&bits).unwrap(), data);
    }

    #[test]
    fn test_char_symbols() {
        let text: Vec<char> = "ünïcödé ünïcödé".chars().collect();
        let engine = HuffmanTree::from_symbols(&text).unwrap();
        let bits = engine.encode(&text).unwrap();
        assert_eq!(engine.decode(&bits).unwrap(), text);
    }

    #[test]
    fn test_single_symbol_decode() {
        let engine = HuffmanTree::from_symbols(b"zz").unwrap();
        assert_eq!(engine.decode("000").unwrap(), b"zzz");
        assert_eq!(engine.decode("").unwrap(), b"");
        assert_eq!(
            engine.decode("01"),
            Err(Error::InvalidEncoding {
                offset: 1,
                reason: "marker leads to an absent child",
            })
        );
    }

    #[test]
    fn test_invalid_marker_offset() {
        let engine = HuffmanTree::from_symbols(b"ab").unwrap();
        match engine.decode("01x1") {
            Err(Error::InvalidEncoding { offset, .. }) => assert_eq!(offset, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_reports_progress() {
        // a:4 b:2 c:1 d:1 -> c and d sit three levels down
        let engine = HuffmanTree::from_symbols(b"aaaabbcd").unwrap();
        let mut bits = engine.encode(b"ac").unwrap();
        bits.pop();
        assert_eq!(
            engine.decode(&bits),
            Err(Error::IncompleteSequence { decoded: 1 })
        );
    }

    #[test]
    fn test_failed_build_keeps_previous_state() {
        let mut engine = HuffmanTree::from_symbols(b"abc").unwrap();
        let codes = engine.codes().clone();

        assert_eq!(engine.build_tree(b""), Err(Error::InvalidInput));
        assert!(engine.is_built());
        assert_eq!(engine.codes(), &codes);
        assert_eq!(engine.frequencies().get(&b'a'), Some(1));
    }
}
