//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for building, encoding, and decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A tree cannot be built from an empty sequence.
    #[error("invalid input: cannot build a tree from an empty sequence")]
    InvalidInput,

    /// Encode or decode was called before any successful build.
    #[error("tree not built: call build_tree first")]
    NotBuilt,

    /// The sequence being encoded contains a symbol the tree was not built from.
    #[error("unknown symbol {symbol} at position {position}")]
    UnknownSymbol {
        /// Index of the offending symbol in the input.
        position: usize,
        /// `Debug` rendering of the symbol.
        symbol: String,
    },

    /// The bit-string holds a marker other than `0`/`1`, or walks off the tree.
    #[error("invalid encoding at offset {offset}: {reason}")]
    InvalidEncoding {
        /// Index of the offending marker.
        offset: usize,
        /// What went wrong.
        reason: &'static str,
    },

    /// The bit-string ended in the middle of a code.
    #[error("incomplete sequence: input ends mid-code after {decoded} symbols")]
    IncompleteSequence {
        /// Symbols fully resolved before the stream ran out.
        decoded: usize,
    },
}

impl Error {
    pub(crate) fn unknown_symbol<S: std::fmt::Debug>(position: usize, symbol: &S) -> Self {
        Error::UnknownSymbol {
            position,
            symbol: format!("{symbol:?}"),
        }
    }

    /// Short stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInput => "invalid_input",
            Error::NotBuilt => "not_built",
            Error::UnknownSymbol { .. } => "unknown_symbol",
            Error::InvalidEncoding { .. } => "invalid_encoding",
            Error::IncompleteSequence { .. } => "incomplete_sequence",
        }
    }
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = Error::unknown_symbol(3, &b'z');
        assert_eq!(err.to_string(), "unknown symbol 122 at position 3");
        assert_eq!(err.kind(), "unknown_symbol");

        let err = Error::InvalidEncoding {
            offset: 2,
            reason: "marker is not '0' or '1'",
        };
        assert_eq!(
            err.to_string(),
            "invalid encoding at offset 2: marker is not '0' or '1'"
        );
    }
}
