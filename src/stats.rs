//! Compression summary for one encode.

/// Sizes of an input and its encoding, both in bits.
///
/// The original is measured at a fixed width per symbol (8 bits for bytes);
/// the encoding at one bit per marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Size of the input.
    pub original_bits: usize,
    /// Number of markers in the encoding.
    pub encoded_bits: usize,
}

impl CompressionStats {
    /// Stats for `original_bytes` of input encoded to `encoded_bits` markers.
    ///
    /// Assumes byte symbols. Use [`with_symbol_bits`](Self::with_symbol_bits)
    /// for wider symbols such as `char`.
    pub fn new(original_bytes: usize, encoded_bits: usize) -> Self {
        Self::with_symbol_bits(original_bytes, 8, encoded_bits)
    }

    /// Stats for `symbols` input symbols of `bits_per_symbol` bits each.
    pub fn with_symbol_bits(symbols: usize, bits_per_symbol: usize, encoded_bits: usize) -> Self {
        Self {
            original_bits: symbols * bits_per_symbol,
            encoded_bits,
        }
    }

    /// Percentage of the original size saved: `(1 - encoded / original) * 100`.
    ///
    /// `0.0` for empty input. Negative if the encoding is larger.
    pub fn ratio_percent(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        (1.0 - self.encoded_bits as f64 / self.original_bits as f64) * 100.0
    }

    /// Bits saved, or zero if the encoding is not smaller.
    pub fn space_saved_bits(&self) -> usize {
        self.original_bits.saturating_sub(self.encoded_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        let stats = CompressionStats::new(4, 8);
        assert_eq!(stats.original_bits, 32);
        assert!((stats.ratio_percent() - 75.0).abs() < 1e-9);
        assert_eq!(stats.space_saved_bits(), 24);
    }

    #[test]
    fn test_wide_symbols() {
        // four chars at 32 bits each
        let stats = CompressionStats::with_symbol_bits(4, 32, 8);
        assert_eq!(stats.original_bits, 128);
        assert_eq!(stats.space_saved_bits(), 120);
        assert_eq!(CompressionStats::new(4, 8), CompressionStats::with_symbol_bits(4, 8, 8));
    }

    #[test]
    fn test_empty_and_expanding() {
        assert_eq!(CompressionStats::new(0, 0).ratio_percent(), 0.0);

        let stats = CompressionStats::new(1, 16);
        assert!(stats.ratio_percent() < 0.0);
        assert_eq!(stats.space_saved_bits(), 0);
    }
}
