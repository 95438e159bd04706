use serde::Deserialize;

/// Configuration for the [`Bucketer`](super::Bucketer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BinningConfig {
    /// Bin width in quantized mass units
    pub bin_size: i64,

    /// Buckets smaller than this are merged into their successor.
    /// Inputs smaller than this are not bucketed at all.
    pub min_bucket_size: usize,

    /// Stratify buckets by precursor charge
    pub use_charge: bool,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            // 1 Da at MASS_RESOLUTION
            bin_size: 1_000,
            min_bucket_size: 1,
            use_charge: false,
        }
    }
}

impl BinningConfig {
    /// Create a configuration
    pub fn new(bin_size: i64, min_bucket_size: usize, use_charge: bool) -> Self {
        Self {
            bin_size,
            min_bucket_size,
            use_charge,
        }
    }

    /// Offset added to every mass in shifted mode: half a bin, halves rounded up
    pub fn shift_offset(&self) -> i64 {
        (self.bin_size + 1) / 2
    }
}
