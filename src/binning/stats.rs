use std::fmt;

/// Statistics from one bucketing call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinningStats {
    /// Number of input items
    pub items: usize,
    /// Distinct keys before merging
    pub raw_buckets: usize,
    /// Buckets folded into their successor
    pub merged_buckets: usize,
    /// Buckets returned
    pub emitted_buckets: usize,
    /// Size of the largest returned bucket
    pub largest_bucket: usize,
    /// Whether bucketing was skipped because the input was too small
    pub skipped: bool,
}

impl fmt::Display for BinningStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items -> {} buckets ({} raw, {} merged, largest {})",
            self.items, self.emitted_buckets, self.raw_buckets, self.merged_buckets, self.largest_bucket
        )
    }
}
