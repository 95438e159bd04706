/// Errors that can occur while filtering peaks
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Dedup requires peaks ascending by mass
    #[error("Peaks of spectrum {spectrum_id} are not sorted by mass (index {index})")]
    UnsortedPeaks {
        /// Spectrum whose peaks are out of order
        spectrum_id: String,
        /// Index of the first peak with a lower mass than its predecessor
        index: usize,
    },

    /// A stage was configured with an unusable parameter
    #[error("Invalid filter parameter: {0}")]
    InvalidParameter(String),
}
