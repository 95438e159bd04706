/// Errors that can occur during bucketing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BinningError {
    /// An item carries a charge outside `0..=9` while charge splitting is enabled
    #[error("Invalid charge {charge} for item {id}: expected 0..=9")]
    InvalidCharge {
        /// Offending item id
        id: String,
        /// Offending charge
        charge: i32,
    },

    /// Bin width must be a positive number of mass units
    #[error("Invalid bin size: {0}")]
    InvalidBinSize(i64),

    /// The charge-stratified key of an item does not fit in an `i64`
    #[error("Bucket key overflow for item {id}")]
    KeyOverflow {
        /// Offending item id
        id: String,
    },
}
