//! # Adaptive Precursor-Mass Bucketing
//!
//! Partitions items by their quantized precursor mass so that a downstream clustering
//! engine only compares spectra that could plausibly match.
//!
//! ## Algorithm
//!
//! 1. **Skip**: fewer items than `min_bucket_size` yield a single bucket.
//! 2. **Key**: `floor((mass + offset) / bin_size)`, where `offset` is half a bin in
//!    shifted mode. Running both grids and unioning the results recovers pairs a
//!    single fixed grid splits across a bucket boundary.
//! 3. **Charge strata**: with `use_charge`, `charge * 100_000_000` is added to the key
//!    so every charge state occupies a disjoint key range.
//! 4. **Merge forward**: in ascending key order, a bucket smaller than
//!    `min_bucket_size` is folded into the next bucket of the same charge stratum.
//!    The last bucket of a stratum has no successor and may stay undersized, so
//!    distinct charges never share a bucket.
//!
//! Within a bucket, ids ascend by precursor mass; equal masses keep input order.

mod bucketer;
mod config;
mod error;
mod stats;

#[cfg(test)]
mod tests;

pub use bucketer::{bin, Bucketer, CHARGE_KEY_STRIDE, MAX_CHARGE};
pub use config::BinningConfig;
pub use error::BinningError;
pub use stats::BinningStats;
