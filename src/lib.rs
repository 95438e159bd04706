//! # mzprep - Spectrum Preparation for Large-Scale Clustering
//!
//! `mzprep` prepares large collections of MS/MS spectra for pairwise comparison in a
//! clustering engine. It does not score or cluster spectra itself; it bounds and
//! shapes the work handed to the engine.
//!
//! ## Key Features
//!
//! - **Adaptive Bucketing**: Groups spectra by quantized precursor mass (optionally
//!   per charge state) and folds undersized buckets into their neighbours, so that
//!   comparisons stay local and bucket sizes stay useful.
//!
//! - **Shifted Grids**: A half-bin shifted pass recovers pairs that a fixed grid splits
//!   across a bucket boundary.
//!
//! - **Peak Selection**: Composable, deterministic peak filters (dedup, top-N,
//!   minimum TIC fraction, per-window top-N, precursor removal, normalization).
//!
//! - **Property Store**: Per-spectrum metadata in memory, or in a bounded-memory LMDB
//!   store for tens of millions of spectra.
//!
//! ## Quick Start
//!
//! ```rust
//! use mzprep::binning::{BinningConfig, Bucketer};
//! use mzprep::filter::{FilterPipeline, PeakFilter};
//! use mzprep::spectrum::{quantize_mass, SpectrumBuilder};
//!
//! let pipeline = FilterPipeline::new()
//!     .then(PeakFilter::Dedup)
//!     .then(PeakFilter::TopN { n: 50 });
//!
//! let spectra = vec![
//!     SpectrumBuilder::new("a", quantize_mass(300.123)).add_peak(100_000, 10).build(),
//!     SpectrumBuilder::new("b", quantize_mass(300.9)).add_peak(120_000, 30).build(),
//!     SpectrumBuilder::new("c", quantize_mass(301.1)).add_peak(150_000, 20).build(),
//! ];
//! let filtered = pipeline.apply_all(&spectra)?;
//!
//! let projections: Vec<_> = filtered.iter().map(|s| s.projection()).collect();
//! let bucketer = Bucketer::new(BinningConfig::new(1_000, 1, false));
//! let buckets = bucketer.bin(&projections, false)?;
//!
//! assert_eq!(buckets, vec![vec!["a", "b"], vec!["c"]]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`spectrum`]: Peaks, spectra, bucketing projections and mass quantization
//! - [`binning`]: Adaptive precursor-mass bucketing
//! - [`filter`]: Peak-selection stages and pipelines
//! - [`store`]: Property store trait and its backends
//! - [`config`]: TOML configuration for all of the above
//!
//! ## Features
//!
//! - `parallel` (default): sorts large peak arrays and filters spectrum batches with
//!   rayon. Results are identical with and without it.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod binning;
pub mod config;
pub mod filter;
pub mod spectrum;
pub mod store;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::binning::{bin, BinningConfig, BinningError, BinningStats, Bucketer};
    pub use crate::config::PrepConfig;
    pub use crate::filter::{FilterError, FilterPipeline, PeakFilter};
    pub use crate::spectrum::{
        quantize_mass, ItemProjection, Peak, Spectrum, SpectrumBuilder, MASS_RESOLUTION,
    };
    pub use crate::store::{
        open_property_store, InMemoryPropertyStore, PersistentPropertyStore,
        PersistentStoreConfig, PropertyStore, StoreConfig, StoreError,
    };
}
