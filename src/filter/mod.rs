//! # Peak-Selection Pipeline
//!
//! Pure transforms that reduce a spectrum's peak list before it is handed to the
//! comparison engine.
//!
//! ## Stages
//!
//! | Stage | Effect |
//! |-------|--------|
//! | [`PeakFilter::Dedup`] | Collapse equal-mass runs to their most intense peak |
//! | [`PeakFilter::TopN`] | Keep the `n` most intense peaks |
//! | [`PeakFilter::MinTicFraction`] | Keep the most intense peaks until a TIC fraction is explained |
//! | [`PeakFilter::RemovePrecursor`] | Drop peaks near the precursor mass |
//! | [`PeakFilter::TopNPerWindow`] | Keep the `n` most intense peaks per mass window |
//! | [`PeakFilter::NormalizeToBasePeak`] | Rescale intensities to a fixed base peak |
//!
//! Every stage returns a new spectrum with peaks ascending by mass (given sorted
//! input) and never modifies its argument. Intensity ranking uses a total order
//! (intensity descending, then mass ascending, then input position), so results do
//! not depend on thread count.
//!
//! Stages are chained with [`FilterPipeline`]. Order matters: `TopN` followed by
//! `MinTicFraction` differs from the reverse.
//!
//! ```rust
//! use mzprep::filter::{FilterPipeline, PeakFilter};
//! use mzprep::spectrum::SpectrumBuilder;
//!
//! let pipeline = PeakFilter::Dedup.then(PeakFilter::TopN { n: 2 });
//! let spectrum = SpectrumBuilder::new("s1", 500_000)
//!     .add_peak(100, 10)
//!     .add_peak(100, 30)
//!     .add_peak(200, 20)
//!     .add_peak(300, 5)
//!     .build();
//!
//! let filtered = pipeline.apply(&spectrum)?;
//! assert_eq!(filtered.peak_count(), 2);
//! # Ok::<(), mzprep::filter::FilterError>(())
//! ```

mod error;
mod pipeline;
mod stage;


pub use error::FilterError;
pub use pipeline::FilterPipeline;
pub use stage::PeakFilter;
