//! # Spectrum Data Model
//!
//! Minimal spectrum representation shared by the peak-selection pipeline and the
//! bucketer.
//!
//! Masses are integers: upstream ingestion quantizes floating m/z values with
//! [`quantize_mass`] so that every component (and the bucketer's `bin_size`) works in
//! the same unit of [`MASS_RESOLUTION`] steps per Dalton.
//!
//! Spectra are immutable once built. Pipeline stages never touch the peaks of their
//! input; they return a new [`Spectrum`] via [`Spectrum::with_peaks`].

mod builder;
mod types;


pub use builder::SpectrumBuilder;
pub use types::{quantize_mass, ItemProjection, Peak, Spectrum, MASS_RESOLUTION};
