use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use super::{FilterError, FilterPipeline};
use crate::spectrum::{Peak, Spectrum};

/// Peak arrays at least this long are intensity-sorted in parallel
#[cfg(feature = "parallel")]
const PARALLEL_SORT_THRESHOLD: usize = 4_096;

/// A single peak-selection stage.
///
/// Deserializes from a table tagged with `type`, e.g. `{ type = "top_n", n = 50 }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PeakFilter {
    /// Collapse each run of equal-mass peaks into its most intense peak.
    /// Input peaks must ascend by mass.
    Dedup,

    /// Keep the `n` most intense peaks; spectra with at most `n` peaks pass unchanged
    TopN {
        /// Number of peaks to keep
        n: usize,
    },

    /// Keep the most intense peaks until they explain more than `fraction` of the total
    /// ion current and at least `min_peaks` are kept
    MinTicFraction {
        /// Fraction of the total ion current to retain, in `0.0..=1.0`
        fraction: f64,
        /// Lower bound on the number of retained peaks
        min_peaks: usize,
    },

    /// Drop peaks within `tolerance` mass units of the precursor mass
    RemovePrecursor {
        /// Inclusive distance from the precursor mass
        tolerance: i64,
    },

    /// Keep the `n` most intense peaks in each `window`-wide mass slice
    TopNPerWindow {
        /// Slice width in mass units
        window: i64,
        /// Peaks kept per slice
        n: usize,
    },

    /// Scale intensities so the base peak equals `scale`
    NormalizeToBasePeak {
        /// Target base peak intensity
        scale: i64,
    },
}

impl PeakFilter {
    /// Apply this stage, returning a new spectrum
    ///
    /// # Errors
    ///
    /// [`FilterError::UnsortedPeaks`] if `Dedup` sees peaks out of mass order, and
    /// [`FilterError::InvalidParameter`] for a non-positive window, a negative
    /// tolerance or a negative scale.
    pub fn apply(&self, spectrum: &Spectrum) -> Result<Spectrum, FilterError> {
        match *self {
            PeakFilter::Dedup => dedup(spectrum),
            PeakFilter::TopN { n } => Ok(top_n(spectrum, n)),
            PeakFilter::MinTicFraction {
                fraction,
                min_peaks,
            } => Ok(min_tic_fraction(spectrum, fraction, min_peaks)),
            PeakFilter::RemovePrecursor { tolerance } => remove_precursor(spectrum, tolerance),
            PeakFilter::TopNPerWindow { window, n } => top_n_per_window(spectrum, window, n),
            PeakFilter::NormalizeToBasePeak { scale } => normalize_to_base_peak(spectrum, scale),
        }
    }

    /// Chain `next` after this stage
    pub fn then(self, next: PeakFilter) -> FilterPipeline {
        FilterPipeline::new().then(self).then(next)
    }

    /// Short stage name used in logs and config files
    pub fn name(&self) -> &'static str {
        match self {
            PeakFilter::Dedup => "dedup",
            PeakFilter::TopN { .. } => "top_n",
            PeakFilter::MinTicFraction { .. } => "min_tic_fraction",
            PeakFilter::RemovePrecursor { .. } => "remove_precursor",
            PeakFilter::TopNPerWindow { .. } => "top_n_per_window",
            PeakFilter::NormalizeToBasePeak { .. } => "normalize_to_base_peak",
        }
    }
}

impl fmt::Display for PeakFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeakFilter::Dedup => write!(f, "dedup"),
            PeakFilter::TopN { n } => write!(f, "top_n(n={})", n),
            PeakFilter::MinTicFraction {
                fraction,
                min_peaks,
            } => write!(
                f,
                "min_tic_fraction(fraction={}, min_peaks={})",
                fraction, min_peaks
            ),
            PeakFilter::RemovePrecursor { tolerance } => {
                write!(f, "remove_precursor(tolerance={})", tolerance)
            }
            PeakFilter::TopNPerWindow { window, n } => {
                write!(f, "top_n_per_window(window={}, n={})", window, n)
            }
            PeakFilter::NormalizeToBasePeak { scale } => {
                write!(f, "normalize_to_base_peak(scale={})", scale)
            }
        }
    }
}

fn dedup(spectrum: &Spectrum) -> Result<Spectrum, FilterError> {
    let peaks = spectrum.peaks();
    if let Some(index) = peaks.windows(2).position(|w| w[1].mass < w[0].mass) {
        return Err(FilterError::UnsortedPeaks {
            spectrum_id: spectrum.id().to_string(),
            index: index + 1,
        });
    }

    let mut kept: Vec<Peak> = Vec::with_capacity(peaks.len());
    for &peak in peaks {
        match kept.last_mut() {
            Some(last) if last.mass == peak.mass => {
                if peak.intensity > last.intensity {
                    *last = peak;
                }
            }
            _ => kept.push(peak),
        }
    }

    Ok(spectrum.with_peaks(kept))
}

fn top_n(spectrum: &Spectrum, n: usize) -> Spectrum {
    if spectrum.peak_count() <= n {
        return spectrum.clone();
    }

    let mut ranked = spectrum.peaks().to_vec();
    sort_by_intensity(&mut ranked);
    ranked.truncate(n);
    ranked.sort_by_key(|p| p.mass);

    spectrum.with_peaks(ranked)
}

fn min_tic_fraction(spectrum: &Spectrum, fraction: f64, min_peaks: usize) -> Spectrum {
    if spectrum.peak_count() <= min_peaks {
        return spectrum.clone();
    }
    let total = spectrum.total_ion_current();
    if total <= 0 {
        return spectrum.clone();
    }

    let mut ranked = spectrum.peaks().to_vec();
    sort_by_intensity(&mut ranked);

    let mut running: i128 = 0;
    let mut kept = 0;
    for peak in &ranked {
        running += i128::from(peak.intensity);
        kept += 1;
        if running as f64 / total as f64 > fraction && kept >= min_peaks {
            break;
        }
    }
    ranked.truncate(kept);
    ranked.sort_by_key(|p| p.mass);

    spectrum.with_peaks(ranked)
}

fn remove_precursor(spectrum: &Spectrum, tolerance: i64) -> Result<Spectrum, FilterError> {
    if tolerance < 0 {
        return Err(FilterError::InvalidParameter(format!(
            "precursor tolerance must not be negative, got {}",
            tolerance
        )));
    }

    let precursor = spectrum.precursor_mass();
    let kept = spectrum
        .peaks()
        .iter()
        .copied()
        .filter(|p| (p.mass - precursor).abs() > tolerance)
        .collect();

    Ok(spectrum.with_peaks(kept))
}

fn top_n_per_window(spectrum: &Spectrum, window: i64, n: usize) -> Result<Spectrum, FilterError> {
    if window <= 0 {
        return Err(FilterError::InvalidParameter(format!(
            "window size must be positive, got {}",
            window
        )));
    }

    let mut windows: BTreeMap<i64, Vec<Peak>> = BTreeMap::new();
    for &peak in spectrum.peaks() {
        windows
            .entry(peak.mass.div_euclid(window))
            .or_default()
            .push(peak);
    }

    let mut kept = Vec::with_capacity(spectrum.peak_count());
    for (_, mut peaks) in windows {
        sort_by_intensity(&mut peaks);
        peaks.truncate(n);
        peaks.sort_by_key(|p| p.mass);
        kept.append(&mut peaks);
    }

    Ok(spectrum.with_peaks(kept))
}

fn normalize_to_base_peak(spectrum: &Spectrum, scale: i64) -> Result<Spectrum, FilterError> {
    if scale < 0 {
        return Err(FilterError::InvalidParameter(format!(
            "normalization scale must not be negative, got {}",
            scale
        )));
    }

    let base = match spectrum.base_peak() {
        Some(peak) if peak.intensity > 0 => peak.intensity as f64,
        _ => return Ok(spectrum.clone()),
    };
    let factor = scale as f64 / base;
    let scaled = spectrum
        .peaks()
        .iter()
        .map(|p| Peak::new(p.mass, (p.intensity as f64 * factor).round() as i64))
        .collect();

    Ok(spectrum.with_peaks(scaled))
}

/// Intensity descending, then mass ascending
fn by_intensity(a: &Peak, b: &Peak) -> Ordering {
    b.intensity.cmp(&a.intensity).then(a.mass.cmp(&b.mass))
}

// Both sorts are stable, so equal peaks keep their input position.
#[cfg(feature = "parallel")]
fn sort_by_intensity(peaks: &mut [Peak]) {
    use rayon::slice::ParallelSliceMut;

    if peaks.len() >= PARALLEL_SORT_THRESHOLD {
        peaks.par_sort_by(by_intensity);
    } else {
        peaks.sort_by(by_intensity);
    }
}

#[cfg(not(feature = "parallel"))]
fn sort_by_intensity(peaks: &mut [Peak]) {
    peaks.sort_by(by_intensity);
}
