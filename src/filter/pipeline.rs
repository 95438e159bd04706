use log::debug;

use super::{FilterError, PeakFilter};
use crate::spectrum::Spectrum;

/// An ordered chain of [`PeakFilter`] stages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPipeline {
    stages: Vec<PeakFilter>,
}

impl FilterPipeline {
    /// Create an empty pipeline, which returns spectra unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline running `stages` in the given order
    pub fn from_stages(stages: Vec<PeakFilter>) -> Self {
        Self { stages }
    }

    /// Append a stage to the end of the pipeline
    pub fn then(mut self, stage: PeakFilter) -> Self {
        self.stages.push(stage);
        self
    }

    /// Stages in execution order
    pub fn stages(&self) -> &[PeakFilter] {
        &self.stages
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True if the pipeline has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage in order, feeding each stage's output to the next
    pub fn apply(&self, spectrum: &Spectrum) -> Result<Spectrum, FilterError> {
        let mut current = spectrum.clone();
        for stage in &self.stages {
            current = stage.apply(&current)?;
        }
        Ok(current)
    }

    /// Filter a batch of spectra. Output order matches input order.
    ///
    /// With the `parallel` feature spectra are processed concurrently; any error
    /// aborts the whole batch.
    pub fn apply_all(&self, spectra: &[Spectrum]) -> Result<Vec<Spectrum>, FilterError> {
        #[cfg(feature = "parallel")]
        let filtered: Vec<Spectrum> = {
            use rayon::prelude::*;
            spectra
                .par_iter()
                .map(|s| self.apply(s))
                .collect::<Result<_, _>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let filtered: Vec<Spectrum> = spectra
            .iter()
            .map(|s| self.apply(s))
            .collect::<Result<_, _>>()?;

        let peaks_in: usize = spectra.iter().map(Spectrum::peak_count).sum();
        let peaks_out: usize = filtered.iter().map(Spectrum::peak_count).sum();
        debug!(
            "Filtered {} spectra through [{}]: {} -> {} peaks",
            spectra.len(),
            self.describe(),
            peaks_in,
            peaks_out
        );

        Ok(filtered)
    }

    fn describe(&self) -> String {
        self.stages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl FromIterator<PeakFilter> for FilterPipeline {
    fn from_iter<I: IntoIterator<Item = PeakFilter>>(iter: I) -> Self {
        Self::from_stages(iter.into_iter().collect())
    }
}
