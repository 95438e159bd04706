use super::types::{Peak, Spectrum};

/// Builder for constructing [`Spectrum`] objects fluently
#[derive(Debug, Clone)]
pub struct SpectrumBuilder {
    id: String,
    precursor_mass: i64,
    charge: Option<i32>,
    peaks: Vec<Peak>,
}

impl SpectrumBuilder {
    /// Start a spectrum with the given id and quantized precursor mass
    pub fn new(id: impl Into<String>, precursor_mass: i64) -> Self {
        Self {
            id: id.into(),
            precursor_mass,
            charge: None,
            peaks: Vec::new(),
        }
    }

    /// Set the precursor charge
    pub fn charge(mut self, charge: i32) -> Self {
        self.charge = Some(charge);
        self
    }

    /// Replace the peak list
    pub fn peaks(mut self, peaks: Vec<Peak>) -> Self {
        self.peaks = peaks;
        self
    }

    /// Append one peak
    pub fn add_peak(mut self, mass: i64, intensity: i64) -> Self {
        self.peaks.push(Peak { mass, intensity });
        self
    }

    /// Finish the spectrum. Peaks are not reordered.
    pub fn build(self) -> Spectrum {
        Spectrum::new(self.id, self.precursor_mass, self.charge, self.peaks)
    }
}
