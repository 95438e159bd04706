/// Quantized mass units per Dalton
pub const MASS_RESOLUTION: f64 = 1_000.0;

/// Quantize a floating m/z (or fragment mass) to integer [`MASS_RESOLUTION`] units.
///
/// Values are rounded to the nearest unit, halves away from zero.
pub fn quantize_mass(value: f64) -> i64 {
    (value * MASS_RESOLUTION).round() as i64
}

/// A single centroided peak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Peak {
    /// Quantized mass-to-charge value
    pub mass: i64,
    /// Integer intensity
    pub intensity: i64,
}

impl Peak {
    /// Create a peak
    pub fn new(mass: i64, intensity: i64) -> Self {
        Self { mass, intensity }
    }
}

/// The fields of a spectrum the bucketer needs: its id, precursor mass and charge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemProjection {
    /// Unique item identifier
    pub id: String,
    /// Quantized precursor mass
    pub precursor_mass: i64,
    /// Precursor charge state, if known. Valid charges lie in `0..=9`.
    pub charge: Option<i32>,
}

impl ItemProjection {
    /// Create a projection without charge information
    pub fn new(id: impl Into<String>, precursor_mass: i64) -> Self {
        Self {
            id: id.into(),
            precursor_mass,
            charge: None,
        }
    }

    /// Create a projection carrying a precursor charge
    pub fn with_charge(id: impl Into<String>, precursor_mass: i64, charge: i32) -> Self {
        Self {
            id: id.into(),
            precursor_mass,
            charge: Some(charge),
        }
    }
}

/// An immutable spectrum: precursor information plus its peak list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spectrum {
    id: String,
    precursor_mass: i64,
    charge: Option<i32>,
    peaks: Vec<Peak>,
}

impl Spectrum {
    /// Create a spectrum from its parts. Peaks are kept in the given order.
    pub fn new(
        id: impl Into<String>,
        precursor_mass: i64,
        charge: Option<i32>,
        peaks: Vec<Peak>,
    ) -> Self {
        Self {
            id: id.into(),
            precursor_mass,
            charge,
            peaks,
        }
    }

    /// Spectrum identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Quantized precursor mass
    pub fn precursor_mass(&self) -> i64 {
        self.precursor_mass
    }

    /// Precursor charge, if known
    pub fn charge(&self) -> Option<i32> {
        self.charge
    }

    /// Peak list in its current order
    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    /// Get the number of peaks in this spectrum
    pub fn peak_count(&self) -> usize {
        self.peaks.len()
    }

    /// Total ion current: sum of all peak intensities, widened so it cannot overflow
    pub fn total_ion_current(&self) -> i128 {
        self.peaks.iter().map(|p| i128::from(p.intensity)).sum()
    }

    /// Most intense peak; the lowest mass wins ties. `None` for an empty spectrum.
    pub fn base_peak(&self) -> Option<Peak> {
        self.peaks
            .iter()
            .copied()
            .max_by(|a, b| a.intensity.cmp(&b.intensity).then(b.mass.cmp(&a.mass)))
    }

    /// True if peaks ascend by mass (equal masses allowed)
    pub fn is_mass_sorted(&self) -> bool {
        self.peaks.windows(2).all(|w| w[0].mass <= w[1].mass)
    }

    /// New spectrum with the same precursor information and a replaced peak list
    pub fn with_peaks(&self, peaks: Vec<Peak>) -> Self {
        Self {
            id: self.id.clone(),
            precursor_mass: self.precursor_mass,
            charge: self.charge,
            peaks,
        }
    }

    /// Project this spectrum onto the fields used for bucketing
    pub fn projection(&self) -> ItemProjection {
        ItemProjection {
            id: self.id.clone(),
            precursor_mass: self.precursor_mass,
            charge: self.charge,
        }
    }
}
