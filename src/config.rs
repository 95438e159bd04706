//! TOML configuration for the bucketer, the peak-selection pipeline and the property
//! store.
//!
//! ```toml
//! # mzprep.toml
//! [binning]
//! bin_size = 1000
//! min_bucket_size = 100
//! use_charge = true
//!
//! [[filters]]
//! type = "dedup"
//!
//! [[filters]]
//! type = "top_n"
//! n = 50
//!
//! [store]
//! backend = "persistent"
//! max_entries = 20000000
//! ```
//!
//! Every section is optional.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::binning::{BinningConfig, Bucketer};
use crate::filter::{FilterPipeline, PeakFilter};
use crate::store::{open_property_store, PropertyStore, StoreConfig};

/// Root configuration structure for mzprep.toml files.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrepConfig {
    /// Precursor-mass bucketing settings.
    #[serde(default)]
    pub binning: BinningConfig,

    /// Peak-selection stages, run in the listed order.
    #[serde(default)]
    pub filters: Vec<PeakFilter>,

    /// Property store backend.
    #[serde(default)]
    pub store: StoreConfig,
}

impl PrepConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Bucketer using the `[binning]` settings.
    pub fn bucketer(&self) -> Bucketer {
        Bucketer::new(self.binning)
    }

    /// Pipeline running the `[[filters]]` stages in order.
    pub fn pipeline(&self) -> FilterPipeline {
        FilterPipeline::from_stages(self.filters.clone())
    }

    /// Open the property store selected by `[store]`.
    pub fn open_store(&self) -> Result<Box<dyn PropertyStore>> {
        open_property_store(&self.store).context("Failed to open property store")
    }
}
