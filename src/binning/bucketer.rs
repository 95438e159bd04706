use std::collections::BTreeMap;

use log::debug;

use super::{BinningConfig, BinningError, BinningStats};
use crate::spectrum::ItemProjection;

/// Highest precursor charge accepted when charge splitting is enabled
pub const MAX_CHARGE: i32 = 9;

/// Key distance between two adjacent charge strata
pub const CHARGE_KEY_STRIDE: i64 = 100_000_000;

/// Groups item ids into precursor-mass buckets.
///
/// A `Bucketer` holds only its configuration; every call builds and discards its own
/// key map, so one instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Bucketer {
    config: BinningConfig,
}

impl Bucketer {
    /// Create a bucketer with the given configuration
    pub fn new(config: BinningConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &BinningConfig {
        &self.config
    }

    /// Bucket `items`, returning ids grouped per bucket in ascending key order.
    ///
    /// # Errors
    ///
    /// Fails without returning any bucket if the bin size is not positive, or if
    /// charge splitting is enabled and an item's charge is outside `0..=9`.
    pub fn bin(
        &self,
        items: &[ItemProjection],
        shift: bool,
    ) -> Result<Vec<Vec<String>>, BinningError> {
        self.bin_with_stats(items, shift).map(|(buckets, _)| buckets)
    }

    /// Like [`bin`](Self::bin), also reporting how the buckets were formed
    pub fn bin_with_stats(
        &self,
        items: &[ItemProjection],
        shift: bool,
    ) -> Result<(Vec<Vec<String>>, BinningStats), BinningError> {
        if self.config.bin_size <= 0 {
            return Err(BinningError::InvalidBinSize(self.config.bin_size));
        }

        let mut stats = BinningStats {
            items: items.len(),
            ..BinningStats::default()
        };

        if items.len() < self.config.min_bucket_size {
            let bucket = ids_by_mass(items, (0..items.len()).collect());
            stats.skipped = true;
            stats.emitted_buckets = 1;
            stats.largest_bucket = bucket.len();
            debug!("Bucketing skipped, input below minimum bucket size: {}", stats);
            return Ok((vec![bucket], stats));
        }

        let offset = if shift { self.config.shift_offset() } else { 0 };
        // key -> (charge stratum, member indices)
        let mut raw: BTreeMap<i64, (i32, Vec<usize>)> = BTreeMap::new();
        for (index, item) in items.iter().enumerate() {
            let key = self.key_for(item, offset)?;
            let stratum = self.stratum_of(item);
            raw.entry(key)
                .or_insert_with(|| (stratum, Vec::new()))
                .1
                .push(index);
        }
        stats.raw_buckets = raw.len();

        // Undersized buckets only merge forward within their charge stratum, so the
        // last bucket of each stratum may stay undersized.
        let mut buckets = Vec::with_capacity(raw.len());
        let mut carry: Vec<usize> = Vec::new();
        let mut raw = raw.into_values().peekable();
        while let Some((stratum, mut members)) = raw.next() {
            members.append(&mut carry);
            let stratum_continues = raw.peek().is_some_and(|(next, _)| *next == stratum);
            if members.len() < self.config.min_bucket_size && stratum_continues {
                stats.merged_buckets += 1;
                carry = members;
                continue;
            }
            stats.largest_bucket = stats.largest_bucket.max(members.len());
            buckets.push(ids_by_mass(items, members));
        }
        stats.emitted_buckets = buckets.len();

        debug!("Binned (shift={}): {}", shift, stats);
        Ok((buckets, stats))
    }

    /// Run the unshifted and the half-bin shifted pass over the same items.
    ///
    /// Returns `(unshifted, shifted)`. Unioning the two and deduplicating repeated
    /// pairs is left to the caller.
    pub fn bin_both(
        &self,
        items: &[ItemProjection],
    ) -> Result<(Vec<Vec<String>>, Vec<Vec<String>>), BinningError> {
        Ok((self.bin(items, false)?, self.bin(items, true)?))
    }

    fn key_for(&self, item: &ItemProjection, offset: i64) -> Result<i64, BinningError> {
        let mut key = item
            .precursor_mass
            .saturating_add(offset)
            .div_euclid(self.config.bin_size);

        if self.config.use_charge {
            if let Some(charge) = item.charge {
                if !(0..=MAX_CHARGE).contains(&charge) {
                    return Err(BinningError::InvalidCharge {
                        id: item.id.clone(),
                        charge,
                    });
                }
                key = i64::from(charge)
                    .checked_mul(CHARGE_KEY_STRIDE)
                    .and_then(|stride| key.checked_add(stride))
                    .ok_or_else(|| BinningError::KeyOverflow {
                        id: item.id.clone(),
                    })?;
            }
        }

        Ok(key)
    }

    /// Merge stratum of an item: its charge with charge splitting, else a single stratum
    fn stratum_of(&self, item: &ItemProjection) -> i32 {
        if self.config.use_charge {
            item.charge.unwrap_or(0)
        } else {
            0
        }
    }
}

/// Bucket `items` in one call.
///
/// Equivalent to `Bucketer::new(BinningConfig::new(bin_size, min_bucket_size, use_charge)).bin(items, shift)`.
pub fn bin(
    items: &[ItemProjection],
    shift: bool,
    bin_size: i64,
    min_bucket_size: usize,
    use_charge: bool,
) -> Result<Vec<Vec<String>>, BinningError> {
    Bucketer::new(BinningConfig::new(bin_size, min_bucket_size, use_charge)).bin(items, shift)
}

/// Ids of `members` ordered by precursor mass, then by input position
fn ids_by_mass(items: &[ItemProjection], mut members: Vec<usize>) -> Vec<String> {
    members.sort_unstable_by_key(|&index| (items[index].precursor_mass, index));
    members
        .into_iter()
        .map(|index| items[index].id.clone())
        .collect()
}
