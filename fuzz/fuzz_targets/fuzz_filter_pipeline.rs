#![no_main]

use libfuzzer_sys::fuzz_target;
use mzprep::filter::{FilterPipeline, PeakFilter};
use mzprep::spectrum::{Peak, Spectrum};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    // First bytes pick the stage parameters, the rest become (mass, intensity) pairs
    let n = data[0] as usize;
    let min_peaks = data[1] as usize % 32;
    let fraction = data[2] as f64 / 255.0;
    let window = 1 + data[3] as i64;

    let peaks: Vec<Peak> = data[4..]
        .chunks_exact(4)
        .map(|c| {
            let mass = u16::from_le_bytes([c[0], c[1]]) as i64;
            let intensity = u16::from_le_bytes([c[2], c[3]]) as i64;
            Peak::new(mass, intensity)
        })
        .collect();
    let spectrum = Spectrum::new("fuzz", 30_000, Some(2), peaks);

    let pipeline = FilterPipeline::new()
        .then(PeakFilter::TopNPerWindow { window, n: 1 + n % 8 })
        .then(PeakFilter::Dedup)
        .then(PeakFilter::TopN { n })
        .then(PeakFilter::MinTicFraction { fraction, min_peaks })
        .then(PeakFilter::NormalizeToBasePeak { scale: 1_000 });

    // TopNPerWindow sorts by mass, so Dedup must never see unsorted input
    let filtered = pipeline.apply(&spectrum).expect("sorted input must not fail");
    assert!(filtered.peaks().windows(2).all(|w| w[0].mass < w[1].mass));
    assert!(filtered.peak_count() <= spectrum.peak_count());
});
