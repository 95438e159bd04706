use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mzprep::filter::{FilterPipeline, PeakFilter};
use mzprep::spectrum::{Peak, Spectrum};

/// Create a mass-sorted spectrum with pseudo-random intensities
fn create_spectrum(index: usize, peak_count: usize) -> Spectrum {
    let peaks = (0..peak_count as i64)
        .map(|j| Peak::new(100_000 + j * 250, 1 + (j * 7_919 + index as i64) % 100_000))
        .collect();
    Spectrum::new(format!("scan={}", index), 500_000, Some(2), peaks)
}

/// Benchmark the top-N stage on single spectra of increasing size
fn bench_top_n(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_n");

    for peak_count in [200, 5_000, 100_000] {
        let spectrum = create_spectrum(0, peak_count);
        let stage = PeakFilter::TopN { n: 150 };
        group.throughput(Throughput::Elements(peak_count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}peaks", peak_count)),
            &spectrum,
            |b, spectrum| b.iter(|| stage.apply(black_box(spectrum)).unwrap()),
        );
    }

    group.finish();
}

/// Benchmark a typical clustering pipeline over a batch of spectra
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = FilterPipeline::new()
        .then(PeakFilter::Dedup)
        .then(PeakFilter::TopN { n: 150 })
        .then(PeakFilter::MinTicFraction {
            fraction: 0.8,
            min_peaks: 20,
        });

    for batch_size in [100, 1_000, 10_000] {
        let batch: Vec<Spectrum> = (0..batch_size).map(|i| create_spectrum(i, 300)).collect();
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}spectra", batch_size)),
            &batch,
            |b, batch| b.iter(|| pipeline.apply_all(black_box(batch)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_top_n, bench_pipeline);
criterion_main!(benches);
