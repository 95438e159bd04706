use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mzprep::binning::{BinningConfig, Bucketer};
use mzprep::spectrum::ItemProjection;

/// Create projections spread over 300-1800 Da with charges 1-4
fn create_projections(count: usize) -> Vec<ItemProjection> {
    (0..count)
        .map(|i| {
            let mass = 300_000 + ((i as i64 * 7_919) % 1_500_000);
            ItemProjection::with_charge(format!("scan={}", i), mass, 1 + (i % 4) as i32)
        })
        .collect()
}

/// Benchmark bucketing with and without charge stratification
fn bench_binning(c: &mut Criterion) {
    let mut group = c.benchmark_group("binning");

    for count in [10_000, 100_000, 1_000_000] {
        let items = create_projections(count);
        group.throughput(Throughput::Elements(count as u64));

        for use_charge in [false, true] {
            let bucketer = Bucketer::new(BinningConfig::new(1_000, 50, use_charge));
            let label = if use_charge { "charge" } else { "mass_only" };

            group.bench_with_input(
                BenchmarkId::new(label, format!("{}items", count)),
                &items,
                |b, items| b.iter(|| bucketer.bin(black_box(items), false).unwrap()),
            );
        }
    }

    group.finish();
}

/// Benchmark running the shifted and unshifted pass together
fn bench_bin_both(c: &mut Criterion) {
    let items = create_projections(100_000);
    let bucketer = Bucketer::new(BinningConfig::new(1_000, 50, true));

    c.bench_function("bin_both_100000items", |b| {
        b.iter(|| bucketer.bin_both(black_box(&items)).unwrap())
    });
}

criterion_group!(benches, bench_binning, bench_bin_both);
criterion_main!(benches);
