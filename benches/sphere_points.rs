use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use portfolio::sphere::{sphere_point, sphere_points};

/// Benchmark: single point on the distribution spiral
fn bench_single_point(c: &mut Criterion) {
    c.bench_function("sphere_point", |b| {
        b.iter(|| black_box(sphere_point(black_box(2.5), black_box(7), black_box(11))))
    });
}

/// Benchmark: whole layouts at growing counts
fn bench_full_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_points");
    for total in [11usize, 128, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter(|| black_box(sphere_points(2.5, total)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_point, bench_full_layouts);
criterion_main!(benches);
