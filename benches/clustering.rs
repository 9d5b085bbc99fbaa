use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dotscan::{Bounds, Dbscan, PointGenerator};

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    let points = PointGenerator::new(Bounds::default())
        .random_state(42)
        .generate(1000)
        .unwrap();

    group.bench_function("fit_n1000_r20_min1", |b| {
        b.iter(|| {
            Dbscan::new(20.0, 1).fit(black_box(&points)).unwrap();
        })
    });

    group.bench_function("fit_n1000_r40_min4", |b| {
        b.iter(|| {
            Dbscan::new(40.0, 4).fit(black_box(&points)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
