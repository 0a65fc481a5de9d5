//! Benchmarks du calcul d'aire

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geoarea::{AreaAccumulator, AzimuthBackend, Geographic, SeriesOrder, Spheroid};

/// Ring approximant un cercle de `n` sommets autour de (lon, lat)
fn circle(lon: f64, lat: f64, radius_deg: f64, n: usize) -> Vec<Geographic> {
    (0..n)
        .map(|i| {
            let t = -(i as f64) / n as f64 * std::f64::consts::TAU;
            Geographic::from_degrees(lon + radius_deg * t.cos(), lat + radius_deg * t.sin())
        })
        .collect()
}

fn bench_backends(c: &mut Criterion) {
    let ring = circle(2.35, 48.85, 0.5, 1_000);

    let mut group = c.benchmark_group("ring_backends");
    group.throughput(Throughput::Elements(ring.len() as u64));

    let spherical = AreaAccumulator::spherical(Spheroid::MEAN_EARTH_RADIUS).unwrap();
    group.bench_function("spherical_model", |b| {
        b.iter(|| black_box(spherical.ring_area(black_box(ring.iter().copied())).unwrap()))
    });

    for backend in [
        AzimuthBackend::Spherical,
        AzimuthBackend::Andoyer,
        AzimuthBackend::Vincenty,
    ] {
        for order in [SeriesOrder::First, SeriesOrder::Second] {
            let acc = AreaAccumulator::ellipsoidal(Spheroid::WGS84, backend, order);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", backend), u8::from(order)),
                &ring,
                |b, ring| b.iter(|| black_box(acc.ring_area(ring.iter().copied()).unwrap())),
            );
        }
    }

    group.finish();
}

fn bench_many_rings(c: &mut Criterion) {
    use rayon::prelude::*;

    let rings: Vec<Vec<Geographic>> = (0..2_000)
        .map(|i| circle(-170.0 + (i % 340) as f64, -60.0 + (i % 120) as f64, 0.05, 64))
        .collect();
    let acc = AreaAccumulator::wgs84();

    let mut group = c.benchmark_group("many_rings");
    group.throughput(Throughput::Elements(rings.len() as u64));
    group.sample_size(20);

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let total: f64 = rings
                .iter()
                .map(|r| acc.ring_area(r.iter().copied()).unwrap())
                .sum();
            black_box(total)
        })
    });

    group.bench_function("parallel", |b| {
        b.iter(|| {
            let total: f64 = rings
                .par_iter()
                .map(|r| acc.ring_area(r.iter().copied()).unwrap())
                .sum();
            black_box(total)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_backends, bench_many_rings);
criterion_main!(benches);
