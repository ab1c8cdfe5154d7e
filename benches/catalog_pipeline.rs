use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use hifitime::Epoch;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mpcorb::{decode_row, process_catalog, OrbitFlags, OrbitType, PipelineParams};

const CERES_ROW: &str = "00001    3.34  0.15 K2555 188.70269   73.27343   80.25221   10.58780  0.0794013  0.21424651   2.7660512  0 E2024-V47  7330 125 1801-2024 0.65 M-v 30k MPCORB     0000      (1) Ceres              20241101";

/// Ceres with random e, a, M0, U and flags.
fn random_row(rng: &mut StdRng) -> String {
    let mut line = CERES_ROW.to_string();
    let e = format!("{:9.7}", rng.random_range(0.0..0.99));
    let a = format!("{:11.7}", rng.random_range(0.8..6.0));
    let m = format!("{:9.5}", rng.random_range(0.0..360.0));
    let u = format!("{}", rng.random_range(0..3));
    let flags = format!("{:04X}", [0x0000u16, 0x0006, 0x0008, 0x0009, 0x0803][rng.random_range(0..5)]);
    line.replace_range(70..79, &e);
    line.replace_range(92..103, &a);
    line.replace_range(26..35, &m);
    line.replace_range(105..106, &u);
    line.replace_range(161..165, &flags);
    line
}

fn synthetic_catalog(n: usize) -> String {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut text = String::new();
    for i in 0..43 {
        text.push_str(&format!("header line {i}\n"));
    }
    for _ in 0..n {
        text.push_str(&random_row(&mut rng));
        text.push('\n');
    }
    text
}

fn bench_decode_row(c: &mut Criterion) {
    c.bench_function("decode_row/ceres", |b| {
        b.iter(|| black_box(decode_row(black_box(CERES_ROW)).unwrap()))
    });
}

fn bench_classify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("classify/random_orbits", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| {
                        let e = rng.random_range(0.0..1.2);
                        let a = rng.random_range(0.5..50.0);
                        let flags = OrbitFlags::from_bits(rng.random::<u16>());
                        (e, a, flags)
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (e, a, flags) in cases {
                    black_box(OrbitType::classify(black_box(e), black_box(a), &flags));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_catalog(c: &mut Criterion) {
    let n = 10_000;
    let text = synthetic_catalog(n);
    let params = PipelineParams::builder()
        .target_epoch(Epoch::from_gregorian_utc_at_midnight(2025, 6, 1))
        .build()
        .unwrap();

    let mut group = c.benchmark_group("process_catalog");
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("synthetic_10k", |b| {
        b.iter(|| {
            let payload = process_catalog(black_box(text.as_bytes()), &params).unwrap();
            black_box(payload.total_records())
        })
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_decode_row, bench_classify, bench_catalog
);
criterion_main!(benches);
