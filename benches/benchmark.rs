//! Benchmarks for RotorCrypt keystream operations.
//!
//! Measures single-state buffer throughput, the raw advance step, and
//! cascade throughput scaling across different stage counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use rotorcrypt::{Cascade, CipherState, Key, WheelTableSet};

/// Seed used to fill the wheel tables for every benchmark.
const BENCH_SEED: u64 = 0x5EED_0F_B0B;

/// Buffer size processed per iteration.
const BUFFER_BYTES: usize = 4096;

fn bench_wheels() -> WheelTableSet {
    WheelTableSet::from_rng(&mut ChaCha20Rng::seed_from_u64(BENCH_SEED))
}

fn bench_key(stage: u8) -> Key {
    Key::new([stage, 1, 2, 3, 4, 5, 6, 7])
}

/// Benchmarks a single `advance()` of one cipher state.
fn bench_advance(c: &mut Criterion) {
    let wheels = bench_wheels();
    let mut state = CipherState::new(&wheels, &bench_key(0));

    c.bench_function("advance", |b| {
        b.iter(|| black_box(state.advance()));
    });
}

/// Benchmarks in-place processing of a 4 KiB buffer with one cipher state.
///
/// The state keeps advancing between iterations, reflecting streaming use.
fn bench_process_single(c: &mut Criterion) {
    let wheels = bench_wheels();
    let mut state = CipherState::new(&wheels, &bench_key(0));

    let mut group = c.benchmark_group("process_single_state");
    group.throughput(Throughput::Bytes(BUFFER_BYTES as u64));

    group.bench_function("4KiB", |b| {
        let mut buf = vec![0xA5u8; BUFFER_BYTES];
        b.iter(|| {
            state.process_in_place(black_box(&mut buf));
        });
    });

    group.finish();
}

/// Benchmarks cascade throughput across different stage counts.
///
/// Stage 0 advances on every byte; later stages only on carry, so the cost
/// of a deeper chain is dominated by the keystream fold.
fn bench_cascade_scaling(c: &mut Criterion) {
    let wheels = bench_wheels();
    let stage_counts: &[usize] = &[1, 2, 4, 8];

    let mut group = c.benchmark_group("process_cascade_scaling");
    group.throughput(Throughput::Bytes(BUFFER_BYTES as u64));

    for &stages in stage_counts {
        let keys: Vec<Key> = (0..stages).map(|s| bench_key(s as u8)).collect();
        let mut cascade = Cascade::from_keys(&wheels, &keys).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(stages), &stages, |b, _| {
            let mut buf = vec![0xA5u8; BUFFER_BYTES];
            b.iter(|| {
                cascade.process_in_place(black_box(&mut buf));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_advance,
    bench_process_single,
    bench_cascade_scaling,
);
criterion_main!(benches);
