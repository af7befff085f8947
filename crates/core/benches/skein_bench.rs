//! Benchmark for the Skein hashers

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use skein_core::{HalfSkein256, Skein512};

/// Salted passphrase stretched 300 times, as UTF-16LE code units
fn stretched_passphrase() -> Vec<u8> {
    let pass = "omg%20a%20paSsphrAse";
    let salt = "fb6d983003191d940155993b558423c1";
    let text: String = (0..300).map(|i| format!("{pass},{salt},{i};")).collect();
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn bench_short(c: &mut Criterion) {
    let skein = Skein512::new();
    let half = HalfSkein256::new();
    let input = b"benchmark input data for Skein!!";

    c.bench_function("skein512_short", |b| b.iter(|| skein.hash(black_box(input))));
    c.bench_function("half_skein256_short", |b| b.iter(|| half.hash(black_box(input))));
}

fn bench_stretched(c: &mut Criterion) {
    let input = stretched_passphrase();
    let skein = Skein512::new();
    let half = HalfSkein256::new();

    let mut group = c.benchmark_group("stretched_passphrase");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("skein512", |b| b.iter(|| skein.hash(black_box(&input))));
    group.bench_function("half_skein256", |b| b.iter(|| half.hash(black_box(&input))));
    group.finish();
}

criterion_group!(benches, bench_short, bench_stretched);
criterion_main!(benches);
