use core::hint::black_box;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use memory_latency::buffer::WorkingBuffer;
use memory_latency::clock::MonotonicClock;
use memory_latency::config::SweepConfig;
use memory_latency::measure::time_access;
use memory_latency::pattern::ChunkPermutation;
use memory_latency::seed::TimeSeed;

// Shuffling happens between timed rounds, it bounds how fast a sweep can go.
fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_permutation_shuffle");
    for exponent in [10u32, 16, 20, 26] {
        let chunk_count = (1usize << exponent) / 256;
        let mut permutation = ChunkPermutation::generate(chunk_count, &mut TimeSeed);
        let size = 1usize << exponent;
        group.bench_with_input(BenchmarkId::from_parameter(size), &chunk_count, |b, _| {
            b.iter(|| {
                permutation.shuffle(&mut TimeSeed);
                black_box(permutation.as_slice()[0]);
            });
        });
    }
    group.finish();
}

fn bench_trial(c: &mut Criterion) {
    let config = SweepConfig::default();
    let buffer = WorkingBuffer::new(1 << 14, config.partition_width, &mut TimeSeed).unwrap();
    c.bench_function("time_access_16k", |b| {
        b.iter(|| black_box(time_access(&buffer, &config, &MonotonicClock, &mut TimeSeed)));
    });
}

criterion_group!(benches, bench_shuffle, bench_trial);
criterion_main!(benches);
