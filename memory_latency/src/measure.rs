use crate::buffer::WorkingBuffer;
use crate::clock::Clock;
use crate::config::SweepConfig;
use crate::maccess;
use crate::pattern::ChunkPermutation;
use crate::seed::SeedSource;

use core::hint::black_box;

/// Follows the dependent read chain for `reads` steps, starting at offset `c`.
/// Read `j` loads byte `c` of chunk `order[j % order.len()]` and its value
/// becomes the next `c`. Returns the last value read.
///
/// # Safety
///
/// `base` must be valid for reads of `order.len() * width` bytes, every entry
/// of `order` must be below `order.len()`, and every byte reachable from it
/// must be below `width`, as must the initial `c`.
#[inline(always)]
unsafe fn chase(
    base: *const u8,
    order: &[usize],
    width: usize,
    reads: usize,
    mut c: usize,
) -> usize {
    let chunk_count = order.len();
    for j in 0..reads {
        let chunk = order[j % chunk_count];
        c = unsafe { maccess(base.add(chunk * width + c)) } as usize;
    }
    c
}

/// Average latency in nanoseconds of one dependent read over
/// `rounds_per_trial` rounds of `reads_per_trial` reads, each round walking a
/// fresh random chunk order. Only the read chain is inside the timed window.
pub fn time_access<C: Clock>(
    buffer: &WorkingBuffer,
    config: &SweepConfig,
    clock: &C,
    seeds: &mut impl SeedSource,
) -> f64 {
    debug_assert!(config.validate().is_ok());
    debug_assert_eq!(buffer.partition_width(), config.partition_width);
    let width = buffer.partition_width();
    let base = buffer.as_ptr();
    let mut permutation = ChunkPermutation::generate(buffer.chunk_count(), seeds);

    let mut elapsed = 0.0;
    let mut c = 0;
    for round in 0..config.rounds_per_trial {
        if round > 0 {
            permutation.shuffle(seeds);
        }
        let order = permutation.as_slice();

        let start = clock.now();
        // Safety: order is a permutation of the buffer chunks and the buffer
        // only holds offsets below width.
        c = unsafe { chase(base, order, width, config.reads_per_trial, c) };
        let end = clock.now();

        elapsed += clock.elapsed_ns(start, end);
    }
    black_box(c);

    elapsed / (config.rounds_per_trial * config.reads_per_trial) as f64
}

/// Minimum over `trials_per_size` calls of [`time_access`].
pub fn min_access_latency<C: Clock>(
    buffer: &WorkingBuffer,
    config: &SweepConfig,
    clock: &C,
    seeds: &mut impl SeedSource,
) -> f64 {
    let mut min = f64::INFINITY;
    for trial in 0..config.trials_per_size {
        let latency = time_access(buffer, config, clock, seeds);
        log::trace!("size {} trial {}: {} ns", buffer.len(), trial, latency);
        if latency < min {
            min = latency;
        }
    }
    min
}
