use crate::buffer::WorkingBuffer;
use crate::clock::Clock;
use crate::config::SweepConfig;
use crate::measure::min_access_latency;
use crate::seed::SeedSource;
use crate::Error;

use core::fmt;
use itertools::{Itertools, MinMaxResult};
use std::io::Write;

/// Smallest observed latency for one buffer size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyRecord {
    pub size: usize,
    pub ns_per_access: f64,
}

impl fmt::Display for LatencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}    {:.6}", self.size, self.ns_per_access)
    }
}

/// Measures every size of `config` in increasing order and writes one line
/// per size to `out` as soon as it is known.
///
/// Each size gets a freshly mapped and filled buffer that is unmapped before
/// the next one is created.
pub fn run_sweep<C: Clock, S: SeedSource, W: Write>(
    config: &SweepConfig,
    clock: &C,
    seeds: &mut S,
    mut out: W,
) -> Result<Vec<LatencyRecord>, Error> {
    config.validate()?;
    let mut records = Vec::with_capacity(config.num_sizes);
    for size in config.sizes() {
        let record = {
            let buffer = WorkingBuffer::new(size, config.partition_width, seeds)?;
            log::debug!(
                "measuring {} chunks of {} bytes",
                buffer.chunk_count(),
                config.partition_width
            );
            LatencyRecord {
                size,
                ns_per_access: min_access_latency(&buffer, config, clock, seeds),
            }
        };
        writeln!(out, "{}", record)?;
        out.flush()?;
        records.push(record);
    }

    match records.iter().map(|r| r.ns_per_access).minmax() {
        MinMaxResult::MinMax(min, max) => log::info!(
            "latency ranges from {:.3} ns to {:.3} ns ({:.1}x)",
            min,
            max,
            max / min
        ),
        MinMaxResult::OneElement(only) => log::info!("latency {:.3} ns", only),
        MinMaxResult::NoElements => {}
    }
    Ok(records)
}
