use memory_latency::affinity::pin_to_single_core;
#[cfg(target_arch = "x86_64")]
use memory_latency::clock::TscClock;
use memory_latency::clock::{Clock, MonotonicClock};
use memory_latency::config::SweepConfig;
use memory_latency::seed::TimeSeed;
use memory_latency::sweep::run_sweep;
use memory_latency::Error;

use std::io;

fn sweep<C: Clock>(config: &SweepConfig, clock: C) -> Result<(), Error> {
    log::info!("timing with the {} clock", clock.name());
    let stdout = io::stdout();
    run_sweep(config, &clock, &mut TimeSeed, stdout.lock())?;
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let config = SweepConfig::default();

    // The previous mask is not restored, the process exits after the sweep.
    match pin_to_single_core() {
        Ok((cpu, _)) => log::info!("pinned to cpu {}", cpu),
        Err(e) => log::warn!("running unpinned: {}", e),
    }

    #[cfg(target_arch = "x86_64")]
    match TscClock::calibrate() {
        Ok(clock) => {
            log::info!("tsc period {:.4} ns", clock.ns_per_tick());
            return sweep(&config, clock);
        }
        Err(e) => log::warn!("{}, falling back to the monotonic clock", e),
    }

    sweep(&config, MonotonicClock)
}
