//! Time sources for the read chain.
//!
//! A round of 1024 reads of an L1 resident buffer lasts about a microsecond,
//! so the clock must resolve well below that. `std::time::Instant` reads
//! CLOCK_MONOTONIC with nanosecond resolution; on x86_64 the fenced time stamp
//! counter is finer still and cheaper to read.

use std::time::{Duration, Instant};

pub trait Clock {
    type Stamp: Copy;

    fn now(&self) -> Self::Stamp;

    fn elapsed_ns(&self, start: Self::Stamp, end: Self::Stamp) -> f64;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Stamp = Instant;

    #[inline(always)]
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_ns(&self, start: Instant, end: Instant) -> f64 {
        end.saturating_duration_since(start).as_nanos() as f64
    }

    fn name(&self) -> &'static str {
        "monotonic"
    }
}

#[cfg(target_arch = "x86_64")]
pub use tsc::TscClock;

#[cfg(target_arch = "x86_64")]
mod tsc {
    use super::{Clock, Duration, Instant};
    use crate::{rdtsc_fence, Error};

    pub const CALIBRATION_WINDOW: Duration = Duration::from_millis(20);

    /// Fenced `rdtsc`, converted to nanoseconds with a period measured
    /// against the monotonic clock. Assumes an invariant TSC.
    #[derive(Debug, Clone, Copy)]
    pub struct TscClock {
        ns_per_tick: f64,
    }

    impl TscClock {
        pub fn calibrate() -> Result<TscClock, Error> {
            Self::calibrate_over(CALIBRATION_WINDOW)
        }

        pub fn calibrate_over(window: Duration) -> Result<TscClock, Error> {
            let start = Instant::now();
            let start_tsc = rdtsc_fence();
            let mut now = start;
            while now.duration_since(start) < window {
                now = Instant::now();
            }
            let end_tsc = rdtsc_fence();
            if end_tsc <= start_tsc {
                return Err(Error::Calibration("time stamp counter did not advance"));
            }
            let ticks = end_tsc - start_tsc;
            let ns = now.duration_since(start).as_nanos() as f64;
            Ok(TscClock {
                ns_per_tick: ns / ticks as f64,
            })
        }

        pub fn ns_per_tick(&self) -> f64 {
            self.ns_per_tick
        }
    }

    impl Clock for TscClock {
        type Stamp = u64;

        #[inline(always)]
        fn now(&self) -> u64 {
            rdtsc_fence()
        }

        fn elapsed_ns(&self, start: u64, end: u64) -> f64 {
            end.saturating_sub(start) as f64 * self.ns_per_tick
        }

        fn name(&self) -> &'static str {
            "tsc"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, MonotonicClock};
    use std::time::Duration;

    fn measures_sleep<C: Clock>(clock: &C) {
        let start = clock.now();
        std::thread::sleep(Duration::from_millis(5));
        let end = clock.now();
        let ns = clock.elapsed_ns(start, end);
        assert!(ns >= 4_000_000.0, "{} measured {} ns", clock.name(), ns);
        assert!(ns < 5_000_000_000.0, "{} measured {} ns", clock.name(), ns);
        assert_eq!(clock.elapsed_ns(end, start), 0.0);
    }

    #[test]
    fn monotonic_measures_sleep() {
        measures_sleep(&MonotonicClock);
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn tsc_measures_sleep() {
        let clock = super::TscClock::calibrate().unwrap();
        assert!(clock.ns_per_tick() > 0.0);
        // 100 MHz to 10 GHz
        assert!(clock.ns_per_tick() < 10.0 && clock.ns_per_tick() > 0.1);
        measures_sleep(&clock);
    }

    #[test]
    fn resolves_sub_microsecond() {
        let clock = MonotonicClock;
        let mut smallest = f64::INFINITY;
        for _ in 0..1000 {
            let start = clock.now();
            let end = clock.now();
            let ns = clock.elapsed_ns(start, end);
            if ns < smallest {
                smallest = ns;
            }
        }
        assert!(smallest < 1000.0);
    }
}
