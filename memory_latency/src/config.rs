use crate::{Error, MAX_PARTITION_WIDTH, PARTITION_WIDTH};

pub const TRIALS_PER_SIZE: usize = 50;
pub const READS_PER_TRIAL: usize = 1024;
pub const ROUNDS_PER_TRIAL: usize = 256;
pub const MIN_EXPONENT: u32 = 10;
pub const NUM_SIZES: usize = 17;

/// Everything the measurement depends on. The binary only ever uses the
/// default, tests shrink it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Width in bytes of a chunk, the values stored in the buffer are offsets into a chunk.
    pub partition_width: usize,
    /// Number of `time_access` calls per size, the minimum is kept.
    pub trials_per_size: usize,
    /// Dependent reads timed in one round.
    pub reads_per_trial: usize,
    /// Rounds in one trial, each with a fresh permutation.
    pub rounds_per_trial: usize,
    /// The smallest size is `2^min_exponent` bytes.
    pub min_exponent: u32,
    pub num_sizes: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            partition_width: PARTITION_WIDTH,
            trials_per_size: TRIALS_PER_SIZE,
            reads_per_trial: READS_PER_TRIAL,
            rounds_per_trial: ROUNDS_PER_TRIAL,
            min_exponent: MIN_EXPONENT,
            num_sizes: NUM_SIZES,
        }
    }
}

impl SweepConfig {
    /// Buffer sizes in bytes, doubling from `2^min_exponent`.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        let min_exponent = self.min_exponent;
        (0..self.num_sizes as u32).map(move |i| 1usize << (min_exponent + i))
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.partition_width == 0 || self.partition_width > MAX_PARTITION_WIDTH {
            return Err(Error::InvalidConfig(
                "partition_width must be between 1 and 256",
            ));
        }
        if self.trials_per_size == 0 {
            return Err(Error::InvalidConfig("trials_per_size must be positive"));
        }
        if self.reads_per_trial == 0 {
            return Err(Error::InvalidConfig("reads_per_trial must be positive"));
        }
        if self.rounds_per_trial == 0 {
            return Err(Error::InvalidConfig("rounds_per_trial must be positive"));
        }
        if self.num_sizes == 0 {
            return Err(Error::InvalidConfig("num_sizes must be positive"));
        }
        let max_exponent = (self.num_sizes - 1).checked_add(self.min_exponent as usize);
        if !matches!(max_exponent, Some(e) if e < usize::BITS as usize) {
            return Err(Error::InvalidConfig("largest size overflows usize"));
        }
        if self.rounds_per_trial.checked_mul(self.reads_per_trial).is_none() {
            return Err(Error::InvalidConfig("reads in one trial overflow usize"));
        }
        // Every later size is a multiple of the first one.
        let smallest = 1usize << self.min_exponent;
        if smallest % self.partition_width != 0 {
            return Err(Error::UnalignedSize {
                size: smallest,
                partition_width: self.partition_width,
            });
        }
        Ok(())
    }
}
