#![deny(unsafe_op_in_unsafe_fn)]

//! Measures the latency of a single dependent memory read as a function of
//! the working-set size.
//!
//! The buffer is split in chunks of `partition_width` bytes. Each byte holds
//! an offset inside a chunk, so every read picks the next address from the
//! value of the previous one and the hardware cannot overlap or prefetch the
//! chain.

use static_assertions::const_assert;

pub mod affinity;
pub mod buffer;
pub mod clock;
pub mod config;
pub mod error;
pub mod measure;
pub mod pattern;
pub mod seed;
pub mod sweep;

pub use error::Error;

use core::ptr;

/// Default chunk width. Offsets inside a chunk are stored as bytes.
pub const PARTITION_WIDTH: usize = 256;
pub const MAX_PARTITION_WIDTH: usize = u8::MAX as usize + 1;

const_assert!(PARTITION_WIDTH <= MAX_PARTITION_WIDTH);
const_assert!(PARTITION_WIDTH.is_power_of_two());

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64 as arch_x86;

// rdtsc (has mfence before and after)
#[cfg(target_arch = "x86_64")]
pub fn rdtsc_fence() -> u64 {
    unsafe {
        arch_x86::_mm_mfence();
        let tsc: u64 = arch_x86::_rdtsc();
        arch_x86::_mm_mfence();
        tsc
    }
}

/// Volatile byte load, the compiler may neither elide nor reorder it.
///
/// # Safety
///
/// p must be valid for reads.
#[inline(always)]
pub unsafe fn maccess(p: *const u8) -> u8 {
    unsafe { ptr::read_volatile(p) }
}
