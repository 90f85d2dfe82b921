use crate::seed::SeedSource;
use crate::Error;

use core::ffi::c_void;
use core::num::NonZeroUsize;
use core::ptr::NonNull;
use core::slice::{from_raw_parts, from_raw_parts_mut};
use nix::sys::mman;
use rand::Rng;

/// Anonymous mapping of `len` bytes, viewed as `len / partition_width`
/// consecutive chunks. Every byte is an offset into a chunk, i.e. is below
/// `partition_width`. Never empty. The mapping is released on drop.
pub struct WorkingBuffer {
    pointer: NonNull<u8>,
    len: usize,
    partition_width: usize,
}

impl WorkingBuffer {
    /// Maps a fresh buffer and fills it with random offsets.
    pub fn new(
        len: usize,
        partition_width: usize,
        seeds: &mut impl SeedSource,
    ) -> Result<WorkingBuffer, Error> {
        if partition_width == 0 || partition_width > crate::MAX_PARTITION_WIDTH {
            return Err(Error::InvalidConfig(
                "partition_width must be between 1 and 256",
            ));
        }
        let length = match NonZeroUsize::new(len) {
            Some(length) if len % partition_width == 0 => length,
            _ => {
                return Err(Error::UnalignedSize {
                    size: len,
                    partition_width,
                })
            }
        };
        let p = unsafe {
            mman::mmap_anonymous(
                None,
                length,
                mman::ProtFlags::PROT_READ | mman::ProtFlags::PROT_WRITE,
                mman::MapFlags::MAP_PRIVATE | mman::MapFlags::MAP_ANONYMOUS,
            )
        }
        .map_err(|source| Error::Mapping { size: len, source })?;
        let mut buffer = WorkingBuffer {
            pointer: p.cast(),
            len,
            partition_width,
        };
        buffer.fill_random(seeds);
        Ok(buffer)
    }

    /// Redraws every byte uniformly in `[0, partition_width)`.
    pub fn fill_random(&mut self, seeds: &mut impl SeedSource) {
        let mut rng = seeds.rng();
        let width = self.partition_width as u16;
        for byte in self.slice_mut() {
            *byte = rng.random_range(0..width) as u8;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn partition_width(&self) -> usize {
        self.partition_width
    }

    pub fn chunk_count(&self) -> usize {
        self.len / self.partition_width
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.pointer.as_ptr()
    }

    pub fn slice(&self) -> &[u8] {
        unsafe { from_raw_parts(self.pointer.as_ptr(), self.len) }
    }

    fn slice_mut(&mut self) -> &mut [u8] {
        unsafe { from_raw_parts_mut(self.pointer.as_ptr(), self.len) }
    }

    pub fn chunk(&self, index: usize) -> &[u8] {
        let start = index * self.partition_width;
        &self.slice()[start..start + self.partition_width]
    }
}

impl Drop for WorkingBuffer {
    fn drop(&mut self) {
        let p: NonNull<c_void> = self.pointer.cast();
        if let Err(e) = unsafe { mman::munmap(p, self.len) } {
            log::warn!("munmap of {} bytes at {:p} failed: {}", self.len, p, e);
        }
    }
}
