//! Keeps the calling thread on one core, so the caches being measured and the
//! time stamp counter stay the same for the whole sweep.

use crate::Error;

use nix::sched::{sched_getaffinity, sched_setaffinity, CpuSet};
use nix::unistd::Pid;

/// Restricts the calling thread to the first cpu it is currently allowed to
/// run on. Returns that cpu and the previous mask.
pub fn pin_to_single_core() -> Result<(usize, CpuSet), Error> {
    let old = sched_getaffinity(Pid::from_raw(0)).map_err(Error::Affinity)?;
    for i in 0..CpuSet::count() {
        if old.is_set(i).map_err(Error::Affinity)? {
            let mut core = CpuSet::new();
            core.set(i).map_err(Error::Affinity)?;
            sched_setaffinity(Pid::from_raw(0), &core).map_err(Error::Affinity)?;
            return Ok((i, old));
        }
    }
    Err(Error::Affinity(nix::Error::EINVAL))
}

pub fn restore_affinity(old: &CpuSet) -> Result<(), Error> {
    sched_setaffinity(Pid::from_raw(0), old).map_err(Error::Affinity)
}
