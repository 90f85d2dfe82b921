#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("size {size} is not a positive multiple of the partition width {partition_width}")]
    UnalignedSize { size: usize, partition_width: usize },
    #[error("failed to map a {size} byte buffer: {source}")]
    Mapping { size: usize, source: nix::Error },
    #[error("failed to set cpu affinity: {0}")]
    Affinity(nix::Error),
    #[error("clock calibration failed: {0}")]
    Calibration(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
