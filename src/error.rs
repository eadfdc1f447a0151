use thiserror::Error;

/// Construction-time validation failures.
///
/// Every engine type validates its inputs once, when it is built. After that
/// the simulation itself has no failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("neighbor range is inverted: low {low} > high {high}")]
    InvertedRange { low: u8, high: u8 },

    #[error("neighbor count {0} is out of bounds (max 8)")]
    NeighborBound(u8),

    #[error("spawn ratio {0} is out of bounds (max 100)")]
    SpawnRatio(u8),

    #[error("cannot parse neighbor range {0:?}, expected \"N\" or \"LOW-HIGH\"")]
    ParseRange(String),
}

pub type Result<T> = std::result::Result<T, Error>;
