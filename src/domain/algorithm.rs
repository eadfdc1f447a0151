//! Algorithm enum for selecting how a generation is computed.
//!
//! Both strategies read only the current buffer and write only the scratch
//! buffer, so they always produce identical grids.

/// Available evolution strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell, single thread
    #[default]
    Serial,
    /// Rows filled in parallel with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }
}
