use rand::Rng;

use crate::error::{Error, Result};

/// Percentage chance (0..=100) that a cell starts alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnRatio(u8);

impl SpawnRatio {
    pub fn new(percent: u8) -> Result<Self> {
        if percent > 100 {
            return Err(Error::SpawnRatio(percent));
        }
        Ok(Self(percent))
    }

    pub(crate) const fn fixed(percent: u8) -> Self {
        assert!(percent <= 100);
        Self(percent)
    }

    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Draw uniformly from `0..=100` and spawn when the draw is `<= ratio`.
    ///
    /// Because the draw range is inclusive at both ends, a ratio of 0 still
    /// spawns on a draw of 0 (1 in 101).
    #[inline]
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        rng.random_range(0..=100u8) <= self.0
    }
}
