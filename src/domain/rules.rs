use std::fmt;
use std::str::FromStr;

use super::Cell;
use crate::error::{Error, Result};

/// Largest neighbor count a cell can have on a toroidal grid.
pub const MAX_NEIGHBORS: u8 = 8;

/// Inclusive interval of neighbor counts, `low <= high <= 8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborRange {
    low: u8,
    high: u8,
}

impl NeighborRange {
    pub fn new(low: u8, high: u8) -> Result<Self> {
        if high > MAX_NEIGHBORS {
            return Err(Error::NeighborBound(high));
        }
        if low > high {
            return Err(Error::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Unchecked constructor for compile-time constants.
    const fn fixed(low: u8, high: u8) -> Self {
        assert!(low <= high && high <= MAX_NEIGHBORS);
        Self { low, high }
    }

    pub const fn low(&self) -> u8 {
        self.low
    }

    pub const fn high(&self) -> u8 {
        self.high
    }

    #[inline]
    pub const fn contains(&self, neighbors: u8) -> bool {
        self.low <= neighbors && neighbors <= self.high
    }
}

impl fmt::Display for NeighborRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

/// Accepts `"3"` (a single count) or `"2-3"` (an inclusive range).
impl FromStr for NeighborRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| Error::ParseRange(s.to_string()))
        };

        match s.split_once('-') {
            Some((low, high)) => Self::new(parse(low)?, parse(high)?),
            None => {
                let n = parse(s)?;
                Self::new(n, n)
            }
        }
    }
}

/// Birth/survival rule for the automaton.
///
/// The two ranges are independent; they may overlap or be disjoint.
/// Evaluation order is fixed:
/// 1. a count outside `survival` kills the cell,
/// 2. otherwise a count inside `birth` makes it alive,
/// 3. otherwise the cell keeps its state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub birth: NeighborRange,
    pub survival: NeighborRange,
}

impl Rule {
    pub const fn new(birth: NeighborRange, survival: NeighborRange) -> Self {
        Self { birth, survival }
    }

    /// Conway's Game of Life (B3/S23)
    pub const fn conway() -> Self {
        Self::new(NeighborRange::fixed(3, 3), NeighborRange::fixed(2, 3))
    }

    /// Next alive state for a cell with `neighbors` live neighbors.
    pub const fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if !self.survival.contains(neighbors) {
            false
        } else if self.birth.contains(neighbors) {
            true
        } else {
            alive
        }
    }

    /// Apply rule to compute next cell state
    #[inline]
    pub const fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        if self.next_state(current.is_alive(), neighbors) {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survival)
    }
}
