use rand::Rng;
use rayon::prelude::*;

use super::{Cell, SpawnRatio};
use crate::error::{Error, Result};

/// The 8 surrounding offsets `(dy, dx)`, center excluded.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// `v + d` reduced onto `0..extent`
#[inline]
fn wrap(v: usize, d: isize, extent: usize) -> usize {
    (v % extent + extent).wrapping_add_signed(d) % extent
}

/// Positive grid extent. Fixed for the lifetime of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub(crate) const fn fixed(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0);
        Self { width, height }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Row/column coordinate on the torus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub y: usize,
    pub x: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { y: 0, x: 0 };

    pub const fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }
}

/// Toroidal cell matrix.
///
/// Every coordinate is reduced modulo the grid dimensions before use, so
/// there is no out-of-bounds access and every cell has exactly 8 neighbors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::Dead; dims.area()],
        }
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Convert 2D coordinates to 1D index, wrapping both axes
    #[inline]
    const fn index(&self, y: usize, x: usize) -> usize {
        (y % self.dims.height) * self.dims.width + (x % self.dims.width)
    }

    #[inline]
    pub fn get(&self, y: usize, x: usize) -> Cell {
        self.cells[self.index(y, x)]
    }

    #[inline]
    pub fn is_alive(&self, y: usize, x: usize) -> bool {
        self.get(y, x).is_alive()
    }

    pub fn set(&mut self, y: usize, x: usize, cell: Cell) {
        let idx = self.index(y, x);
        self.cells[idx] = cell;
    }

    /// Flip the cell at `pos` and return its new state
    pub fn toggle(&mut self, pos: Position) -> Cell {
        let idx = self.index(pos.y, pos.x);
        self.cells[idx] = self.cells[idx].toggle();
        self.cells[idx]
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    pub fn neighbor_count(&self, y: usize, x: usize) -> u8 {
        let Dimensions { width, height } = self.dims;
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dy, dx)| self.is_alive(wrap(y, dy, height), wrap(x, dx, width)))
            .count() as u8
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Reseed every cell, alive with probability `ratio`
    pub fn randomize<R: Rng + ?Sized>(&mut self, ratio: SpawnRatio, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(ratio.roll(rng)));
    }

    /// Overwrite every cell with `other`'s. Dimensions must match.
    pub fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!(self.dims, other.dims);
        self.cells.copy_from_slice(&other.cells);
    }

    /// Mutable row-major rows, used by the simulator to fill scratch buffers
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, Cell> {
        self.cells.chunks_mut(self.dims.width)
    }

    /// Parallel counterpart of [`Grid::rows_mut`]
    pub(crate) fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, Cell> {
        self.cells.par_chunks_mut(self.dims.width)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (Position::new(i / self.dims.width, i % self.dims.width), cell))
    }
}
