use rayon::prelude::*;

use super::{Algorithm, Cell, Dimensions, Grid, Rule};

/// Double-buffered generation engine.
///
/// `current` is the published grid. `scratch` receives the next generation
/// and is never read while it is being written; once the pass is complete
/// it is copied back so both buffers are identical between generations.
#[derive(Clone, Debug)]
pub struct Simulator {
    current: Grid,
    scratch: Grid,
    algorithm: Algorithm,
}

impl Simulator {
    pub fn new(dims: Dimensions) -> Self {
        Self::from_grid(Grid::new(dims))
    }

    /// Start from an existing generation
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            scratch: grid.clone(),
            current: grid,
            algorithm: Algorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// The published generation
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Direct edits to the published generation (cell toggling, reseeding).
    /// The scratch buffer is resynchronized on the next advance.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    /// Compute one generation into scratch, then copy it back to current.
    pub fn advance(&mut self, rule: &Rule) {
        let current = &self.current;
        let fill_row = |(y, row): (usize, &mut [Cell])| {
            for (x, cell) in row.iter_mut().enumerate() {
                let neighbors = current.neighbor_count(y, x);
                *cell = rule.evolve(current.get(y, x), neighbors);
            }
        };

        match self.algorithm {
            Algorithm::Serial => self.scratch.rows_mut().enumerate().for_each(fill_row),
            Algorithm::Parallel => self.scratch.par_rows_mut().enumerate().for_each(fill_row),
        }

        self.current.copy_from(&self.scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NeighborRange, Position, SpawnRatio};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dims(width: usize, height: usize) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    fn with_cells(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(dims(width, height));
        for &(y, x) in alive {
            grid.set(y, x, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_block_is_still_life() {
        let block = with_cells(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        let mut sim = Simulator::from_grid(block.clone());
        let rule = Rule::conway();

        sim.advance(&rule);
        assert_eq!(sim.grid(), &block);
        sim.advance(&rule);
        assert_eq!(sim.grid(), &block);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = with_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = with_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let mut sim = Simulator::from_grid(horizontal.clone());
        let rule = Rule::conway();

        sim.advance(&rule);
        assert_eq!(sim.grid(), &vertical);
        sim.advance(&rule);
        assert_eq!(sim.grid(), &horizontal);
    }

    #[test]
    fn test_blinker_across_the_seam() {
        // Horizontal blinker straddling the left/right edge
        let horizontal = with_cells(5, 5, &[(2, 4), (2, 0), (2, 1)]);
        let vertical = with_cells(5, 5, &[(1, 0), (2, 0), (3, 0)]);
        let mut sim = Simulator::from_grid(horizontal);

        sim.advance(&Rule::conway());
        assert_eq!(sim.grid(), &vertical);
    }

    #[test]
    fn test_no_intra_generation_aliasing() {
        // A glider only moves correctly if every cell reads the old generation
        let glider = with_cells(8, 8, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let shifted = with_cells(8, 8, &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
        let mut sim = Simulator::from_grid(glider);
        let rule = Rule::conway();

        for _ in 0..4 {
            sim.advance(&rule);
        }
        // After 4 generations a glider moves one cell down and right
        assert_eq!(sim.grid(), &shifted);
    }

    #[test]
    fn test_buffers_identical_after_advance() {
        let mut sim = Simulator::from_grid(with_cells(6, 6, &[(1, 1), (1, 2), (1, 3)]));
        sim.advance(&Rule::conway());
        assert_eq!(sim.current, sim.scratch);
    }

    #[test]
    fn test_toggled_cells_evolve() {
        let mut sim = Simulator::new(dims(6, 6));
        for x in 1..4 {
            sim.grid_mut().toggle(Position::new(2, x));
        }
        sim.advance(&Rule::conway());
        assert_eq!(sim.grid().live_count(), 3);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut seeded = Grid::new(dims(40, 24));
        seeded.randomize(SpawnRatio::new(35).unwrap(), &mut StdRng::seed_from_u64(3));
        let rule = Rule::new(NeighborRange::new(3, 4).unwrap(), NeighborRange::new(1, 5).unwrap());

        let mut serial = Simulator::from_grid(seeded.clone());
        let mut parallel = Simulator::from_grid(seeded).with_algorithm(Algorithm::Parallel);
        for _ in 0..10 {
            serial.advance(&rule);
            parallel.advance(&rule);
            assert_eq!(serial.grid(), parallel.grid());
        }
    }
}
