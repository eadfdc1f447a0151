use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, trace};

use crate::config::{DEFAULT_RULE, DEFAULT_SPAWN_RATIO, WORLD_DIMENSIONS};
use crate::domain::{Algorithm, Cell, Dimensions, Grid, Position, Rule, Simulator, SpawnRatio};

/// Everything needed to (re)build a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    pub dims: Dimensions,
    pub spawn_ratio: SpawnRatio,
    pub rule: Rule,
    pub algorithm: Algorithm,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            dims: WORLD_DIMENSIONS,
            spawn_ratio: DEFAULT_SPAWN_RATIO,
            rule: DEFAULT_RULE,
            algorithm: Algorithm::default(),
        }
    }
}

/// Cursor movement, one cell at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Down,
    Up,
    Right,
}

impl Direction {
    /// Move `pos` one cell, wrapping around the grid edges
    pub fn step(self, pos: Position, dims: Dimensions) -> Position {
        let (w, h) = (dims.width(), dims.height());
        match self {
            Direction::Left => Position::new(pos.y, (pos.x + w - 1) % w),
            Direction::Right => Position::new(pos.y, (pos.x + 1) % w),
            Direction::Up => Position::new((pos.y + h - 1) % h, pos.x),
            Direction::Down => Position::new((pos.y + 1) % h, pos.x),
        }
    }
}

/// WorldState aggregates the simulation with its interaction state.
#[derive(Clone, Debug)]
pub struct WorldState {
    rule: Rule,
    simulator: Simulator,
    iteration: u64,
    cursor: Position,
    running: bool,
    seed: u64,
}

impl WorldState {
    /// Build a fresh world seeded from `seed`: random grid, iteration 0,
    /// paused, cursor at the origin.
    pub fn init(config: &WorldConfig, seed: u64) -> Self {
        let mut grid = Grid::new(config.dims);
        grid.randomize(config.spawn_ratio, &mut StdRng::seed_from_u64(seed));

        info!(
            seed,
            live = grid.live_count(),
            rule = %config.rule,
            spawn_ratio = config.spawn_ratio.percent(),
            "world initialized"
        );

        Self {
            rule: config.rule,
            simulator: Simulator::from_grid(grid).with_algorithm(config.algorithm),
            iteration: 0,
            cursor: Position::ORIGIN,
            running: false,
            seed,
        }
    }

    /// Start from a hand-built grid (tests, benchmarks)
    pub fn from_grid(grid: Grid, rule: Rule) -> Self {
        Self {
            rule,
            simulator: Simulator::from_grid(grid),
            iteration: 0,
            cursor: Position::ORIGIN,
            running: false,
            seed: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.simulator.grid()
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The iteration counter has hit its ceiling; the driving loop stops here.
    pub fn is_exhausted(&self) -> bool {
        self.iteration == u64::MAX
    }

    pub fn play(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Advance one generation
    pub fn advance(&mut self) {
        self.simulator.advance(&self.rule);
        self.iteration += 1;
        trace!(iteration = self.iteration, "advanced");
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = direction.step(self.cursor, self.grid().dimensions());
    }

    /// Flip the cell under the cursor and return its new state
    pub fn toggle_cell(&mut self) -> Cell {
        self.simulator.grid_mut().toggle(self.cursor)
    }
}
