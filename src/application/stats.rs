use crate::domain::{Grid, Position};

use super::WorldState;

/// Read-only view of the world handed to the rendering layer.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub cursor: Position,
    pub iteration: u64,
    pub seed: u64,
    pub live: usize,
    /// Change in live count since the previous snapshot
    pub delta: i64,
}

impl Snapshot<'_> {
    pub fn stats_line(&self) -> String {
        format!(
            "SEED: {}, ITER: {:>10}, SUM: {} ({:+})",
            self.seed, self.iteration, self.live, self.delta
        )
    }
}

/// Remembers the live count of the last snapshot so the next one can
/// report a delta. Display-only; never feeds back into the simulation.
#[derive(Clone, Debug, Default)]
pub struct PopulationTracker {
    previous_live: usize,
}

impl PopulationTracker {
    pub fn capture<'a>(&mut self, world: &'a WorldState) -> Snapshot<'a> {
        let live = world.grid().live_count();
        let delta = live as i64 - self.previous_live as i64;
        self.previous_live = live;

        Snapshot {
            grid: world.grid(),
            cursor: world.cursor(),
            iteration: world.iteration(),
            seed: world.seed(),
            live,
            delta,
        }
    }
}

/// What the panel last reported on: `(seed, iteration, live)`.
type Observed = (u64, u64, usize);

/// Status line shown above the grid.
///
/// Refreshed only at iteration 0 or while running, and only when the world
/// differs from the last refresh. Redrawing an unchanged world keeps the
/// line and its delta as they are.
#[derive(Clone, Debug, Default)]
pub struct StatsPanel {
    tracker: PopulationTracker,
    observed: Option<Observed>,
    line: String,
    delta: i64,
}

impl StatsPanel {
    /// Refresh from `world` if it changed, then return the current line
    pub fn update(&mut self, world: &WorldState) -> &str {
        let current = (world.seed(), world.iteration(), world.grid().live_count());
        let refreshable = world.iteration() == 0 || world.is_running();

        if refreshable && self.observed != Some(current) {
            let snapshot = self.tracker.capture(world);
            self.line = snapshot.stats_line();
            self.delta = snapshot.delta;
            self.observed = Some(current);
        }
        &self.line
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    /// Snapshot of `world` carrying the delta from the last refresh
    pub fn view<'a>(&self, world: &'a WorldState) -> Snapshot<'a> {
        Snapshot {
            grid: world.grid(),
            cursor: world.cursor(),
            iteration: world.iteration(),
            seed: world.seed(),
            live: world.grid().live_count(),
            delta: self.delta,
        }
    }
}
