//! Interaction state machine.
//!
//! The controller maps abstract commands onto [`WorldState`] mutations.
//! Cursor, toggle and step commands only act while the world is paused.

use tracing::debug;

use super::world::{Direction, WorldConfig, WorldState};

/// Abstract user request, already decoded from raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Full reset with a fresh seed
    Init,
    Play,
    Pause,
    Quit,
    MoveLeft,
    MoveDown,
    MoveUp,
    MoveRight,
    ToggleCell,
    /// Advance one generation while paused
    Step,
    /// Idle tick: a poll timeout or an unbound key. Dispatching it changes
    /// nothing; progress comes only from the cycle's advance-if-running.
    Advance,
}

/// Whether the driving loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Supplies the seed captured on every INIT.
pub trait SeedSource {
    fn next_seed(&mut self) -> u64;
}

impl<F: FnMut() -> u64> SeedSource for F {
    fn next_seed(&mut self) -> u64 {
        self()
    }
}

/// Seeding policy selected at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeding {
    /// Fresh OS-backed entropy on every reset
    Entropy,
    /// Same seed on every reset, for reproducible runs
    Fixed(u64),
}

impl SeedSource for Seeding {
    fn next_seed(&mut self) -> u64 {
        match *self {
            Seeding::Entropy => rand::random(),
            Seeding::Fixed(seed) => seed,
        }
    }
}

pub struct Controller<S> {
    config: WorldConfig,
    seeds: S,
}

impl<S: SeedSource> Controller<S> {
    pub fn new(config: WorldConfig, seeds: S) -> Self {
        Self { config, seeds }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Build a world from the configuration and a fresh seed
    pub fn init_world(&mut self) -> WorldState {
        WorldState::init(&self.config, self.seeds.next_seed())
    }

    /// One outer-loop cycle: advance if running, then dispatch `command`.
    pub fn cycle(&mut self, world: &mut WorldState, command: Command) -> Flow {
        if world.is_running() {
            world.advance();
        }
        self.dispatch(world, command)
    }

    /// Apply a single command to the world
    pub fn dispatch(&mut self, world: &mut WorldState, command: Command) -> Flow {
        debug!(?command, running = world.is_running(), "dispatch");

        match command {
            Command::Init => *world = self.init_world(),
            Command::Play => world.play(),
            Command::Pause => world.pause(),
            Command::Quit => return Flow::Quit,
            Command::Advance => {}
            _ if world.is_running() => {}
            Command::ToggleCell => {
                let cell = world.toggle_cell();
                debug!(cursor = ?world.cursor(), ?cell, "toggled");
            }
            Command::Step => world.advance(),
            Command::MoveLeft => world.move_cursor(Direction::Left),
            Command::MoveDown => world.move_cursor(Direction::Down),
            Command::MoveUp => world.move_cursor(Direction::Up),
            Command::MoveRight => world.move_cursor(Direction::Right),
        }

        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Dimensions, Grid, Position, Rule};

    fn controller() -> Controller<Seeding> {
        Controller::new(WorldConfig::default(), Seeding::Fixed(42))
    }

    fn block_world() -> WorldState {
        let mut grid = Grid::new(Dimensions::new(6, 6).unwrap());
        for (y, x) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            grid.set(y, x, Cell::Alive);
        }
        WorldState::from_grid(grid, Rule::conway())
    }

    #[test]
    fn test_play_pause_are_idempotent() {
        let mut ctl = controller();
        let mut world = block_world();

        ctl.dispatch(&mut world, Command::Play);
        ctl.dispatch(&mut world, Command::Play);
        assert!(world.is_running());
        ctl.dispatch(&mut world, Command::Pause);
        ctl.dispatch(&mut world, Command::Pause);
        assert!(!world.is_running());
        assert_eq!(world.iteration(), 0);
    }

    #[test]
    fn test_step_advances_exactly_once() {
        let mut ctl = controller();
        let mut world = block_world();
        let before = world.grid().clone();

        ctl.dispatch(&mut world, Command::Step);
        assert_eq!(world.iteration(), 1);
        assert_eq!(world.grid(), &before);
    }

    #[test]
    fn test_non_advancing_commands_keep_iteration() {
        let mut ctl = controller();
        let mut world = block_world();
        for command in [
            Command::MoveRight,
            Command::ToggleCell,
            Command::MoveDown,
            Command::Play,
            Command::Pause,
            Command::Advance,
        ] {
            ctl.dispatch(&mut world, command);
        }
        assert_eq!(world.iteration(), 0);
    }

    #[test]
    fn test_cursor_wraps_through_commands() {
        let mut ctl = controller();
        let mut world = block_world();

        ctl.dispatch(&mut world, Command::MoveLeft);
        assert_eq!(world.cursor(), Position::new(0, 5));
        ctl.dispatch(&mut world, Command::MoveRight);
        assert_eq!(world.cursor(), Position::new(0, 0));
        ctl.dispatch(&mut world, Command::MoveUp);
        assert_eq!(world.cursor(), Position::new(5, 0));
        ctl.dispatch(&mut world, Command::MoveDown);
        assert_eq!(world.cursor(), Position::ORIGIN);
    }

    #[test]
    fn test_toggle_twice_restores_cell() {
        let mut ctl = controller();
        let mut world = block_world();
        let before = world.grid().clone();

        ctl.dispatch(&mut world, Command::ToggleCell);
        assert!(world.grid().is_alive(0, 0));
        ctl.dispatch(&mut world, Command::ToggleCell);
        assert_eq!(world.grid(), &before);
    }

    #[test]
    fn test_edits_ignored_while_running() {
        let mut ctl = controller();
        let mut world = block_world();
        let before = world.grid().clone();

        ctl.dispatch(&mut world, Command::Play);
        for command in [Command::MoveLeft, Command::MoveDown, Command::ToggleCell, Command::Step] {
            ctl.dispatch(&mut world, command);
        }
        assert_eq!(world.cursor(), Position::ORIGIN);
        assert_eq!(world.grid(), &before);
        assert_eq!(world.iteration(), 0);
    }

    #[test]
    fn test_quit_ends_the_loop() {
        let mut ctl = controller();
        let mut world = block_world();
        assert_eq!(ctl.dispatch(&mut world, Command::Quit), Flow::Quit);
        assert_eq!(ctl.dispatch(&mut world, Command::Advance), Flow::Continue);
    }

    #[test]
    fn test_init_resets_everything() {
        let mut ctl = controller();
        let mut world = block_world();
        ctl.dispatch(&mut world, Command::MoveDown);
        ctl.dispatch(&mut world, Command::Step);
        ctl.dispatch(&mut world, Command::Play);

        ctl.dispatch(&mut world, Command::Init);
        assert_eq!(world.iteration(), 0);
        assert!(!world.is_running());
        assert_eq!(world.cursor(), Position::ORIGIN);
        assert_eq!(world.seed(), 42);
        assert_eq!(world.grid().dimensions(), ctl.config().dims);
    }

    #[test]
    fn test_init_draws_a_new_seed_each_time() {
        let mut next = 0u64;
        let mut ctl = Controller::new(WorldConfig::default(), move || {
            next += 1;
            next
        });
        let mut world = ctl.init_world();
        assert_eq!(world.seed(), 1);
        ctl.dispatch(&mut world, Command::Init);
        assert_eq!(world.seed(), 2);
    }

    #[test]
    fn test_cycle_advances_before_dispatch() {
        let mut ctl = controller();
        let mut world = block_world();

        // Paused: the cycle itself does not advance
        ctl.cycle(&mut world, Command::Play);
        assert_eq!(world.iteration(), 0);

        // Running: advance first, then the pause takes effect
        ctl.cycle(&mut world, Command::Pause);
        assert_eq!(world.iteration(), 1);
        assert!(!world.is_running());

        ctl.cycle(&mut world, Command::Advance);
        assert_eq!(world.iteration(), 1);
    }

    #[test]
    fn test_idle_ticks_progress_only_while_running() {
        let mut ctl = controller();
        let mut world = block_world();
        ctl.dispatch(&mut world, Command::Play);
        for _ in 0..3 {
            ctl.cycle(&mut world, Command::Advance);
        }
        assert_eq!(world.iteration(), 3);
    }

    #[test]
    fn test_quit_after_running_advance() {
        let mut ctl = controller();
        let mut world = block_world();
        ctl.dispatch(&mut world, Command::Play);
        assert_eq!(ctl.cycle(&mut world, Command::Quit), Flow::Quit);
        assert_eq!(world.iteration(), 1);
    }
}
