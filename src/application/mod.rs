mod controller;
mod stats;
mod world;

pub use controller::{Command, Controller, Flow, SeedSource, Seeding};
pub use stats::{PopulationTracker, Snapshot, StatsPanel};
pub use world::{Direction, WorldConfig, WorldState};
