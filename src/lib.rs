// Domain layer - Grid, rule and generation engine
pub mod domain;

// Application layer - World state, controller and stats
pub mod application;

// Infrastructure layer - Input decoding and rendering
pub mod input;
pub mod rendering;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use application::{Command, Controller, Flow, Seeding, StatsPanel, WorldConfig, WorldState};
pub use domain::{Algorithm, Cell, Dimensions, Grid, Position, Rule, Simulator};
pub use error::{Error, Result};
