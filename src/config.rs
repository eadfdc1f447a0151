use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::application::WorldConfig;
use crate::domain::{Algorithm, Dimensions, NeighborRange, Rule, SpawnRatio};
use crate::error::Result;

// World constants. Grid dimensions are fixed for every run.

pub const GRID_WIDTH: usize = 32;
pub const GRID_HEIGHT: usize = 32;
pub const WORLD_DIMENSIONS: Dimensions = Dimensions::fixed(GRID_WIDTH, GRID_HEIGHT);

/// Percentage of cells seeded alive on INIT.
pub const DEFAULT_SPAWN_RATIO: SpawnRatio = SpawnRatio::fixed(40);

/// B3/S23
pub const DEFAULT_RULE: Rule = Rule::conway();

/// How long the input layer waits for a key before issuing an idle tick.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Serial,
    Parallel,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Serial => Algorithm::Serial,
            AlgorithmArg::Parallel => Algorithm::Parallel,
        }
    }
}

/// Toroidal cellular automaton with configurable birth/survival ranges.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Percentage (0-100) of cells seeded alive on reset
    #[arg(long, default_value_t = DEFAULT_SPAWN_RATIO.percent())]
    pub spawn_ratio: u8,

    /// Birth neighbor range, "N" or "LOW-HIGH"
    #[arg(long, default_value_t = DEFAULT_RULE.birth)]
    pub birth: NeighborRange,

    /// Survival neighbor range, "N" or "LOW-HIGH"
    #[arg(long, default_value_t = DEFAULT_RULE.survival)]
    pub survival: NeighborRange,

    /// Use this seed for every reset instead of fresh entropy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds to wait for input before an idle tick
    #[arg(long, default_value_t = POLL_INTERVAL.as_millis() as u64)]
    pub poll_ms: u64,

    /// Generation strategy
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Serial)]
    pub algorithm: AlgorithmArg,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the options into a world configuration
    pub fn world_config(&self) -> Result<WorldConfig> {
        Ok(WorldConfig {
            dims: WORLD_DIMENSIONS,
            spawn_ratio: SpawnRatio::new(self.spawn_ratio)?,
            rule: Rule::new(self.birth, self.survival),
            algorithm: self.algorithm.into(),
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}
