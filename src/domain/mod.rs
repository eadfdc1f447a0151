mod algorithm;
mod cell;
mod grid;
mod rules;
mod simulator;
mod spawn;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use grid::{Dimensions, Grid, Position};
pub use rules::{MAX_NEIGHBORS, NeighborRange, Rule};
pub use simulator::Simulator;
pub use spawn::SpawnRatio;
