//! Ant Colony Optimization (ACO).
//!
//! Population-based stochastic search. Each iteration a colony of ants
//! builds tours edge by edge, preferring edges with strong pheromone
//! trails and low cost; trails then evaporate and are reinforced along
//! the tours just built, in inverse proportion to their length.
//!
//! Runs a fixed number of iterations and returns the best tour seen.
//! Approximate: no optimality guarantee.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*, MIT Press

mod config;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use pheromone::PheromoneTable;
pub use runner::{AcoResult, AcoRunner};
