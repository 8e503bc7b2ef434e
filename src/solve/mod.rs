//! Timed dispatch over the four solvers.
//!
//! The solvers themselves carry no instrumentation. This layer picks
//! which ones to run, measures wall-clock time around each call, and
//! packages the outcome as a [`SolveReport`] for whatever reporting the
//! caller does (with the `serde` feature, reports serialize directly).

mod engine;
mod types;

pub use engine::Solver;
pub use types::{Algorithm, SolveReport};
