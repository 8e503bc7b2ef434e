//! Nearest Neighbor construction.
//!
//! Greedy heuristic: from the origin, always move to the cheapest
//! unvisited node. O(n²) time, no optimality guarantee. Useful as a fast
//! baseline and as an upper bound for the exact solvers.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem"

mod runner;

pub use runner::NearestNeighbor;
