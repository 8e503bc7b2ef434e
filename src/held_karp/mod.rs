//! Held-Karp dynamic programming.
//!
//! Exact solver over subsets of visited nodes. `dp[S][i]` is the cheapest
//! path that leaves the origin, visits exactly the nodes of `S` and stops
//! at `i ∈ S`; the optimal tour closes the best full-set path back to the
//! origin. O(2ⁿ·n²) time and O(2ⁿ·n) memory, so it is bounded by
//! [`HeldKarpConfig::max_nodes`].
//!
//! # References
//!
//! - Held & Karp (1962), "A Dynamic Programming Approach to Sequencing Problems"
//! - Bellman (1962), "Dynamic Programming Treatment of the Travelling
//!   Salesman Problem"

mod config;
mod runner;
mod table;

pub use config::HeldKarpConfig;
pub use runner::HeldKarp;
