//! Traveling Salesman solvers over dense distance matrices.
//!
//! Four independent strategies, each a pure function of the matrix:
//!
//! - **Nearest Neighbor**: greedy construction in O(n²); fast baseline,
//!   no optimality guarantee.
//! - **Brute Force**: lexicographic enumeration of all `(n-1)!` tours;
//!   exact, practical up to about ten nodes.
//! - **Held-Karp**: bitmask dynamic programming in O(2ⁿ·n²) time and
//!   O(2ⁿ·n) memory; exact, practical up to about twenty nodes.
//! - **Ant Colony Optimization**: stochastic population search with
//!   pheromone feedback; approximate, any size.
//!
//! Every solver returns a [`Tour`]: a route of `n + 1` nodes starting and
//! ending at node 0, and its length as computed by [`tour_length`].
//!
//! The [`solve`] module layers timing and batch runs on top; the solvers
//! themselves perform no I/O and hold no state between calls.
//!
//! # Example
//!
//! ```
//! use u_tsp::{DistanceMatrix, held_karp::HeldKarp, nearest::NearestNeighbor};
//!
//! let dm: DistanceMatrix = "4
//!     0 10 15 20
//!     10 0 35 25
//!     15 35 0 30
//!     20 25 30 0"
//!     .parse()
//!     .unwrap();
//!
//! let exact = HeldKarp::run(&dm).unwrap();
//! let greedy = NearestNeighbor::run(&dm);
//! assert_eq!(exact.length, 80.0);
//! assert!(greedy.length >= exact.length);
//! ```

pub mod aco;
pub mod brute;
pub mod error;
pub mod held_karp;
pub mod matrix;
pub mod nearest;
pub mod solve;
pub mod tour;

#[cfg(test)]
mod proptests;

pub use error::TspError;
pub use matrix::DistanceMatrix;
pub use solve::{Algorithm, SolveReport, Solver};
pub use tour::{is_valid_route, tour_length, Tour, ORIGIN};
