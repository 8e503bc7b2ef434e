//! Exhaustive (brute force) search.
//!
//! Enumerates every ordering of the non-origin nodes in lexicographic
//! order and keeps the shortest closed tour. Exact, but O((n-1)!·n):
//! only practical up to roughly ten nodes.

mod permutation;
mod runner;

pub use permutation::next_permutation;
pub use runner::{BruteForce, BruteForceResult};
