//! Held-Karp table fill and tour reconstruction.
//!
//! # Algorithm
//!
//! 1. Base: `dp[{i}][i] = cost(0, i)` for every non-origin node `i`
//! 2. For masks in increasing order (every proper subset precedes its
//!    supersets), `dp[S][i] = min_{j ∈ S∖{i}} dp[S∖{i}][j] + cost(j, i)`,
//!    remembering the minimizing `j`
//! 3. Close: `min_i dp[full][i] + cost(i, 0)`
//! 4. Walk predecessors back from the best last node, clearing bits, and
//!    reverse into a route from the origin

use log::debug;

use super::config::HeldKarpConfig;
use super::table::{bits, SubsetTable, NO_PARENT};
use crate::error::TspError;
use crate::matrix::DistanceMatrix;
use crate::tour::{Tour, ORIGIN};

/// Exact subset dynamic-programming solver.
pub struct HeldKarp;

impl HeldKarp {
    /// Runs Held-Karp with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::{DistanceMatrix, held_karp::HeldKarp};
    ///
    /// let dm = DistanceMatrix::symmetric(5, |i, j| (j - i) as f64).unwrap();
    /// let tour = HeldKarp::run(&dm).unwrap();
    /// assert_eq!(tour.length, 8.0);
    /// ```
    pub fn run(matrix: &DistanceMatrix) -> Result<Tour, TspError> {
        Self::run_with_config(matrix, &HeldKarpConfig::default())
    }

    /// Runs Held-Karp, rejecting instances above `config.max_nodes`.
    pub fn run_with_config(
        matrix: &DistanceMatrix,
        config: &HeldKarpConfig,
    ) -> Result<Tour, TspError> {
        config.validate().map_err(TspError::InvalidConfig)?;

        let n = matrix.size();
        if n > config.max_nodes {
            return Err(TspError::ProblemTooLarge {
                nodes: n,
                max: config.max_nodes,
            });
        }
        if n == 1 {
            return Ok(Tour::single());
        }

        // column c holds node c + 1
        let width = n - 1;
        let mut table = SubsetTable::new(width)?;
        let full = table.full_mask();

        for c in 0..width {
            table.set(1 << c, c, matrix.get(ORIGIN, c + 1), NO_PARENT);
        }

        for mask in 1..=full {
            if mask.count_ones() < 2 {
                continue;
            }
            for last in bits(mask) {
                let prev = mask ^ (1 << last);
                let mut best = f64::INFINITY;
                let mut parent = NO_PARENT;
                for via in bits(prev) {
                    let cost = table.cost(prev, via) + matrix.get(via + 1, last + 1);
                    if parent == NO_PARENT || cost < best {
                        best = cost;
                        parent = via as u8;
                    }
                }
                table.set(mask, last, best, parent);
            }
        }

        let mut last = 0;
        let mut best = table.cost(full, 0) + matrix.get(1, ORIGIN);
        for c in 1..width {
            let cost = table.cost(full, c) + matrix.get(c + 1, ORIGIN);
            if cost < best {
                best = cost;
                last = c;
            }
        }

        let route = backtrack(&table, full, last);
        let tour = Tour::from_route(route, matrix);
        debug!(
            "held-karp: n={n}, table entries={}, optimum={best}, length={}",
            table.entries(),
            tour.length
        );
        Ok(tour)
    }
}

/// Rebuilds the closed route ending at column `last` of the full mask.
fn backtrack(table: &SubsetTable, full: usize, last: usize) -> Vec<usize> {
    let mut reversed = Vec::with_capacity(table.full_mask().count_ones() as usize);
    let mut mask = full;
    let mut column = last;
    loop {
        reversed.push(column + 1);
        let parent = table.parent(mask, column);
        mask ^= 1 << column;
        if parent == NO_PARENT {
            break;
        }
        column = parent as usize;
    }
    debug_assert_eq!(mask, 0, "predecessor chain must cover every node");

    let mut route = Vec::with_capacity(reversed.len() + 2);
    route.push(ORIGIN);
    route.extend(reversed.into_iter().rev());
    route.push(ORIGIN);
    route
}
