//! Exhaustive enumeration loop.

use log::debug;

use super::permutation::next_permutation;
use crate::matrix::DistanceMatrix;
use crate::tour::{tour_length, Tour, ORIGIN};

/// Result of a brute force run.
#[derive(Debug, Clone)]
pub struct BruteForceResult {
    /// The optimal tour.
    pub tour: Tour,

    /// Number of candidate routes evaluated, `(n-1)!`.
    pub permutations: u64,
}

/// Exact solver enumerating every tour.
pub struct BruteForce;

impl BruteForce {
    /// Evaluates all `(n-1)!` routes and returns the shortest.
    ///
    /// Among equally short routes, the lexicographically first one wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::{DistanceMatrix, brute::BruteForce};
    ///
    /// let dm = DistanceMatrix::symmetric(4, |i, j| (j - i) as f64).unwrap();
    /// let result = BruteForce::run(&dm);
    /// assert_eq!(result.tour.length, 6.0);
    /// assert_eq!(result.permutations, 6);
    /// ```
    pub fn run(matrix: &DistanceMatrix) -> BruteForceResult {
        let n = matrix.size();

        // route = [0, perm..., 0]; the interior is permuted in place
        let mut route: Vec<usize> = Vec::with_capacity(n + 1);
        route.push(ORIGIN);
        route.extend(1..n);
        route.push(ORIGIN);

        let mut best_route = route.clone();
        let mut best_length = tour_length(&route, matrix);
        let mut permutations = 1u64;

        while next_permutation(&mut route[1..n]) {
            permutations += 1;
            let length = tour_length(&route, matrix);
            if length < best_length {
                best_length = length;
                best_route.copy_from_slice(&route);
            }
        }

        debug!("brute force: n={n}, permutations={permutations}, length={best_length}");

        BruteForceResult {
            tour: Tour {
                route: best_route,
                length: best_length,
            },
            permutations,
        }
    }
}
