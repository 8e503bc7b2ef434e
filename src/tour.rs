//! Closed tours and the tour evaluator shared by every solver.

use crate::matrix::DistanceMatrix;

/// The tour origin. Every route starts and ends here.
pub const ORIGIN: usize = 0;

/// A closed tour and its total length.
///
/// `route` has `n + 1` entries: it starts and ends at [`ORIGIN`] and visits
/// every other node exactly once in between. `length` always equals
/// [`tour_length`] of `route` on the matrix that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Node sequence, closed at the origin.
    pub route: Vec<usize>,
    /// Sum of the edge costs along `route`.
    pub length: f64,
}

impl Tour {
    /// Builds a tour from a closed route, evaluating its length.
    pub fn from_route(route: Vec<usize>, matrix: &DistanceMatrix) -> Self {
        debug_assert!(
            is_valid_route(&route, matrix.size()),
            "malformed route {route:?}"
        );
        let length = tour_length(&route, matrix);
        Self { route, length }
    }

    /// The trivial tour of a single-node instance: `[0, 0]` with length 0.
    pub fn single() -> Self {
        Self {
            route: vec![ORIGIN, ORIGIN],
            length: 0.0,
        }
    }

    /// Number of distinct nodes visited.
    pub fn nodes(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// Total length of a closed route.
///
/// Sums the cost of each consecutive pair, so a route of `n + 1` nodes
/// contributes exactly `n` edges; the closing edge is already in the route.
/// Steps from a node to itself cost nothing, which makes the single-node
/// tour `[0, 0]` have length 0 without reading the diagonal.
///
/// The route must have at least two entries; malformed routes give an
/// unspecified result.
///
/// # Examples
///
/// ```
/// use u_tsp::{tour_length, DistanceMatrix};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 4.0],
///     vec![2.0, 0.0, 3.0],
///     vec![5.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(tour_length(&[0, 1, 2, 0], &dm), 1.0 + 3.0 + 5.0);
/// ```
pub fn tour_length(route: &[usize], matrix: &DistanceMatrix) -> f64 {
    route
        .windows(2)
        .filter(|w| w[0] != w[1])
        .map(|w| matrix.get(w[0], w[1]))
        .sum()
}

/// Checks that `route` is a closed tour over `n` nodes anchored at the
/// origin: length `n + 1`, first and last entry `0`, and every node in
/// `1..n` exactly once in between.
pub fn is_valid_route(route: &[usize], n: usize) -> bool {
    if n == 0 || route.len() != n + 1 {
        return false;
    }
    if route[0] != ORIGIN || route[n] != ORIGIN {
        return false;
    }
    let mut seen = vec![false; n];
    seen[ORIGIN] = true;
    for &node in &route[1..n] {
        if node >= n || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    true
}

/// Rotates an open cycle (no repeated closing node) so it starts at the
/// origin, then appends the origin to close it.
///
/// Rotation keeps the same directed edges, so the length is unchanged.
pub(crate) fn close_at_origin(cycle: &[usize]) -> Vec<usize> {
    let start = cycle.iter().position(|&v| v == ORIGIN).unwrap_or(0);
    let mut route = Vec::with_capacity(cycle.len() + 1);
    route.extend_from_slice(&cycle[start..]);
    route.extend_from_slice(&cycle[..start]);
    route.push(ORIGIN);
    route
}
