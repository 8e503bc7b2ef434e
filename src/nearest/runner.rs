//! Greedy tour construction.

use log::debug;

use crate::matrix::DistanceMatrix;
use crate::tour::{Tour, ORIGIN};

/// Builds a tour by repeatedly visiting the closest unvisited node.
pub struct NearestNeighbor;

impl NearestNeighbor {
    /// Runs the greedy construction from the origin.
    ///
    /// Ties go to the lowest node index. When every remaining edge is
    /// infinite (or NaN) the lowest-index unvisited node is taken, so a
    /// complete tour is always returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::{DistanceMatrix, nearest::NearestNeighbor};
    ///
    /// let dm = DistanceMatrix::symmetric(4, |i, j| (j - i) as f64).unwrap();
    /// let tour = NearestNeighbor::run(&dm);
    /// assert_eq!(tour.route, vec![0, 1, 2, 3, 0]);
    /// assert_eq!(tour.length, 6.0);
    /// ```
    pub fn run(matrix: &DistanceMatrix) -> Tour {
        let n = matrix.size();
        let mut visited = vec![false; n];
        let mut route = Vec::with_capacity(n + 1);
        route.push(ORIGIN);
        visited[ORIGIN] = true;

        let mut current = ORIGIN;
        for _ in 1..n {
            let next = closest_unvisited(matrix, current, &visited);
            visited[next] = true;
            route.push(next);
            current = next;
        }
        route.push(ORIGIN);

        let tour = Tour::from_route(route, matrix);
        debug!("nearest neighbor: n={n}, length={}", tour.length);
        tour
    }
}

/// Index of the cheapest unvisited successor of `from`.
///
/// Must only be called while at least one node is unvisited.
fn closest_unvisited(matrix: &DistanceMatrix, from: usize, visited: &[bool]) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (to, &cost) in matrix.row(from).iter().enumerate() {
        if visited[to] {
            continue;
        }
        // NaN ranks with infinity so any real edge beats it.
        let cost = if cost.is_nan() { f64::INFINITY } else { cost };
        let better = match best {
            None => true,
            Some((_, best_cost)) => cost < best_cost,
        };
        if better {
            best = Some((to, cost));
        }
    }
    best.map(|(to, _)| to)
        .expect("closest_unvisited requires an unvisited node")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::is_valid_route;

    fn classic_four() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_greedy_walk_on_classic_instance() {
        // 0 -> 1 (10), 1 -> 3 (25 beats 35), 3 -> 2 (30), 2 -> 0 (15)
        let tour = NearestNeighbor::run(&classic_four());
        assert_eq!(tour.route, vec![0, 1, 3, 2, 0]);
        assert_eq!(tour.length, 80.0);
    }

    #[test]
    fn test_single_node() {
        let dm = DistanceMatrix::from_rows(vec![vec![7.0]]).expect("square");
        let tour = NearestNeighbor::run(&dm);
        assert_eq!(tour.route, vec![0, 0]);
        assert_eq!(tour.length, 0.0);
    }

    #[test]
    fn test_two_nodes_asymmetric() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 3.0], vec![8.0, 0.0]]).expect("square");
        let tour = NearestNeighbor::run(&dm);
        assert_eq!(tour.route, vec![0, 1, 0]);
        assert_eq!(tour.length, 11.0);
    }

    #[test]
    fn test_ties_prefer_lowest_index() {
        let dm = DistanceMatrix::symmetric(4, |_, _| 5.0).expect("non-empty");
        let tour = NearestNeighbor::run(&dm);
        assert_eq!(tour.route, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_infinite_edges_still_complete_tour() {
        let mut dm = DistanceMatrix::symmetric(4, |_, _| 1.0).expect("non-empty");
        for to in 1..4 {
            dm.set(2, to, f64::INFINITY);
        }
        dm.set(1, 3, f64::INFINITY);
        dm.set(1, 2, 1.0);
        let tour = NearestNeighbor::run(&dm);
        assert!(is_valid_route(&tour.route, 4));
        assert_eq!(tour.route, vec![0, 1, 2, 3, 0]);
        assert!(tour.length.is_infinite());
    }

    #[test]
    fn test_nan_edge_loses_to_real_edge() {
        let mut dm = DistanceMatrix::symmetric(3, |_, _| 4.0).expect("non-empty");
        dm.set(0, 1, f64::NAN);
        let tour = NearestNeighbor::run(&dm);
        assert_eq!(tour.route, vec![0, 2, 1, 0]);
        assert_eq!(tour.length, 12.0);
    }
}
