//! Solver dispatch with timing.

use std::time::Instant;

use log::info;
use rand::Rng;

use super::types::{Algorithm, SolveReport};
use crate::aco::{AcoConfig, AcoRunner};
use crate::brute::BruteForce;
use crate::error::TspError;
use crate::held_karp::{HeldKarp, HeldKarpConfig};
use crate::matrix::DistanceMatrix;
use crate::nearest::NearestNeighbor;
use crate::tour::Tour;

/// Runs selected algorithms with shared configuration.
///
/// # Examples
///
/// ```
/// use u_tsp::{Algorithm, DistanceMatrix, Solver};
/// use u_tsp::aco::AcoConfig;
/// use u_numflow::random::create_rng;
///
/// let dm = DistanceMatrix::symmetric(5, |i, j| (i * j + 1) as f64).unwrap();
/// let solver = Solver::new().with_aco(AcoConfig::default().with_num_ants(10));
/// let mut rng = create_rng(42);
///
/// let reports = solver.solve_all(&Algorithm::ALL, &dm, &mut rng).unwrap();
/// assert_eq!(reports.len(), 4);
/// assert_eq!(reports[1].length, reports[3].length); // both exact
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    aco: AcoConfig,
    held_karp: HeldKarpConfig,
    brute_force_max_nodes: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with default per-algorithm settings.
    pub fn new() -> Self {
        Self {
            aco: AcoConfig::default(),
            held_karp: HeldKarpConfig::default(),
            brute_force_max_nodes: 12,
        }
    }

    /// Sets the Ant Colony configuration. Its `seed` is ignored: the
    /// generator passed to [`solve`](Self::solve) is used instead.
    pub fn with_aco(mut self, config: AcoConfig) -> Self {
        self.aco = config;
        self
    }

    /// Sets the Held-Karp configuration.
    pub fn with_held_karp(mut self, config: HeldKarpConfig) -> Self {
        self.held_karp = config;
        self
    }

    /// Sets the largest instance brute force will attempt (default 12,
    /// about 40M routes).
    pub fn with_brute_force_max_nodes(mut self, n: usize) -> Self {
        self.brute_force_max_nodes = n;
        self
    }

    /// Returns the Ant Colony configuration.
    pub fn aco(&self) -> &AcoConfig {
        &self.aco
    }

    /// Returns the Held-Karp configuration.
    pub fn held_karp(&self) -> &HeldKarpConfig {
        &self.held_karp
    }

    /// Runs one algorithm and times it.
    pub fn solve<R: Rng>(
        &self,
        algorithm: Algorithm,
        matrix: &DistanceMatrix,
        rng: &mut R,
    ) -> Result<SolveReport, TspError> {
        let nodes = matrix.size();
        let start = Instant::now();

        let tour: Tour = match algorithm {
            Algorithm::NearestNeighbor => NearestNeighbor::run(matrix),
            Algorithm::BruteForce => {
                if nodes > self.brute_force_max_nodes {
                    return Err(TspError::ProblemTooLarge {
                        nodes,
                        max: self.brute_force_max_nodes,
                    });
                }
                BruteForce::run(matrix).tour
            }
            Algorithm::AntColony => AcoRunner::run_with_rng(matrix, &self.aco, rng)?.best,
            Algorithm::HeldKarp => HeldKarp::run_with_config(matrix, &self.held_karp)?,
        };

        let elapsed = start.elapsed();
        info!(
            "{algorithm}: n={nodes}, length={}, elapsed={elapsed:?}",
            tour.length
        );

        Ok(SolveReport {
            algorithm,
            route: tour.route,
            length: tour.length,
            elapsed,
            nodes,
        })
    }

    /// Runs each algorithm in order on the same matrix.
    ///
    /// Stops at the first algorithm that fails.
    pub fn solve_all<R: Rng>(
        &self,
        algorithms: &[Algorithm],
        matrix: &DistanceMatrix,
        rng: &mut R,
    ) -> Result<Vec<SolveReport>, TspError> {
        algorithms
            .iter()
            .map(|&alg| self.solve(alg, matrix, rng))
            .collect()
    }

    /// Runs [`solve_all`](Self::solve_all) on each matrix.
    ///
    /// Each matrix gets its own result, so one oversized instance does not
    /// discard the others.
    pub fn solve_batch<R: Rng>(
        &self,
        algorithms: &[Algorithm],
        matrices: &[DistanceMatrix],
        rng: &mut R,
    ) -> Vec<Result<Vec<SolveReport>, TspError>> {
        matrices
            .iter()
            .map(|matrix| {
                info!("solving {}-node instance", matrix.size());
                self.solve_all(algorithms, matrix, rng)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::{is_valid_route, tour_length};
    use u_numflow::random::create_rng;

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
    fn test_solve_all_classic() {
        let mut rng = create_rng(42);
        let dm = classic_four();
        let reports = Solver::new()
            .solve_all(&Algorithm::ALL, &dm, &mut rng)
            .expect("small instance");

        assert_eq!(reports.len(), 4);
        for (report, alg) in reports.iter().zip(Algorithm::ALL) {
            assert_eq!(report.algorithm, alg);
            assert_eq!(report.nodes, 4);
            assert!(is_valid_route(&report.route, 4));
            assert_eq!(report.length, tour_length(&report.route, &dm));
        }
        assert_eq!(reports[1].length, 80.0);
        assert_eq!(reports[3].length, 80.0);
    }

    #[test]
    fn test_brute_force_limit() {
        let mut rng = create_rng(1);
        let dm = DistanceMatrix::symmetric(6, |_, _| 1.0).expect("non-empty");
        let solver = Solver::new().with_brute_force_max_nodes(5);
        assert_eq!(
            solver
                .solve(Algorithm::BruteForce, &dm, &mut rng)
                .unwrap_err(),
            TspError::ProblemTooLarge { nodes: 6, max: 5 }
        );
        assert!(solver.solve(Algorithm::HeldKarp, &dm, &mut rng).is_ok());
    }

    #[test]
    fn test_batch_isolates_failures() {
        let mut rng = create_rng(3);
        let small = classic_four();
        let large = DistanceMatrix::symmetric(8, |i, j| (i + j) as f64).expect("non-empty");
        let solver = Solver::new().with_held_karp(HeldKarpConfig::default().with_max_nodes(6));

        let results = solver.solve_batch(
            &[Algorithm::NearestNeighbor, Algorithm::HeldKarp],
            &[small, large],
            &mut rng,
        );
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(TspError::ProblemTooLarge { nodes: 8, max: 6 })
        ));
    }

    #[test]
    fn test_invalid_aco_config_surfaces() {
        let mut rng = create_rng(3);
        let solver = Solver::new().with_aco(AcoConfig::default().with_num_ants(0));
        assert!(matches!(
            solver.solve(Algorithm::AntColony, &classic_four(), &mut rng),
            Err(TspError::InvalidConfig(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_json_keys() {
        let mut rng = create_rng(5);
        let report = Solver::new()
            .solve(Algorithm::HeldKarp, &classic_four(), &mut rng)
            .expect("small instance");
        let json = serde_json::to_value(&report).expect("serializable");
        assert_eq!(json["algorithm"], "Held-Karp");
        assert_eq!(json["duration"], 80.0);
        assert_eq!(json["nodes"], 4);
        assert!(json["elapsed_secs"].is_f64());

        let back: SolveReport = serde_json::from_value(json).expect("deserializable");
        assert_eq!(back.route, report.route);
    }
}
