//! ACO execution loop.
//!
//! # Algorithm
//!
//! 1. Initialize every trail to `initial_pheromone`
//! 2. At each iteration:
//!    a. Every ant starts at a uniformly random node and extends its tour
//!       with probability ∝ `τ(c,x)^α · (1/d(c,x))^β` over unvisited `x`
//!    b. Score each tour; replace the global best only on a strict improvement
//!    c. Evaporate all trails by `ρ`, then deposit `1/L` along each tour
//! 3. Stop after `num_iterations`

use log::{debug, trace};
use rand::Rng;
use u_numflow::random::create_rng;

use super::config::AcoConfig;
use super::pheromone::PheromoneTable;
use crate::error::TspError;
use crate::matrix::DistanceMatrix;
use crate::tour::{close_at_origin, Tour};

/// Result of an ACO run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// The shortest tour found, rotated to start and end at the origin.
    pub best: Tour,

    /// Iterations executed.
    pub iterations: usize,

    /// Iteration (0-based) in which `best` was first built.
    pub best_iteration: usize,

    /// Total tours constructed (`num_ants · iterations`).
    pub tours_built: usize,

    /// Best length so far at the end of each iteration. Non-increasing.
    pub best_history: Vec<f64>,
}

/// Executes the Ant Colony solver.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO with a generator seeded from `config.seed`, or from
    /// entropy when no seed is set.
    pub fn run(matrix: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult, TspError> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs ACO drawing all randomness from the caller's generator.
    ///
    /// Two runs with identically seeded generators return identical results.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::{DistanceMatrix, aco::{AcoConfig, AcoRunner}};
    /// use u_numflow::random::create_rng;
    ///
    /// let dm = DistanceMatrix::symmetric(6, |i, j| (j - i) as f64).unwrap();
    /// let config = AcoConfig::default().with_num_ants(10).with_num_iterations(20);
    /// let mut rng = create_rng(7);
    /// let result = AcoRunner::run_with_rng(&dm, &config, &mut rng).unwrap();
    /// assert_eq!(result.best.route.len(), 7);
    /// assert!(result.best.length >= 10.0);
    /// ```
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &AcoConfig,
        rng: &mut R,
    ) -> Result<AcoResult, TspError> {
        config.validate().map_err(TspError::InvalidConfig)?;

        let n = matrix.size();
        let mut pheromone = PheromoneTable::new(n, config.initial_pheromone);
        let mut colony = Colony::new(n);

        let mut best: Option<Tour> = None;
        let mut best_iteration = 0;
        let mut best_history = Vec::with_capacity(config.num_iterations);
        let mut tours: Vec<Tour> = Vec::with_capacity(config.num_ants);

        for iteration in 0..config.num_iterations {
            tours.clear();

            for _ in 0..config.num_ants {
                let cycle = colony.construct(matrix, &pheromone, config, rng);
                let tour = Tour::from_route(close_at_origin(cycle), matrix);

                if best.as_ref().is_none_or(|b| tour.length < b.length) {
                    best = Some(tour.clone());
                    best_iteration = iteration;
                }
                tours.push(tour);
            }

            // all tours of this iteration are complete before trails change
            pheromone.update(&tours, config.evaporation_rate);

            let best_length = best.as_ref().map_or(f64::INFINITY, |b| b.length);
            best_history.push(best_length);
            trace!("aco iteration {iteration}: best length {best_length}");
        }

        let best = best.ok_or_else(|| TspError::InvalidConfig("no tours were built".into()))?;
        debug!(
            "aco: n={n}, ants={}, iterations={}, length={}, found at iteration {best_iteration}",
            config.num_ants, config.num_iterations, best.length
        );

        Ok(AcoResult {
            best,
            iterations: config.num_iterations,
            best_iteration,
            tours_built: config.num_ants * config.num_iterations,
            best_history,
        })
    }
}

/// Per-ant scratch buffers, reused across ants.
struct Colony {
    visited: Vec<bool>,
    cycle: Vec<usize>,
    candidates: Vec<usize>,
    weights: Vec<f64>,
}

impl Colony {
    fn new(n: usize) -> Self {
        Self {
            visited: vec![false; n],
            cycle: Vec::with_capacity(n),
            candidates: Vec::with_capacity(n),
            weights: Vec::with_capacity(n),
        }
    }

    /// Builds one ant's open cycle (each node once, no closing repeat).
    fn construct<R: Rng>(
        &mut self,
        matrix: &DistanceMatrix,
        pheromone: &PheromoneTable,
        config: &AcoConfig,
        rng: &mut R,
    ) -> &[usize] {
        let n = matrix.size();
        self.visited.fill(false);
        self.cycle.clear();

        let mut current = rng.random_range(0..n);
        self.visited[current] = true;
        self.cycle.push(current);

        for _ in 1..n {
            self.candidates.clear();
            self.weights.clear();
            for next in 0..n {
                if !self.visited[next] {
                    self.candidates.push(next);
                    self.weights.push(attractiveness(
                        pheromone.get(current, next),
                        matrix.get(current, next),
                        config.alpha,
                        config.beta,
                    ));
                }
            }

            current = self.candidates[select_weighted(&self.weights, rng)];
            self.visited[current] = true;
            self.cycle.push(current);
        }

        &self.cycle
    }
}

/// Unnormalized transition weight `τ^α · (1/d)^β`.
///
/// A zero cost yields `+∞`; NaN (e.g. `0 · ∞`) is mapped to 0.
fn attractiveness(tau: f64, cost: f64, alpha: f64, beta: f64) -> f64 {
    let weight = tau.powf(alpha) * (1.0 / cost).powf(beta);
    if weight.is_nan() {
        0.0
    } else {
        weight
    }
}

/// Roulette-wheel choice over `weights`, returning an index.
///
/// - Infinite weights dominate: pick uniformly among them.
/// - If the weights sum to zero (or overflow), pick uniformly among all.
fn select_weighted<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let infinite = weights.iter().filter(|w| w.is_infinite()).count();
    if infinite > 0 {
        let k = rng.random_range(0..infinite);
        return weights
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_infinite())
            .nth(k)
            .map_or(0, |(i, _)| i);
    }

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..weights.len());
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    // floating-point fallback: last candidate that can be drawn
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1)
}
