//! Pheromone trail table.

use crate::tour::Tour;

/// Dense n×n table of directed trail strengths.
///
/// Created fresh for each run and dropped when the run ends.
#[derive(Debug, Clone)]
pub struct PheromoneTable {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneTable {
    /// Creates a table with every entry set to `initial`.
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            data: vec![initial; size * size],
            size,
        }
    }

    /// Trail strength on the edge `from → to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for value in &mut self.data {
            *value *= keep;
        }
    }

    /// Adds `amount` to every directed edge along `route`.
    ///
    /// Self-loops (only present in the single-node tour) are skipped.
    pub fn deposit(&mut self, route: &[usize], amount: f64) {
        for w in route.windows(2) {
            if w[0] != w[1] {
                self.data[w[0] * self.size + w[1]] += amount;
            }
        }
    }

    /// End-of-iteration update: evaporate once, then let every tour
    /// deposit `1 / length` on its edges. Deposits from different tours
    /// add up, so their order is irrelevant.
    pub fn update(&mut self, tours: &[Tour], rho: f64) {
        self.evaporate(rho);
        for tour in tours {
            self.deposit(&tour.route, 1.0 / tour.length);
        }
    }
}
