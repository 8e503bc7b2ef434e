//! Algorithm selection and per-run reports.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::TspError;

/// The available solving strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Greedy nearest-neighbor construction.
    #[cfg_attr(feature = "serde", serde(rename = "Nearest Neighbor"))]
    NearestNeighbor,

    /// Exhaustive enumeration (exact).
    #[cfg_attr(feature = "serde", serde(rename = "Brute Force"))]
    BruteForce,

    /// Ant Colony Optimization (approximate, stochastic).
    #[cfg_attr(feature = "serde", serde(rename = "Ant Colony Optimization"))]
    AntColony,

    /// Held-Karp dynamic programming (exact).
    #[cfg_attr(feature = "serde", serde(rename = "Held-Karp"))]
    HeldKarp,
}

impl Algorithm {
    /// Every algorithm, in the conventional report order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::NearestNeighbor,
        Algorithm::BruteForce,
        Algorithm::AntColony,
        Algorithm::HeldKarp,
    ];

    /// Human-readable name, also used as the report key.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "Nearest Neighbor",
            Algorithm::BruteForce => "Brute Force",
            Algorithm::AntColony => "Ant Colony Optimization",
            Algorithm::HeldKarp => "Held-Karp",
        }
    }

    /// Whether the algorithm always returns an optimal tour.
    pub fn is_exact(&self) -> bool {
        matches!(self, Algorithm::BruteForce | Algorithm::HeldKarp)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = TspError;

    /// Accepts the display name or a short alias, case-insensitively:
    /// `nn`, `bf`, `aco`, `hk`, or the hyphenated long form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match key.as_str() {
            "nn" | "nearest-neighbor" | "nearest-neighbour" => Ok(Algorithm::NearestNeighbor),
            "bf" | "brute-force" => Ok(Algorithm::BruteForce),
            "aco" | "ant-colony" | "ant-colony-optimization" => Ok(Algorithm::AntColony),
            "hk" | "held-karp" => Ok(Algorithm::HeldKarp),
            _ => Err(TspError::Parse(format!("unknown algorithm '{s}'"))),
        }
    }
}

/// Outcome of one algorithm on one matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveReport {
    /// Which algorithm produced the tour.
    pub algorithm: Algorithm,

    /// Closed route starting and ending at the origin.
    pub route: Vec<usize>,

    /// Total tour length.
    #[cfg_attr(feature = "serde", serde(rename = "duration"))]
    pub length: f64,

    /// Wall-clock time spent in the solver.
    #[cfg_attr(feature = "serde", serde(rename = "elapsed_secs", with = "secs"))]
    pub elapsed: Duration,

    /// Problem size.
    pub nodes: usize,
}

#[cfg(feature = "serde")]
mod secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
