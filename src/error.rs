//! Crate error type.

use thiserror::Error;

/// Errors reported by matrix construction, configuration validation and
/// the exact solvers' resource guards.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The problem is too large for the solver's memory bound.
    #[error("problem with {nodes} nodes exceeds the limit of {max} nodes")]
    ProblemTooLarge { nodes: usize, max: usize },

    /// A row of the matrix has the wrong number of columns.
    #[error("matrix is not square: row {row} has {len} entries, expected {rows}")]
    NotSquare { rows: usize, row: usize, len: usize },

    /// Flat matrix data does not hold `n * n` entries.
    #[error("matrix data has {actual} entries, expected {expected}")]
    DataLength { expected: usize, actual: usize },

    /// The matrix has no nodes.
    #[error("matrix must contain at least one node")]
    EmptyMatrix,

    /// The matrix text could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}
