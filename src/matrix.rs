//! Dense distance matrix.
//!
//! Costs are directed: `get(i, j)` is the cost of travelling from `i` to
//! `j` and need not equal `get(j, i)`. The diagonal is stored but never
//! read by the solvers.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::TspError;

/// An n×n cost matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_tsp::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![1.0, 0.0, 6.0],
///     vec![15.0, 7.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(2, 1), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix from explicit rows.
    ///
    /// Every row must have as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TspError> {
        let size = rows.len();
        if size == 0 {
            return Err(TspError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(TspError::NotSquare {
                    rows: size,
                    row,
                    len: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { data, size })
    }

    /// Creates a matrix from flat row-major data.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, TspError> {
        if size == 0 {
            return Err(TspError::EmptyMatrix);
        }
        let expected = size.checked_mul(size).ok_or(TspError::DataLength {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        if data.len() != expected {
            return Err(TspError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Builds a symmetric matrix from an upper-triangle edge function.
    ///
    /// `cost(i, j)` is called once for every `i < j`; the diagonal is zero.
    pub fn symmetric<F>(size: usize, mut cost: F) -> Result<Self, TspError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        if size == 0 {
            return Err(TspError::EmptyMatrix);
        }
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = cost(i, j);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Ok(Self { data, size })
    }

    /// Generates a random instance with costs drawn uniformly from
    /// `[1, max_value)` and a zero diagonal.
    ///
    /// Costs are independent per direction, so the result is asymmetric.
    pub fn random<R: Rng>(
        size: usize,
        max_value: f64,
        rng: &mut R,
    ) -> Result<Self, TspError> {
        if size == 0 {
            return Err(TspError::EmptyMatrix);
        }
        if !max_value.is_finite() || max_value <= 1.0 {
            return Err(TspError::InvalidConfig(format!(
                "max_value must be finite and greater than 1, got {max_value}"
            )));
        }
        let mut data = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                data.push(if i == j {
                    0.0
                } else {
                    rng.random_range(1.0..max_value)
                });
            }
        }
        Ok(Self { data, size })
    }

    /// Returns the cost of the edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost of the edge `from → to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row `from` as a slice of outgoing costs.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if the off-diagonal costs are symmetric within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

/// Parses the plain-text matrix format: the node count `n` followed by
/// `n * n` whitespace-separated costs in row-major order.
///
/// ```
/// use u_tsp::DistanceMatrix;
///
/// let dm: DistanceMatrix = "2\n0.0 3.5\n4.0 0.0\n".parse().unwrap();
/// assert_eq!(dm.get(0, 1), 3.5);
/// ```
impl FromStr for DistanceMatrix {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let header = tokens
            .next()
            .ok_or_else(|| TspError::Parse("missing node count".into()))?;
        let size: usize = header
            .parse()
            .map_err(|_| TspError::Parse(format!("invalid node count '{header}'")))?;

        let data = tokens
            .enumerate()
            .map(|(idx, tok)| {
                tok.parse::<f64>()
                    .map_err(|_| TspError::Parse(format!("invalid cost '{tok}' at entry {idx}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_data(size, data)
    }
}

impl fmt::Display for DistanceMatrix {
    /// Writes the matrix in the format accepted by [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for i in 0..self.size {
            let row: Vec<String> = self.row(i).iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
