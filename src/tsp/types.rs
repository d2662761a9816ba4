//! TSP input and result types.

use crate::error::{Error, Result};

/// A square matrix of travel costs; `get(i, j)` is the cost from `i` to `j`.
///
/// Asymmetric costs are allowed. Diagonal entries are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceMatrix {
    rows: Vec<Vec<u64>>,
}

impl DistanceMatrix {
    /// Wraps `rows`, rejecting any row whose length differs from the row count.
    pub fn new(rows: Vec<Vec<u64>>) -> Result<Self> {
        let expected = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(Error::NonSquareMatrix {
                row,
                len: r.len(),
                expected,
            });
        }
        Ok(Self { rows })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cost of travelling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.rows[from][to]
    }

    /// Cost of the closed tour visiting `tour` in order and returning to its
    /// first city. Saturates instead of overflowing.
    pub fn tour_cost(&self, tour: &[usize]) -> u64 {
        if tour.len() < 2 {
            return 0;
        }
        tour.iter()
            .zip(tour.iter().cycle().skip(1))
            .fold(0u64, |acc, (&a, &b)| acc.saturating_add(self.get(a, b)))
    }
}

/// An optimal tour.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspTour {
    /// Total cost including the return leg to the start.
    pub cost: u64,
    /// Cities in visiting order, starting at the start city. The return to
    /// the start is implied, not repeated.
    pub tour: Vec<usize>,
}
