//! TSP configuration.

use crate::error::{Error, Result};

/// Hard upper bound on `max_cities`.
///
/// Held–Karp keeps `2^(n-1) · (n-1)` cost and parent entries.
pub const MAX_CITIES: usize = 20;

/// Exact search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TspStrategy {
    /// Subset dynamic program with parent pointers.
    #[default]
    HeldKarp,

    /// Depth-first search with lower-bound pruning.
    BranchAndBound,
}

/// Configuration for [`TspRunner`](super::TspRunner).
///
/// # Examples
///
/// ```
/// use u_algos::tsp::{TspConfig, TspStrategy};
///
/// let config = TspConfig::default()
///     .with_strategy(TspStrategy::BranchAndBound)
///     .with_start_city(2)
///     .with_max_cities(12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspConfig {
    /// Search strategy.
    pub strategy: TspStrategy,

    /// City the tour starts and ends at.
    pub start_city: usize,

    /// Largest instance accepted. Must be in `1..=MAX_CITIES`.
    pub max_cities: usize,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            strategy: TspStrategy::default(),
            start_city: 0,
            max_cities: 16,
        }
    }
}

impl TspConfig {
    pub fn with_strategy(mut self, strategy: TspStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_start_city(mut self, city: usize) -> Self {
        self.start_city = city;
        self
    }

    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_cities == 0 {
            return Err(Error::InvalidConfig("max_cities must be positive".into()));
        }
        if self.max_cities > MAX_CITIES {
            return Err(Error::InvalidConfig(format!(
                "max_cities must be at most {MAX_CITIES}, got {}",
                self.max_cities
            )));
        }
        Ok(())
    }
}
