//! Crate-wide error type.
//!
//! Every fallible entry point validates its whole input before doing any
//! work, so an `Err` never comes with a partially computed result.
//! Outcomes that are valid answers (an unreachable node, an empty input,
//! a needle that does not occur) are not errors.

use thiserror::Error;

/// Errors returned by the algorithm kernels in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two parallel input slices have different lengths.
    #[error("length mismatch: {left} {left_name} vs {right} {right_name}")]
    LengthMismatch {
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },

    /// A node id outside `[0, node_count)` was referenced.
    #[error("node {node} out of range for {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    /// The source node is outside `[0, node_count)`.
    #[error("source node {node} out of range for {node_count} nodes")]
    SourceOutOfRange { node: usize, node_count: usize },

    /// An edge carries a negative weight.
    #[error("edge {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: i64 },

    /// The summed edge weights would reach the unreachable sentinel.
    #[error("total edge weight overflows the distance range")]
    WeightOverflow,

    /// A distance matrix row does not match the matrix dimension.
    #[error("distance matrix row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix { row: usize, len: usize, expected: usize },

    /// The instance exceeds the configured city limit.
    #[error("{cities} cities exceed the limit of {max}")]
    TooManyCities { cities: usize, max: usize },

    /// A configuration value is invalid.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// `RollingHash::push` was called on a full window.
    #[error("rolling hash window of {window} bytes is already full")]
    WindowFull { window: usize },

    /// `RollingHash::roll` was called before the window was filled.
    #[error("rolling hash window holds {len} of {window} bytes")]
    WindowNotFilled { len: usize, window: usize },

    /// A knapsack capacity beyond what the DP table may allocate.
    #[error("knapsack capacity {capacity} exceeds the limit of {max}")]
    CapacityTooLarge { capacity: usize, max: usize },

    /// A value lies outside the domain a conversion accepts.
    #[error("value {value} outside domain 0..{bound}")]
    OutOfDomain { value: u8, bound: u8 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
