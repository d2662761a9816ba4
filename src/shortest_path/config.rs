//! Dijkstra configuration.

/// Data structure used to select the next node to finalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierStrategy {
    /// Binary heap with lazy deletion.
    ///
    /// Every relaxation pushes a fresh `(distance, node)` entry; entries
    /// whose node is already finalized are discarded on pop.
    #[default]
    LazyHeap,

    /// Ordered set over unvisited nodes keyed by `(distance, node)`.
    ///
    /// Every relaxation removes the node and reinserts it under its new key.
    OrderedSet,
}

/// How repeated edges between the same pair of nodes are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicateEdgePolicy {
    /// Keep the smallest weight among the duplicates.
    #[default]
    KeepMinimum,

    /// The weight listed last overwrites earlier ones.
    LastWins,
}

/// Configuration for [`DijkstraRunner`](super::DijkstraRunner).
///
/// # Examples
///
/// ```
/// use u_algos::shortest_path::{DijkstraConfig, DuplicateEdgePolicy, FrontierStrategy};
///
/// let config = DijkstraConfig::default()
///     .with_strategy(FrontierStrategy::OrderedSet)
///     .with_duplicate_edges(DuplicateEdgePolicy::LastWins);
/// assert_eq!(config.strategy, FrontierStrategy::OrderedSet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DijkstraConfig {
    /// Frontier data structure.
    pub strategy: FrontierStrategy,

    /// Merge rule for duplicate edges when building a graph from edge lists.
    pub duplicate_edges: DuplicateEdgePolicy,
}

impl DijkstraConfig {
    /// Sets the frontier strategy.
    pub fn with_strategy(mut self, strategy: FrontierStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the duplicate-edge merge rule.
    pub fn with_duplicate_edges(mut self, policy: DuplicateEdgePolicy) -> Self {
        self.duplicate_edges = policy;
        self
    }
}
