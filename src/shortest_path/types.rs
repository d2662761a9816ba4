//! Graph representation and shortest-path results.

use std::collections::BTreeMap;

use super::config::DuplicateEdgePolicy;
use crate::error::{Error, Result};

/// Distance reported for nodes with no path from the source.
///
/// Larger than any achievable path sum: [`Graph`] construction rejects
/// edge lists whose total weight could reach it.
pub const UNREACHABLE: u64 = u64::MAX;

/// An undirected graph with non-negative integer edge weights.
///
/// Nodes are `0..node_count`. Each node maps neighbor ids to edge weights,
/// and every edge is stored in both directions with the same weight.
/// A `Graph` is immutable once built and can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<BTreeMap<usize, u64>>,
    edge_count: usize,
}

impl Graph {
    /// Builds a graph from parallel edge and weight slices.
    ///
    /// The whole input is validated before a graph is returned:
    ///
    /// - `edges` and `weights` must have equal length
    /// - every endpoint must be in `[0, node_count)`
    /// - every weight must be non-negative
    /// - after duplicates are merged by `policy`, the summed weight of the
    ///   distinct edges must stay below [`UNREACHABLE`]
    ///
    /// # Examples
    ///
    /// ```
    /// use u_algos::shortest_path::{DuplicateEdgePolicy, Graph};
    ///
    /// let g = Graph::from_edges(3, &[(0, 1), (1, 2)], &[4, 2], DuplicateEdgePolicy::default())
    ///     .unwrap();
    /// assert_eq!(g.weight(1, 0), Some(4));
    /// assert_eq!(g.edge_count(), 2);
    /// ```
    pub fn from_edges(
        node_count: usize,
        edges: &[(usize, usize)],
        weights: &[i64],
        policy: DuplicateEdgePolicy,
    ) -> Result<Self> {
        validate_edges(node_count, edges, weights)?;

        let mut adjacency: Vec<BTreeMap<usize, u64>> = vec![BTreeMap::new(); node_count];
        let mut edge_count = 0;
        let mut duplicates = 0usize;

        for (&(a, b), &w) in edges.iter().zip(weights) {
            let w = w as u64;
            let merged = match adjacency[a].get(&b) {
                Some(&existing) => {
                    duplicates += 1;
                    match policy {
                        DuplicateEdgePolicy::KeepMinimum => existing.min(w),
                        DuplicateEdgePolicy::LastWins => w,
                    }
                }
                None => {
                    edge_count += 1;
                    w
                }
            };
            adjacency[a].insert(b, merged);
            adjacency[b].insert(a, merged);
        }

        if duplicates > 0 {
            tracing::debug!(duplicates, policy = ?policy, "merged duplicate edges");
        }

        // Any shortest path uses each distinct edge at most once.
        let mut total: u64 = 0;
        for (a, neighbors) in adjacency.iter().enumerate() {
            for (_, &w) in neighbors.range(a..) {
                total = total
                    .checked_add(w)
                    .filter(|&t| t < UNREACHABLE)
                    .ok_or(Error::WeightOverflow)?;
            }
        }

        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Builds a graph from `(a, b, weight)` triples.
    pub fn from_weighted_edges(
        node_count: usize,
        edges: &[(usize, usize, i64)],
        policy: DuplicateEdgePolicy,
    ) -> Result<Self> {
        let (pairs, weights): (Vec<_>, Vec<_>) =
            edges.iter().map(|&(a, b, w)| ((a, b), w)).unzip();
        Self::from_edges(node_count, &pairs, &weights, policy)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges (self-loops count once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbors of `node` with their edge weights, in ascending id order.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.node_count()`.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.adjacency[node].iter().map(|(&v, &w)| (v, w))
    }

    /// Weight of the edge between `a` and `b`, if any.
    pub fn weight(&self, a: usize, b: usize) -> Option<u64> {
        self.adjacency.get(a)?.get(&b).copied()
    }
}

fn validate_edges(node_count: usize, edges: &[(usize, usize)], weights: &[i64]) -> Result<()> {
    if edges.len() != weights.len() {
        return Err(Error::LengthMismatch {
            left_name: "edges",
            left: edges.len(),
            right_name: "weights",
            right: weights.len(),
        });
    }

    for (index, (&(a, b), &w)) in edges.iter().zip(weights).enumerate() {
        for node in [a, b] {
            if node >= node_count {
                return Err(Error::NodeOutOfRange { node, node_count });
            }
        }
        if w < 0 {
            return Err(Error::NegativeWeight { index, weight: w });
        }
    }
    Ok(())
}

/// Result of a single-source shortest-path computation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPaths {
    /// Source node.
    pub source: usize,
    /// Shortest distance per node, [`UNREACHABLE`] when no path exists.
    pub distances: Vec<u64>,
    /// Nodes in finalization order, each with its distance when finalized.
    pub settled: Vec<(usize, u64)>,
    /// Number of successful relaxations.
    pub relaxations: usize,
    /// Number of stale frontier entries discarded (lazy heap only).
    pub stale_discarded: usize,
}

impl ShortestPaths {
    /// Shortest distance to `node`, or `None` if unreachable or out of range.
    pub fn distance(&self, node: usize) -> Option<u64> {
        self.distances
            .get(node)
            .copied()
            .filter(|&d| d != UNREACHABLE)
    }

    /// Whether `node` is reachable from the source.
    pub fn is_reachable(&self, node: usize) -> bool {
        self.distance(node).is_some()
    }

    /// Number of nodes reachable from the source, including the source.
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != UNREACHABLE).count()
    }

    /// Consumes the result, returning the distance table.
    pub fn into_distances(self) -> Vec<u64> {
        self.distances
    }
}
