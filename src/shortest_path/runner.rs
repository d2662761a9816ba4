//! Dijkstra execution engine.
//!
//! # Algorithm
//!
//! 1. Set `dist[source] = 0`, every other node to [`UNREACHABLE`]
//! 2. Place every node in the frontier
//! 3. Repeatedly take the unfinalized node with the smallest
//!    `(distance, id)` key and finalize it
//! 4. Relax each unfinalized neighbor `v` of the finalized node `u`:
//!    if `dist[u] + w(u, v) < dist[v]`, lower `dist[v]` and expose the new
//!    key to the frontier
//! 5. Stop when every node is finalized
//!
//! Nodes finalized at [`UNREACHABLE`] lie in another component and are
//! not relaxed from.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use super::config::{DijkstraConfig, FrontierStrategy};
use super::types::{Graph, ShortestPaths, UNREACHABLE};
use crate::error::{Error, Result};

/// Dijkstra runner.
pub struct DijkstraRunner;

impl DijkstraRunner {
    /// Computes shortest distances from `source` over `graph`.
    ///
    /// An empty graph yields an empty result for any `source`.
    ///
    /// # Errors
    ///
    /// [`Error::SourceOutOfRange`] if the graph is non-empty and `source`
    /// is not one of its nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_algos::shortest_path::{DijkstraConfig, DijkstraRunner, Graph};
    ///
    /// let config = DijkstraConfig::default();
    /// let graph = Graph::from_weighted_edges(3, &[(0, 1, 2), (1, 2, 3)], config.duplicate_edges)
    ///     .unwrap();
    /// let result = DijkstraRunner::run(&graph, 0, &config).unwrap();
    /// assert_eq!(result.distances, vec![0, 2, 5]);
    /// ```
    pub fn run(graph: &Graph, source: usize, config: &DijkstraConfig) -> Result<ShortestPaths> {
        let n = graph.node_count();
        if n == 0 {
            return Ok(ShortestPaths {
                source,
                distances: Vec::new(),
                settled: Vec::new(),
                relaxations: 0,
                stale_discarded: 0,
            });
        }
        if source >= n {
            return Err(Error::SourceOutOfRange {
                node: source,
                node_count: n,
            });
        }

        tracing::debug!(
            nodes = n,
            edges = graph.edge_count(),
            source,
            strategy = ?config.strategy,
            "dijkstra started"
        );

        let result = match config.strategy {
            FrontierStrategy::LazyHeap => run_lazy_heap(graph, source),
            FrontierStrategy::OrderedSet => run_ordered_set(graph, source),
        };

        tracing::debug!(
            reachable = result.reachable_count(),
            relaxations = result.relaxations,
            stale_discarded = result.stale_discarded,
            "dijkstra finished"
        );

        Ok(result)
    }
}

/// Computes shortest distances with the default configuration.
///
/// Builds a call-local [`Graph`] from the edge list, then runs the lazy
/// heap strategy. Returns one entry per node; unreachable nodes hold
/// [`UNREACHABLE`].
///
/// # Errors
///
/// Rejects mismatched slice lengths, out-of-range node ids, negative
/// weights, weight sums that overflow, and an out-of-range `source`.
pub fn shortest_distances(
    node_count: usize,
    edges: &[(usize, usize)],
    weights: &[i64],
    source: usize,
) -> Result<Vec<u64>> {
    shortest_distances_with(
        node_count,
        edges,
        weights,
        source,
        &DijkstraConfig::default(),
    )
}

/// Computes shortest distances with an explicit configuration.
pub fn shortest_distances_with(
    node_count: usize,
    edges: &[(usize, usize)],
    weights: &[i64],
    source: usize,
    config: &DijkstraConfig,
) -> Result<Vec<u64>> {
    let graph = Graph::from_edges(node_count, edges, weights, config.duplicate_edges)?;
    DijkstraRunner::run(&graph, source, config).map(ShortestPaths::into_distances)
}

fn run_lazy_heap(graph: &Graph, source: usize) -> ShortestPaths {
    let n = graph.node_count();
    let mut dist = vec![UNREACHABLE; n];
    let mut finalized = vec![false; n];
    dist[source] = 0;

    let mut heap: BinaryHeap<Reverse<(u64, usize)>> = (0..n)
        .map(|node| Reverse((dist[node], node)))
        .collect();

    let mut settled = Vec::with_capacity(n);
    let mut relaxations = 0;
    let mut stale_discarded = 0;

    while let Some(Reverse((d, u))) = heap.pop() {
        if finalized[u] {
            stale_discarded += 1;
            continue;
        }
        finalized[u] = true;
        settled.push((u, d));

        if d == UNREACHABLE {
            continue;
        }

        for (v, w) in graph.neighbors(u) {
            if finalized[v] {
                continue;
            }
            let candidate = d + w;
            if candidate < dist[v] {
                dist[v] = candidate;
                heap.push(Reverse((candidate, v)));
                relaxations += 1;
            }
        }
    }

    ShortestPaths {
        source,
        distances: dist,
        settled,
        relaxations,
        stale_discarded,
    }
}

fn run_ordered_set(graph: &Graph, source: usize) -> ShortestPaths {
    let n = graph.node_count();
    let mut dist = vec![UNREACHABLE; n];
    dist[source] = 0;

    let mut unvisited: BTreeSet<(u64, usize)> = (0..n).map(|node| (dist[node], node)).collect();

    let mut settled = Vec::with_capacity(n);
    let mut relaxations = 0;

    while let Some((d, u)) = unvisited.pop_first() {
        settled.push((u, d));

        if d == UNREACHABLE {
            continue;
        }

        for (v, w) in graph.neighbors(u) {
            // `v` may already be finalized through this very edge.
            let candidate = d.saturating_add(w);
            // Membership in `unvisited` under its current key means "not finalized".
            if candidate < dist[v] && unvisited.remove(&(dist[v], v)) {
                dist[v] = candidate;
                unvisited.insert((candidate, v));
                relaxations += 1;
            }
        }
    }

    ShortestPaths {
        source,
        distances: dist,
        settled,
        relaxations,
        stale_discarded: 0,
    }
}
