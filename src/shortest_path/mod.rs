//! Single-source shortest paths (Dijkstra).
//!
//! Computes shortest distances from one source node over an undirected
//! graph with non-negative integer weights. Nodes are finalized in order
//! of increasing distance; once finalized, a node's distance never changes.
//!
//! Two frontier strategies are provided and always agree:
//!
//! - **Lazy heap** (default): a binary heap that tolerates stale entries
//!   and discards them at pop time using a finalized-flag table.
//! - **Ordered set**: a balanced ordered set keyed by `(distance, node)`,
//!   repositioned by remove-then-reinsert on every relaxation.
//!
//! # Examples
//!
//! ```
//! use u_algos::shortest_path::{shortest_distances, UNREACHABLE};
//!
//! let edges = [(0, 1), (0, 2), (1, 2), (2, 3), (1, 3), (1, 4), (3, 4)];
//! let weights = [3, 1, 7, 2, 5, 1, 7];
//! let dist = shortest_distances(5, &edges, &weights, 2).unwrap();
//! assert_eq!(dist, vec![1, 4, 0, 2, 5]);
//!
//! let dist = shortest_distances(3, &[(0, 1)], &[4], 0).unwrap();
//! assert_eq!(dist[2], UNREACHABLE);
//! ```
//!
//! # References
//!
//! - Dijkstra, E. W. (1959). "A note on two problems in connexion with graphs",
//!   *Numerische Mathematik* 1, 269-271.

mod config;
mod runner;
mod types;

pub use config::{DijkstraConfig, DuplicateEdgePolicy, FrontierStrategy};
pub use runner::{shortest_distances, shortest_distances_with, DijkstraRunner};
pub use types::{Graph, ShortestPaths, UNREACHABLE};
