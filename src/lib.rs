//! Classic algorithm implementations with validated inputs.
//!
//! The centerpiece is single-source shortest paths on undirected graphs
//! with non-negative integer weights:
//!
//! - **Shortest paths**: Dijkstra's algorithm with two interchangeable
//!   frontier strategies (lazy-deletion binary heap, ordered set), both
//!   producing identical distances.
//!
//! Alongside it sit smaller solvers that share the same error type and
//! configuration conventions:
//!
//! - **TSP**: exact round-trip tours by Held–Karp subset DP or
//!   branch-and-bound.
//! - **Search**: binary search variants over sorted slices.
//! - **Text**: Rabin–Karp rolling hash substring search.
//! - **DP**: 0/1 knapsack and interval DP for deque redemption.
//! - **Collections**: two-stack queue and shared-tail linked lists.
//! - **Primes**: a growable prime cache.
//! - **Random**: uniform conversion of a 4-way choice into a 6-way choice.
//!
//! Solvers emit `tracing` events at `debug` level and never install a
//! subscriber. With the `serde` feature, configs and results derive
//! `Serialize`/`Deserialize`.

pub mod collections;
pub mod dp;
pub mod error;
pub mod primes;
pub mod random;
pub mod search;
pub mod shortest_path;
pub mod text;
pub mod tsp;

pub use error::{Error, Result};
