//! Exact Travelling Salesman Problem (TSP) solvers.
//!
//! Finds a minimum-cost closed tour that visits every city exactly once.
//! Distances may be asymmetric. Two exact strategies are provided:
//!
//! - **Held–Karp**: dynamic program over `(visited subset, last city)`,
//!   O(2^n · n^2) time and O(2^n · n) memory.
//! - **Branch-and-bound**: depth-first search pruned by a lower bound on
//!   the cost still to pay.
//!
//! Both are exponential; instances are capped by [`TspConfig::max_cities`].
//!
//! # References
//!
//! - Held, M. & Karp, R. M. (1962). "A Dynamic Programming Approach to
//!   Sequencing Problems", *J. SIAM* 10(1), 196-210.
//! - Little, J. D. C. et al. (1963). "An Algorithm for the Traveling
//!   Salesman Problem", *Operations Research* 11(6), 972-989.

mod config;
mod runner;
mod types;

pub use config::{TspConfig, TspStrategy, MAX_CITIES};
pub use runner::TspRunner;
pub use types::{DistanceMatrix, TspTour};
