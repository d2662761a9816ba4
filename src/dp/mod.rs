//! Dynamic-programming kernels.
//!
//! - **0/1 knapsack**: maximize total value under a weight capacity, each
//!   item used at most once. Single capacity row swept from high to low.
//! - **Point redemption**: purchases redeemed in order, each consuming a
//!   multiplier from either end of a multiplier deque. Interval DP.

mod knapsack;
mod redeem;

pub use knapsack::{knapsack, Knapsack, MAX_CAPACITY};
pub use redeem::max_redeem_points;
