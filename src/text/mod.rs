//! Substring search with a Rabin–Karp rolling hash.
//!
//! A rolling hash is a polynomial hash over a fixed-size window that can be
//! updated in O(1) as the window slides one byte to the right. Rabin–Karp
//! compares window hashes against the needle's hash and confirms each hash
//! hit byte by byte, so collisions never produce false matches.
//!
//! # References
//!
//! - Karp, R. M. & Rabin, M. O. (1987). "Efficient randomized
//!   pattern-matching algorithms", *IBM J. Res. Dev.* 31(2), 249-260.

mod rolling_hash;

pub use rolling_hash::{find, find_all, RollingHash};
