//! Growable prime sequence.
//!
//! [`PrimeCache`] memoizes primes in ascending order and extends itself on
//! demand by trial division against the primes it already holds. The cache
//! is an ordinary value: callers own it and pass it where needed.
//!
//! ```
//! use u_algos::primes::PrimeCache;
//!
//! let mut cache = PrimeCache::new();
//! assert_eq!(cache.nth(9), 29);
//! assert!(cache.is_prime(97));
//! assert!(!cache.is_prime(91));
//! ```

mod cache;

pub use cache::PrimeCache;
