//! Memoized prime sequence grown by trial division.

use tracing::trace;

/// Ascending list of the first primes, grown on demand.
///
/// The sequence is only ever extended and stays strictly increasing, so an
/// index returned by one call remains valid for every later call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimeCache {
    primes: Vec<u64>,
}

impl Default for PrimeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimeCache {
    /// Creates a cache seeded with `[2, 3]`.
    pub fn new() -> Self {
        Self { primes: vec![2, 3] }
    }

    /// Number of primes currently cached.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Always `false`: the cache starts with two primes.
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// The cached primes, ascending.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// Grows the cache until it holds at least `count` primes.
    pub fn ensure_count(&mut self, count: usize) {
        if self.primes.len() >= count {
            return;
        }
        let before = self.primes.len();
        while self.primes.len() < count {
            self.push_next();
        }
        trace!(
            from = before,
            to = self.primes.len(),
            largest = self.largest(),
            "prime cache grown"
        );
    }

    /// The `index`-th prime, 0-based (`nth(0) == 2`).
    ///
    /// Grows the cache to `index + 1` primes, so the index is bounded by
    /// available memory rather than by `usize`.
    pub fn nth(&mut self, index: usize) -> u64 {
        self.ensure_count(index.saturating_add(1));
        self.primes[index]
    }

    /// Trial division by cached primes up to `sqrt(value)`, growing the
    /// cache until its largest prime squared exceeds `value`.
    pub fn is_prime(&mut self, value: u64) -> bool {
        if value < 2 {
            return false;
        }
        let before = self.primes.len();
        while self.largest().saturating_mul(self.largest()) < value {
            self.push_next();
        }
        if self.primes.len() > before {
            trace!(
                from = before,
                to = self.primes.len(),
                value,
                "prime cache grown for primality test"
            );
        }
        self.primes
            .iter()
            .take_while(|&&p| p.saturating_mul(p) <= value)
            .all(|&p| value % p != 0)
    }

    fn largest(&self) -> u64 {
        self.primes.last().copied().unwrap_or(2)
    }

    /// Appends the next prime. Candidates step by two from the largest
    /// cached prime, which is odd once the seed `3` is present.
    fn push_next(&mut self) {
        let mut candidate = self.largest() + 2;
        while !self.coprime_to_cached(candidate) {
            candidate += 2;
        }
        self.primes.push(candidate);
    }

    /// `true` when no cached prime up to `sqrt(candidate)` divides it.
    fn coprime_to_cached(&self, candidate: u64) -> bool {
        self.primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn naive_is_prime(n: u64) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    // ---- growth ----

    #[test]
    fn test_seed() {
        let cache = PrimeCache::new();
        assert_eq!(cache.primes(), &[2, 3]);
        assert_eq!(cache.len(), 2);
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_first_ten() {
        let mut cache = PrimeCache::default();
        cache.ensure_count(10);
        assert_eq!(cache.primes(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_nth_grows_on_demand() {
        let mut cache = PrimeCache::new();
        assert_eq!(cache.nth(0), 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.nth(99), 541);
        assert_eq!(cache.len(), 100);
    }

    #[test]
    fn test_nth_within_cache_does_not_grow() {
        let mut cache = PrimeCache::new();
        cache.ensure_count(25);
        assert_eq!(cache.nth(24), 97);
        assert_eq!(cache.nth(3), 7);
        assert_eq!(cache.len(), 25);
    }

    #[test]
    fn test_never_shrinks() {
        let mut cache = PrimeCache::new();
        cache.ensure_count(50);
        cache.ensure_count(5);
        assert_eq!(cache.len(), 50);
        assert!(cache.primes().windows(2).all(|w| w[0] < w[1]));
    }

    // ---- primality ----

    #[test]
    fn test_is_prime_small() {
        let mut cache = PrimeCache::new();
        assert!(!cache.is_prime(0));
        assert!(!cache.is_prime(1));
        assert!(cache.is_prime(2));
        assert!(cache.is_prime(3));
        assert!(!cache.is_prime(4));
        assert!(!cache.is_prime(25));
        assert!(!cache.is_prime(49));
        assert!(cache.is_prime(7919));
        assert!(!cache.is_prime(7917));
    }

    #[test]
    fn test_is_prime_square_of_prime() {
        let mut cache = PrimeCache::new();
        assert!(!cache.is_prime(104_729 * 104_729));
    }

    proptest! {
        #[test]
        fn prop_is_prime_matches_naive(n in 0u64..20_000) {
            let mut cache = PrimeCache::new();
            prop_assert_eq!(cache.is_prime(n), naive_is_prime(n));
        }

        #[test]
        fn prop_cached_are_prime(count in 1usize..300) {
            let mut cache = PrimeCache::new();
            cache.ensure_count(count);
            prop_assert!(cache.primes().iter().all(|&p| naive_is_prime(p)));
        }
    }
}
