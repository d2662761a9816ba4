//! TSP execution engine.

use super::config::{TspConfig, TspStrategy};
use super::types::{DistanceMatrix, TspTour};
use crate::error::{Error, Result};

const NO_PARENT: usize = usize::MAX;

/// TSP runner.
pub struct TspRunner;

impl TspRunner {
    /// Finds an optimal closed tour through every city of `matrix`.
    ///
    /// Path sums saturate at `u64::MAX` rather than overflow.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] if `config` fails validation
    /// - [`Error::TooManyCities`] if the matrix exceeds `config.max_cities`
    /// - [`Error::NodeOutOfRange`] if `config.start_city` is not a city
    ///
    /// # Examples
    ///
    /// ```
    /// use u_algos::tsp::{DistanceMatrix, TspConfig, TspRunner};
    ///
    /// let matrix = DistanceMatrix::new(vec![
    ///     vec![0, 20, 42, 35],
    ///     vec![20, 0, 30, 34],
    ///     vec![42, 30, 0, 12],
    ///     vec![35, 34, 12, 0],
    /// ])
    /// .unwrap();
    /// let result = TspRunner::run(&matrix, &TspConfig::default()).unwrap();
    /// assert_eq!(result.cost, 97);
    /// ```
    pub fn run(matrix: &DistanceMatrix, config: &TspConfig) -> Result<TspTour> {
        config.validate()?;

        let n = matrix.len();
        if n > config.max_cities {
            return Err(Error::TooManyCities {
                cities: n,
                max: config.max_cities,
            });
        }
        if n == 0 {
            return Ok(TspTour {
                cost: 0,
                tour: Vec::new(),
            });
        }
        let start = config.start_city;
        if start >= n {
            return Err(Error::NodeOutOfRange {
                node: start,
                node_count: n,
            });
        }
        if n == 1 {
            return Ok(TspTour {
                cost: 0,
                tour: vec![start],
            });
        }

        tracing::debug!(cities = n, start, strategy = ?config.strategy, "tsp started");

        let result = match config.strategy {
            TspStrategy::HeldKarp => held_karp(matrix, start),
            TspStrategy::BranchAndBound => BranchAndBound::new(matrix, start).solve(),
        };

        tracing::debug!(cost = result.cost, "tsp finished");
        Ok(result)
    }
}

/// Subset DP. State `(mask, k)`: the cheapest path from `start` through the
/// non-start cities in `mask`, ending at `others[k]`.
fn held_karp(matrix: &DistanceMatrix, start: usize) -> TspTour {
    let others: Vec<usize> = (0..matrix.len()).filter(|&c| c != start).collect();
    let m = others.len();
    let full = (1usize << m) - 1;
    let idx = |mask: usize, k: usize| mask * m + k;

    let mut cost = vec![u64::MAX; (full + 1) * m];
    let mut parent = vec![NO_PARENT; (full + 1) * m];

    for (k, &city) in others.iter().enumerate() {
        cost[idx(1 << k, k)] = matrix.get(start, city);
    }

    for mask in 1..=full {
        for k in (0..m).filter(|&k| mask & (1 << k) != 0) {
            let here = cost[idx(mask, k)];
            for j in (0..m).filter(|&j| mask & (1 << j) == 0) {
                let next = idx(mask | (1 << j), j);
                let candidate = here.saturating_add(matrix.get(others[k], others[j]));
                // Multi-city states always take their first parent, even if saturated.
                if parent[next] == NO_PARENT || candidate < cost[next] {
                    cost[next] = candidate;
                    parent[next] = k;
                }
            }
        }
    }

    let (best_cost, mut k) = (0..m)
        .map(|k| (cost[idx(full, k)].saturating_add(matrix.get(others[k], start)), k))
        .min()
        .unwrap_or((0, 0));

    let mut path = Vec::with_capacity(m + 1);
    let mut mask = full;
    loop {
        path.push(others[k]);
        let prev = parent[idx(mask, k)];
        mask &= !(1 << k);
        if mask == 0 {
            break;
        }
        k = prev;
    }
    path.push(start);
    path.reverse();

    TspTour {
        cost: best_cost,
        tour: path,
    }
}

/// Depth-first search visiting cities in index order.
///
/// Lower bound for a partial tour: its cost plus the cheapest outgoing
/// edge of every city that still has to depart (the current city and all
/// unvisited ones).
struct BranchAndBound<'a> {
    matrix: &'a DistanceMatrix,
    start: usize,
    min_out: Vec<u64>,
    path: Vec<usize>,
    visited: Vec<bool>,
    best: Option<TspTour>,
    pruned: usize,
}

impl<'a> BranchAndBound<'a> {
    fn new(matrix: &'a DistanceMatrix, start: usize) -> Self {
        let n = matrix.len();
        let min_out = (0..n)
            .map(|c| {
                (0..n)
                    .filter(|&d| d != c)
                    .map(|d| matrix.get(c, d))
                    .min()
                    .unwrap_or(0)
            })
            .collect();
        let mut visited = vec![false; n];
        visited[start] = true;
        Self {
            matrix,
            start,
            min_out,
            path: vec![start],
            visited,
            best: None,
            pruned: 0,
        }
    }

    fn solve(mut self) -> TspTour {
        let remaining_bound = self
            .min_out
            .iter()
            .fold(0u64, |acc, &w| acc.saturating_add(w));
        self.search(self.start, 0, remaining_bound);
        tracing::debug!(pruned = self.pruned, "branch-and-bound search finished");
        self.best.unwrap_or(TspTour {
            cost: 0,
            tour: vec![self.start],
        })
    }

    /// `remaining_bound` sums `min_out` over the current city and every
    /// unvisited city.
    fn search(&mut self, current: usize, cost: u64, remaining_bound: u64) {
        let n = self.matrix.len();

        if self.path.len() == n {
            let total = cost.saturating_add(self.matrix.get(current, self.start));
            if self.best.as_ref().map_or(true, |b| total < b.cost) {
                self.best = Some(TspTour {
                    cost: total,
                    tour: self.path.clone(),
                });
            }
            return;
        }

        if let Some(best) = &self.best {
            if cost.saturating_add(remaining_bound) >= best.cost {
                self.pruned += 1;
                return;
            }
        }

        let bound_after_departure = remaining_bound.saturating_sub(self.min_out[current]);
        for next in 0..n {
            if self.visited[next] {
                continue;
            }
            self.visited[next] = true;
            self.path.push(next);
            self.search(
                next,
                cost.saturating_add(self.matrix.get(current, next)),
                bound_after_departure,
            );
            self.path.pop();
            self.visited[next] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STRATEGIES: [TspStrategy; 2] = [TspStrategy::HeldKarp, TspStrategy::BranchAndBound];

    fn square_four() -> DistanceMatrix {
        DistanceMatrix::new(vec![
            vec![0, 25, 30, 30],
            vec![25, 0, 20, 25],
            vec![30, 20, 0, 25],
            vec![30, 25, 25, 0],
        ])
        .unwrap()
    }

    fn kite_four() -> DistanceMatrix {
        DistanceMatrix::new(vec![
            vec![0, 20, 42, 35],
            vec![20, 0, 30, 34],
            vec![42, 30, 0, 12],
            vec![35, 34, 12, 0],
        ])
        .unwrap()
    }

    fn assert_valid_tour(matrix: &DistanceMatrix, result: &TspTour, start: usize) {
        let mut sorted = result.tour.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..matrix.len()).collect::<Vec<_>>());
        assert_eq!(result.tour[0], start);
        assert_eq!(matrix.tour_cost(&result.tour), result.cost);
    }

    fn brute_force(matrix: &DistanceMatrix) -> u64 {
        fn permute(matrix: &DistanceMatrix, path: &mut Vec<usize>, used: &mut [bool], best: &mut u64) {
            if path.len() == matrix.len() {
                *best = (*best).min(matrix.tour_cost(path));
                return;
            }
            for c in 0..matrix.len() {
                if !used[c] {
                    used[c] = true;
                    path.push(c);
                    permute(matrix, path, used, best);
                    path.pop();
                    used[c] = false;
                }
            }
        }

        let mut used = vec![false; matrix.len()];
        used[0] = true;
        let mut best = u64::MAX;
        permute(matrix, &mut vec![0], &mut used, &mut best);
        best
    }

    // ---- Reference instances ----

    #[test]
    fn test_square_four() {
        let matrix = square_four();
        for strategy in STRATEGIES {
            let config = TspConfig::default().with_strategy(strategy);
            let result = TspRunner::run(&matrix, &config).unwrap();
            assert_eq!(result.cost, 100, "{strategy:?}");
            assert_valid_tour(&matrix, &result, 0);
        }
    }

    #[test]
    fn test_kite_four() {
        let matrix = kite_four();
        for strategy in STRATEGIES {
            let config = TspConfig::default().with_strategy(strategy);
            let result = TspRunner::run(&matrix, &config).unwrap();
            assert_eq!(result.cost, 97, "{strategy:?}");
            assert_valid_tour(&matrix, &result, 0);
        }
    }

    #[test]
    fn test_custom_start_city() {
        let matrix = kite_four();
        for strategy in STRATEGIES {
            let config = TspConfig::default()
                .with_strategy(strategy)
                .with_start_city(2);
            let result = TspRunner::run(&matrix, &config).unwrap();
            assert_eq!(result.cost, 97);
            assert_valid_tour(&matrix, &result, 2);
        }
    }

    #[test]
    fn test_asymmetric() {
        // Clockwise 0->1->2->0 costs 3, counter-clockwise costs 30.
        let matrix =
            DistanceMatrix::new(vec![vec![0, 1, 10], vec![10, 0, 1], vec![1, 10, 0]]).unwrap();
        for strategy in STRATEGIES {
            let result =
                TspRunner::run(&matrix, &TspConfig::default().with_strategy(strategy)).unwrap();
            assert_eq!(result.cost, 3);
            assert_eq!(result.tour, vec![0, 1, 2]);
        }
    }

    // ---- Degenerate sizes ----

    #[test]
    fn test_empty_and_single() {
        let empty = DistanceMatrix::new(vec![]).unwrap();
        let single = DistanceMatrix::new(vec![vec![0]]).unwrap();
        let pair = DistanceMatrix::new(vec![vec![0, 4], vec![6, 0]]).unwrap();
        for strategy in STRATEGIES {
            let config = TspConfig::default().with_strategy(strategy);

            let r = TspRunner::run(&empty, &config).unwrap();
            assert_eq!((r.cost, r.tour.len()), (0, 0));

            let r = TspRunner::run(&single, &config).unwrap();
            assert_eq!((r.cost, r.tour), (0, vec![0]));

            let r = TspRunner::run(&pair, &config).unwrap();
            assert_eq!((r.cost, r.tour), (10, vec![0, 1]));
        }
    }

    // ---- Validation ----

    #[test]
    fn test_too_many_cities() {
        let matrix = square_four();
        let config = TspConfig::default().with_max_cities(3);
        assert_eq!(
            TspRunner::run(&matrix, &config).unwrap_err(),
            Error::TooManyCities { cities: 4, max: 3 }
        );
    }

    #[test]
    fn test_start_city_out_of_range() {
        let matrix = square_four();
        let config = TspConfig::default().with_start_city(4);
        assert!(matches!(
            TspRunner::run(&matrix, &config),
            Err(Error::NodeOutOfRange { node: 4, .. })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let matrix = square_four();
        let config = TspConfig::default().with_max_cities(0);
        assert!(matches!(
            TspRunner::run(&matrix, &config),
            Err(Error::InvalidConfig(_))
        ));
    }

    // ---- Cross-checks ----

    fn arb_matrix() -> impl Strategy<Value = DistanceMatrix> {
        (2usize..7).prop_flat_map(|n| {
            prop::collection::vec(prop::collection::vec(0u64..50, n), n)
                .prop_map(|rows| DistanceMatrix::new(rows).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_strategies_match_brute_force(matrix in arb_matrix()) {
            let expected = brute_force(&matrix);
            for strategy in STRATEGIES {
                let result = TspRunner::run(&matrix, &TspConfig::default().with_strategy(strategy)).unwrap();
                prop_assert_eq!(result.cost, expected);
                prop_assert_eq!(matrix.tour_cost(&result.tour), result.cost);
                prop_assert_eq!(result.tour.len(), matrix.len());
            }
        }
    }
}
