//! 0/1 knapsack.

use crate::error::{Error, Result};

/// Largest capacity [`knapsack`] accepts. The DP keeps one row of
/// `capacity + 1` cells plus a decision row per item.
pub const MAX_CAPACITY: usize = 1 << 24;

/// An optimal knapsack selection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    /// Total value of the selected items.
    pub best_value: u64,
    /// Indices of the selected items, ascending.
    pub items: Vec<usize>,
}

/// Solves 0/1 knapsack for `capacity`.
///
/// `best[c]` holds the best value achievable with capacity `c` using the
/// items seen so far. Each item sweeps `c` from `capacity` down to its
/// weight so it is counted at most once. A per-item `taken` row records
/// decisions for reconstruction.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if `weights` and `values` differ in length
/// - [`Error::CapacityTooLarge`] if `capacity` exceeds [`MAX_CAPACITY`]
///
/// # Examples
///
/// ```
/// use u_algos::dp::knapsack;
///
/// let result = knapsack(26, &[12, 7, 11, 8, 9], &[24, 13, 23, 15, 16]).unwrap();
/// assert_eq!(result.best_value, 51);
/// assert_eq!(result.items, vec![1, 2, 3]);
/// ```
pub fn knapsack(capacity: usize, weights: &[usize], values: &[u64]) -> Result<Knapsack> {
    if weights.len() != values.len() {
        return Err(Error::LengthMismatch {
            left_name: "weights",
            left: weights.len(),
            right_name: "values",
            right: values.len(),
        });
    }
    if capacity > MAX_CAPACITY {
        return Err(Error::CapacityTooLarge {
            capacity,
            max: MAX_CAPACITY,
        });
    }

    let mut best = vec![0u64; capacity + 1];
    let mut taken = vec![vec![false; capacity + 1]; weights.len()];

    for (i, (&weight, &value)) in weights.iter().zip(values).enumerate() {
        if weight > capacity {
            continue;
        }
        for c in (weight..=capacity).rev() {
            let with_item = best[c - weight].saturating_add(value);
            if with_item > best[c] {
                best[c] = with_item;
                taken[i][c] = true;
            }
        }
    }

    let mut items = Vec::new();
    let mut c = capacity;
    for i in (0..weights.len()).rev() {
        if taken[i][c] {
            items.push(i);
            c -= weights[i];
        }
    }
    items.reverse();

    Ok(Knapsack {
        best_value: best[capacity],
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_instances() {
        let weights = [23, 31, 29, 44, 53, 38, 63, 85, 89, 82];
        let values = [92, 57, 49, 68, 60, 43, 67, 84, 87, 72];
        let result = knapsack(165, &weights, &values).unwrap();
        assert_eq!(result.best_value, 92 + 57 + 49 + 68 + 43);
        assert_eq!(result.items, vec![0, 1, 2, 3, 5]);

        assert_eq!(knapsack(5, &[4, 5, 1], &[1, 2, 3]).unwrap().best_value, 4);
        assert_eq!(knapsack(4, &[4, 5, 1], &[1, 2, 3]).unwrap().best_value, 3);
        assert_eq!(knapsack(3, &[4, 5, 6], &[1, 2, 3]).unwrap().best_value, 0);
    }

    #[test]
    fn test_empty_and_zero_capacity() {
        let empty = knapsack(10, &[], &[]).unwrap();
        assert_eq!(empty.best_value, 0);
        assert!(empty.items.is_empty());

        let zero = knapsack(0, &[0, 1], &[5, 9]).unwrap();
        assert_eq!(zero.best_value, 5);
        assert_eq!(zero.items, vec![0]);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            knapsack(5, &[1, 2], &[3]),
            Err(Error::LengthMismatch { left: 2, right: 1, .. })
        ));
    }

    #[test]
    fn test_capacity_limit() {
        for capacity in [usize::MAX, MAX_CAPACITY + 1] {
            assert_eq!(
                knapsack(capacity, &[1], &[1]),
                Err(Error::CapacityTooLarge {
                    capacity,
                    max: MAX_CAPACITY
                })
            );
        }
    }

    proptest! {
        #[test]
        fn prop_matches_subset_brute_force(
            items in prop::collection::vec((0usize..15, 0u64..30), 0..9),
            capacity in 0usize..40,
        ) {
            let (weights, values): (Vec<usize>, Vec<u64>) = items.into_iter().unzip();
            let result = knapsack(capacity, &weights, &values).unwrap();

            let n = weights.len();
            let expected = (0u32..1 << n)
                .filter_map(|mask| {
                    let chosen = (0..n).filter(|&i| mask & (1 << i) != 0);
                    let w: usize = chosen.clone().map(|i| weights[i]).sum();
                    (w <= capacity).then(|| chosen.map(|i| values[i]).sum::<u64>())
                })
                .max()
                .unwrap_or(0);
            prop_assert_eq!(result.best_value, expected);

            let w: usize = result.items.iter().map(|&i| weights[i]).sum();
            let v: u64 = result.items.iter().map(|&i| values[i]).sum();
            prop_assert!(w <= capacity);
            prop_assert_eq!(v, result.best_value);
        }
    }
}
