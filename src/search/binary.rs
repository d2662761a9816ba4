//! Binary-search boundary variants.

use std::cmp::Ordering;

/// Returns the index of some element equal to `target`.
///
/// Closed-interval search: the loop runs while `lo <= hi`, so a
/// one-element window is still examined.
///
/// # Examples
///
/// ```
/// use u_algos::search::find;
///
/// assert_eq!(find(&[0, 2, 4], &4), Some(2));
/// assert_eq!(find(&[0, 2, 4], &3), None);
/// ```
pub fn find<T: Ord>(nums: &[T], target: &T) -> Option<usize> {
    if nums.is_empty() {
        return None;
    }

    let mut lo = 0usize;
    let mut hi = nums.len() - 1;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match nums[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                hi = mid - 1;
            }
            Ordering::Less => lo = mid + 1,
        }
    }
    None
}

/// First index `i` with `nums[i] >= target`, or `nums.len()` if none.
pub fn lower_bound<T: Ord>(nums: &[T], target: &T) -> usize {
    let mut lo = 0usize;
    let mut hi = nums.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] >= *target {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// First index `i` with `nums[i] > target`, or `nums.len()` if none.
pub fn upper_bound<T: Ord>(nums: &[T], target: &T) -> usize {
    let mut lo = 0usize;
    let mut hi = nums.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] <= *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Index of the first element equal to `target`.
///
/// # Examples
///
/// ```
/// use u_algos::search::find_leftmost;
///
/// assert_eq!(find_leftmost(&[0, 0, 2, 2, 4, 4], &2), Some(2));
/// assert_eq!(find_leftmost(&[0, 0, 2, 2, 4, 4], &3), None);
/// ```
pub fn find_leftmost<T: Ord>(nums: &[T], target: &T) -> Option<usize> {
    let i = lower_bound(nums, target);
    (i < nums.len() && nums[i] == *target).then_some(i)
}

/// Index of the last element equal to `target`.
///
/// # Examples
///
/// ```
/// use u_algos::search::find_rightmost;
///
/// assert_eq!(find_rightmost(&[0, 0, 2, 2, 4, 4], &2), Some(3));
/// assert_eq!(find_rightmost(&[0, 0, 2, 2, 4, 4], &-1), None);
/// ```
pub fn find_rightmost<T: Ord>(nums: &[T], target: &T) -> Option<usize> {
    let i = upper_bound(nums, target).checked_sub(1)?;
    (nums[i] == *target).then_some(i)
}

/// Number of elements equal to `target`, in O(log n).
///
/// # Examples
///
/// ```
/// use u_algos::search::count_occurrences;
///
/// let nums = [4, 4, 8, 8, 8, 15, 16, 23, 23, 42];
/// assert_eq!(count_occurrences(&nums, &8), 3);
/// assert_eq!(count_occurrences(&nums, &6), 0);
/// ```
pub fn count_occurrences<T: Ord>(nums: &[T], target: &T) -> usize {
    upper_bound(nums, target) - lower_bound(nums, target)
}
