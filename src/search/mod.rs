//! Binary search over sorted slices.
//!
//! All functions expect `nums` sorted in ascending order. The results for
//! unsorted input are unspecified (but never panic).
//!
//! | Function | Interval | Returns |
//! |---|---|---|
//! | [`find`] | closed `[lo, hi]` | any matching index |
//! | [`find_leftmost`] | half-open `[lo, hi)` | first matching index |
//! | [`find_rightmost`] | half-open `[lo, hi)` | last matching index |
//! | [`lower_bound`] | half-open | first index with `nums[i] >= target` |
//! | [`upper_bound`] | half-open | first index with `nums[i] > target` |
//! | [`count_occurrences`] | both bounds | number of matches, O(log n) |

mod binary;

pub use binary::{
    count_occurrences, find, find_leftmost, find_rightmost, lower_bound, upper_bound,
};
