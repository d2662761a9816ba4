//! Redeeming purchases against a multiplier deque.
//!
//! A promotion card holds `n` point multipliers. Purchases are redeemed in
//! order, and each takes the multiplier at either the front or the back of
//! what remains on the card, scoring `price * multiplier`.

use crate::error::{Error, Result};

/// Maximum total points for redeeming `prices` in order against
/// `multipliers`.
///
/// `best[l][r]` is the best score for the multipliers `l..=r` still on
/// the card. With `len = r - l + 1` of them left, the next purchase is
/// `prices[n - len]`. Segments are solved from length 1 upward. Arithmetic
/// saturates at the `i64` bounds.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if the slices differ in length.
///
/// # Examples
///
/// ```
/// use u_algos::dp::max_redeem_points;
///
/// assert_eq!(max_redeem_points(&[1, 2, 3, 4], &[5, 10, 8, 9]).unwrap(), 88);
/// ```
pub fn max_redeem_points(multipliers: &[i64], prices: &[i64]) -> Result<i64> {
    if multipliers.len() != prices.len() {
        return Err(Error::LengthMismatch {
            left_name: "multipliers",
            left: multipliers.len(),
            right_name: "prices",
            right: prices.len(),
        });
    }
    let n = multipliers.len();
    if n == 0 {
        return Ok(0);
    }

    let score = |price: i64, mult: i64| price.saturating_mul(mult);
    let mut best = vec![vec![0i64; n]; n];

    for (l, &m) in multipliers.iter().enumerate() {
        best[l][l] = score(prices[n - 1], m);
    }
    for len in 2..=n {
        let price = prices[n - len];
        for l in 0..=n - len {
            let r = l + len - 1;
            let take_front = score(price, multipliers[l]).saturating_add(best[l + 1][r]);
            let take_back = score(price, multipliers[r]).saturating_add(best[l][r - 1]);
            best[l][r] = take_front.max(take_back);
        }
    }

    Ok(best[0][n - 1])
}
