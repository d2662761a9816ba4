use rand::Rng;

use crate::error::{Error, Result};

/// Exclusive upper bound of the source value.
pub const SOURCE_BOUND: u8 = 4;
/// Exclusive upper bound of the selector.
pub const SELECTOR_BOUND: u8 = 3;
/// Exclusive upper bound of the converted value.
pub const TARGET_BOUND: u8 = 6;

/// Maps a `(source, selector)` pair onto `0..6`.
///
/// `(source + 4 * selector) mod 6`: the selector shifts by 0, 4 or 2, so
/// each source reaches one even-offset triple and all 12 pairs cover the
/// six outputs twice each.
///
/// # Errors
///
/// [`Error::OutOfDomain`] if `source >= 4` or `selector >= 3`.
///
/// # Examples
///
/// ```
/// use u_algos::random::convert;
///
/// assert_eq!(convert(0, 1).unwrap(), 4);
/// assert_eq!(convert(3, 2).unwrap(), 5);
/// assert!(convert(4, 0).is_err());
/// ```
pub fn convert(source: u8, selector: u8) -> Result<u8> {
    if source >= SOURCE_BOUND {
        return Err(Error::OutOfDomain {
            value: source,
            bound: SOURCE_BOUND,
        });
    }
    if selector >= SELECTOR_BOUND {
        return Err(Error::OutOfDomain {
            value: selector,
            bound: SELECTOR_BOUND,
        });
    }
    Ok(map_pair(source, selector))
}

/// Draws a source value and a selector from `rng` and converts them.
pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let source = rng.random_range(0..SOURCE_BOUND);
    let selector = rng.random_range(0..SELECTOR_BOUND);
    map_pair(source, selector)
}

/// The pair-to-output table. Callers guarantee both inputs are in range.
fn map_pair(source: u8, selector: u8) -> u8 {
    (source + 4 * selector) % TARGET_BOUND
}

/// Counts how often each output appears over `samples` draws.
pub fn histogram<R: Rng + ?Sized>(rng: &mut R, samples: usize) -> [u64; TARGET_BOUND as usize] {
    let mut counts = [0u64; TARGET_BOUND as usize];
    for _ in 0..samples {
        counts[sample(rng) as usize] += 1;
    }
    counts
}
