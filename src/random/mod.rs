//! Building a uniform six-way choice from a four-way and a three-way one.
//!
//! A uniform value in `0..4` paired with a uniform selector in `0..3` gives
//! twelve equally likely pairs. [`convert`] maps them onto `0..6` so that
//! every output is hit by exactly two pairs, which keeps the result
//! uniform without rejection sampling.

mod conversion;

pub use conversion::{convert, histogram, sample, SELECTOR_BOUND, SOURCE_BOUND, TARGET_BOUND};
