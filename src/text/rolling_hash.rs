//! Rolling hash and Rabin–Karp search.

use std::ops::ControlFlow;

use crate::error::{Error, Result};

const BASE: u64 = 256;
const MODULUS: u64 = 1_000_000_007;

/// Polynomial hash of the last `window` bytes, modulo a prime.
///
/// Fill the window with [`push`](Self::push), then slide it with
/// [`roll`](Self::roll).
///
/// # Examples
///
/// ```
/// use u_algos::text::RollingHash;
///
/// let mut sliding = RollingHash::new(3);
/// for &b in b"abr" {
///     sliding.push(b).unwrap();
/// }
/// sliding.roll(b'a', b'a').unwrap(); // window is now "bra"
///
/// let mut direct = RollingHash::new(3);
/// for &b in b"bra" {
///     direct.push(b).unwrap();
/// }
/// assert_eq!(sliding.value(), direct.value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingHash {
    window: usize,
    len: usize,
    value: u64,
    /// `BASE^(window - 1) mod MODULUS`, the weight of the outgoing byte.
    lead_weight: u64,
}

impl RollingHash {
    /// Creates an empty hash over a window of `window` bytes.
    pub fn new(window: usize) -> Self {
        let lead_weight = (1..window).fold(1u64, |acc, _| acc * BASE % MODULUS);
        Self {
            window,
            len: 0,
            value: 0,
            lead_weight,
        }
    }

    /// Current hash value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of bytes pushed so far (at most the window size).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the window has been filled.
    pub fn is_full(&self) -> bool {
        self.len == self.window
    }

    /// Appends a byte while filling the window.
    ///
    /// # Errors
    ///
    /// [`Error::WindowFull`] once the window holds `window` bytes.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        if self.is_full() {
            return Err(Error::WindowFull {
                window: self.window,
            });
        }
        self.append(byte);
        Ok(())
    }

    /// Slides the full window by one byte: drops `outgoing` (the oldest
    /// byte) and appends `incoming`.
    ///
    /// # Errors
    ///
    /// [`Error::WindowNotFilled`] before the window is full.
    pub fn roll(&mut self, outgoing: u8, incoming: u8) -> Result<()> {
        if !self.is_full() {
            return Err(Error::WindowNotFilled {
                len: self.len,
                window: self.window,
            });
        }
        self.slide(outgoing, incoming);
        Ok(())
    }

    fn append(&mut self, byte: u8) {
        self.value = (self.value * BASE + u64::from(byte)) % MODULUS;
        self.len += 1;
    }

    fn slide(&mut self, outgoing: u8, incoming: u8) {
        if self.window == 0 {
            return;
        }
        let lead = u64::from(outgoing) * self.lead_weight % MODULUS;
        let trimmed = (self.value + MODULUS - lead) % MODULUS;
        self.value = (trimmed * BASE + u64::from(incoming)) % MODULUS;
    }
}

/// Offset of the first occurrence of `needle` in `haystack`.
///
/// An empty needle matches at offset 0.
///
/// # Examples
///
/// ```
/// use u_algos::text::find;
///
/// assert_eq!(find("abracadabra", "cad"), Some(4));
/// assert_eq!(find("abracadabra", "cda"), None);
/// ```
pub fn find(haystack: impl AsRef<[u8]>, needle: impl AsRef<[u8]>) -> Option<usize> {
    let mut first = None;
    scan(haystack.as_ref(), needle.as_ref(), |offset| {
        first = Some(offset);
        ControlFlow::Break(())
    });
    first
}

/// Offsets of every occurrence of `needle` in `haystack`, overlaps included.
///
/// An empty needle matches at every offset `0..=haystack.len()`.
pub fn find_all(haystack: impl AsRef<[u8]>, needle: impl AsRef<[u8]>) -> Vec<usize> {
    let mut offsets = Vec::new();
    scan(haystack.as_ref(), needle.as_ref(), |offset| {
        offsets.push(offset);
        ControlFlow::Continue(())
    });
    offsets
}

fn scan(haystack: &[u8], needle: &[u8], mut on_match: impl FnMut(usize) -> ControlFlow<()>) {
    let m = needle.len();
    if m == 0 {
        for offset in 0..=haystack.len() {
            if on_match(offset).is_break() {
                return;
            }
        }
        return;
    }
    if m > haystack.len() {
        return;
    }

    let mut target = RollingHash::new(m);
    let mut window = RollingHash::new(m);
    for (&n, &h) in needle.iter().zip(haystack) {
        target.append(n);
        window.append(h);
    }

    let mut offset = 0;
    loop {
        if window.value() == target.value()
            && &haystack[offset..offset + m] == needle
            && on_match(offset).is_break()
        {
            return;
        }
        let next = offset + m;
        if next >= haystack.len() {
            return;
        }
        window.slide(haystack[offset], haystack[next]);
        offset += 1;
    }
}
