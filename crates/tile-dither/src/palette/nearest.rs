//! Nearest-color search over signed colors.
//!
//! Error diffusion adds accumulated error to each sample before matching,
//! so the query color routinely leaves the `0..=65535` range. The search
//! here works on [`WideRgb`] and never clamps: a strongly negative red
//! channel still prefers the darkest red available.

use crate::color::{Rgba16, WideRgb};

/// Distance between a signed color and a palette entry.
///
/// Each channel difference is halved with an arithmetic shift before it is
/// squared, keeping the metric identical to the one existing Koala
/// converters use. The sum is accumulated in `u64` so that extreme error
/// values cannot wrap.
#[inline]
pub fn distance(color: WideRgb, entry: Rgba16) -> u64 {
    let entry = entry.wide();
    let channel = |c: i32, p: i32| {
        let d = i64::from((c - p) >> 1);
        (d * d) as u64
    };
    channel(color.r, entry.r) + channel(color.g, entry.g) + channel(color.b, entry.b)
}

/// Index of the candidate closest to `color`.
///
/// Ties resolve to the earliest candidate, so palettes containing the same
/// color twice always report the first slot.
///
/// `candidates` must not be empty; an empty slice returns 0.
///
/// # Example
///
/// ```
/// use tile_dither::{nearest, Rgba16, WideRgb};
///
/// let palette = [Rgba16::from_u8(0, 0, 0), Rgba16::from_u8(255, 255, 255)];
/// // Far below black still maps to black.
/// assert_eq!(nearest(WideRgb::new(-90_000, -5, -5), &palette), 0);
/// assert_eq!(nearest(WideRgb::new(40_000, 40_000, 40_000), &palette), 1);
/// ```
pub fn nearest(color: WideRgb, candidates: &[Rgba16]) -> usize {
    debug_assert!(!candidates.is_empty(), "nearest() needs at least one candidate");

    let mut best_index = 0;
    let mut best_dist = u64::MAX;
    for (i, &entry) in candidates.iter().enumerate() {
        let dist = distance(color, entry);
        if dist < best_dist {
            best_index = i;
            best_dist = dist;
        }
    }
    best_index
}
