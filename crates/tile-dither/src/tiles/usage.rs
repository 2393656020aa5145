//! Per-tile color frequencies.

use super::layout::TileLayout;
use crate::grid::IndexGrid;
use crate::palette::PALETTE_SIZE;

/// How often each master color occurs in one tile, with one color excluded.
///
/// The excluded color is the (candidate) background: it is free in every
/// tile and never competes for the three local slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorUsage {
    counts: [u32; PALETTE_SIZE],
}

impl ColorUsage {
    /// Count the colors of tile `(column, row)` in `indices`, skipping
    /// `background`.
    pub fn of_tile(indices: &IndexGrid, column: usize, row: usize, background: u8) -> Self {
        let layout = TileLayout::new(indices.width(), indices.height());
        let mut usage = Self::default();
        for (x, y) in layout.pixels(column, row) {
            let color = *indices.get(x, y);
            debug_assert!((color as usize) < PALETTE_SIZE, "master index {color}");
            if color != background {
                usage.counts[color as usize] += 1;
            }
        }
        usage
    }

    /// Build directly from counts.
    pub fn from_counts(counts: [u32; PALETTE_SIZE]) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[u32; PALETTE_SIZE] {
        &self.counts
    }

    /// Number of colors with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Pixels that cannot keep their color when only three slots are free:
    /// the sum of all counts except the three largest. Zero when at most
    /// three colors are used.
    pub fn overflow_cost(&self) -> u32 {
        if self.distinct() <= 3 {
            return 0;
        }
        let mut sorted = self.counts;
        sorted.sort_unstable();
        sorted[..PALETTE_SIZE - 3].iter().sum()
    }

    /// The three most used colors, returned as `[third, second, most]`.
    ///
    /// Colors are scanned in index order and only displace a kept color
    /// when strictly more frequent, so the lower index wins ties. Unused
    /// colors take part in the scan as well: a tile with fewer than three
    /// colors fills the rest with the lowest unused indices, in the same
    /// rotated order. An empty tile yields `[2, 1, 0]`.
    ///
    /// This order is what ends up in the screen and color RAM bytes, so it
    /// must not change.
    pub fn top_three(&self) -> [u8; 3] {
        let mut idx = [0u8; 3];
        let mut cnt = [-1i64; 3];
        for (i, &count) in self.counts.iter().enumerate() {
            let c = i64::from(count);
            let i = i as u8;
            if c > cnt[2] {
                idx = [idx[1], idx[2], i];
                cnt = [cnt[1], cnt[2], c];
            } else if c > cnt[1] {
                idx[0] = idx[1];
                cnt[0] = cnt[1];
                idx[1] = i;
                cnt[1] = c;
            } else if c > cnt[0] {
                idx[0] = i;
                cnt[0] = c;
            }
        }
        idx
    }
}
