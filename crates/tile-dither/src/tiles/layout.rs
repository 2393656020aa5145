//! Tile geometry.

/// Tile width in (already halved) pixels.
pub const TILE_WIDTH: usize = 4;

/// Tile height in pixels.
pub const TILE_HEIGHT: usize = 8;

/// Partition of a `width * height` pixel grid into 4x8 tiles.
///
/// Tiles are numbered row-major. Sizes that are not multiples of the tile
/// size produce partial tiles along the right and bottom edges; iteration
/// over a partial tile is clamped to the image bounds.
///
/// ```
/// use tile_dither::tiles::TileLayout;
///
/// let layout = TileLayout::new(10, 9);
/// assert_eq!((layout.columns(), layout.rows()), (3, 2));
///
/// // The bottom-right tile holds the 2x1 leftover corner.
/// let corner: Vec<_> = layout.pixels(2, 1).collect();
/// assert_eq!(corner, vec![(8, 8), (9, 8)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    width: usize,
    height: usize,
}

impl TileLayout {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Tiles per row.
    #[inline]
    pub fn columns(&self) -> usize {
        self.width.div_ceil(TILE_WIDTH)
    }

    /// Tile rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.height.div_ceil(TILE_HEIGHT)
    }

    /// Total number of tiles.
    #[inline]
    pub fn count(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Tile `(column, row)` containing pixel `(x, y)`.
    #[inline]
    pub fn tile_of(x: usize, y: usize) -> (usize, usize) {
        (x / TILE_WIDTH, y / TILE_HEIGHT)
    }

    /// All tiles as `(column, row)`, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize)> {
        let columns = self.columns();
        (0..self.rows()).flat_map(move |row| (0..columns).map(move |col| (col, row)))
    }

    /// Pixels of tile `(column, row)` that lie inside the image, row-major.
    pub fn pixels(&self, column: usize, row: usize) -> impl Iterator<Item = (usize, usize)> {
        let x0 = column * TILE_WIDTH;
        let y0 = row * TILE_HEIGHT;
        let x1 = (x0 + TILE_WIDTH).min(self.width);
        let y1 = (y0 + TILE_HEIGHT).min(self.height);
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_frame() {
        let layout = TileLayout::new(160, 200);
        assert_eq!(layout.columns(), 40);
        assert_eq!(layout.rows(), 25);
        assert_eq!(layout.count(), 1000);
    }

    #[test]
    fn test_partial_tiles_are_counted() {
        let layout = TileLayout::new(5, 17);
        assert_eq!((layout.columns(), layout.rows()), (2, 3));
    }

    #[test]
    fn test_full_tile_pixels() {
        let layout = TileLayout::new(8, 8);
        let pixels: Vec<_> = layout.pixels(1, 0).collect();
        assert_eq!(pixels.len(), 32);
        assert_eq!(pixels[0], (4, 0));
        assert_eq!(pixels[3], (7, 0));
        assert_eq!(pixels[4], (4, 1));
        assert_eq!(pixels[31], (7, 7));
    }

    #[test]
    fn test_partial_tile_is_clamped() {
        let layout = TileLayout::new(6, 3);
        let pixels: Vec<_> = layout.pixels(1, 0).collect();
        assert_eq!(pixels, vec![(4, 0), (5, 0), (4, 1), (5, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_tiles_cover_every_pixel_once() {
        let layout = TileLayout::new(11, 13);
        let mut seen = vec![0u8; 11 * 13];
        for (col, row) in layout.tiles() {
            for (x, y) in layout.pixels(col, row) {
                assert_eq!(TileLayout::tile_of(x, y), (col, row));
                seen[y * 11 + x] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_empty_layout() {
        let layout = TileLayout::new(0, 0);
        assert_eq!(layout.count(), 0);
        assert_eq!(layout.tiles().count(), 0);
    }
}
