//! MulticolorBitmap: the finished conversion.
//!
//! [`MulticolorBitmap`] pairs the per-pixel slot grid with the per-tile
//! palettes and the master palette they index. It is the input of both the
//! Koala serializer and the preview renderer.

use crate::color::Rgba16;
use crate::grid::{Grid, IndexGrid};
use crate::palette::MasterPalette;
use crate::tiles::{TileLayout, TilePalette};

/// A quantized multicolor bitmap.
///
/// Every pixel holds a slot `0..4` into the palette of its 4x8 tile; every
/// tile palette holds four master palette indices with the shared
/// background in slot 0.
///
/// # Example
///
/// ```
/// use tile_dither::tiles::TilePalette;
/// use tile_dither::{Grid, MasterPalette, MulticolorBitmap};
///
/// let pixels = Grid::filled(4, 8, 2u8);
/// let palettes = Grid::filled(1, 1, TilePalette([0, 1, 7, 2]));
/// let bitmap = MulticolorBitmap::new(pixels, palettes, 0, MasterPalette::ntsc());
///
/// // Slot 2 of the tile is master color 7 (yellow).
/// assert_eq!(bitmap.master_index_at(3, 5), 7);
/// assert_eq!(bitmap.preview_width(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MulticolorBitmap {
    /// Tile palette slot per pixel.
    pixels: IndexGrid,
    /// One palette per tile, row-major.
    palettes: Grid<TilePalette>,
    /// Shared background master index.
    background: u8,
    master: MasterPalette,
}

impl MulticolorBitmap {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `palettes` has one entry per tile of `pixels`.
    pub fn new(
        pixels: IndexGrid,
        palettes: Grid<TilePalette>,
        background: u8,
        master: MasterPalette,
    ) -> Self {
        let layout = TileLayout::new(pixels.width(), pixels.height());
        debug_assert_eq!(
            (palettes.width(), palettes.height()),
            (layout.columns(), layout.rows()),
            "palette grid must have one entry per tile"
        );
        Self {
            pixels,
            palettes,
            background,
            master,
        }
    }

    /// Width in bitmap pixels (half the display width).
    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Width of the preview, which draws every pixel twice.
    #[inline]
    pub fn preview_width(&self) -> usize {
        self.width() * 2
    }

    #[inline]
    pub fn pixels(&self) -> &IndexGrid {
        &self.pixels
    }

    #[inline]
    pub fn palettes(&self) -> &Grid<TilePalette> {
        &self.palettes
    }

    #[inline]
    pub fn background(&self) -> u8 {
        self.background
    }

    #[inline]
    pub fn master(&self) -> &MasterPalette {
        &self.master
    }

    /// Palette of the tile containing `(x, y)`.
    pub fn palette_at(&self, x: usize, y: usize) -> TilePalette {
        let (col, row) = TileLayout::tile_of(x, y);
        *self.palettes.get(col, row)
    }

    /// Master palette index shown at `(x, y)`.
    pub fn master_index_at(&self, x: usize, y: usize) -> u8 {
        let slot = *self.pixels.get(x, y) as usize;
        self.palette_at(x, y).slots()[slot & 3]
    }

    /// Color shown at `(x, y)`.
    pub fn color_at(&self, x: usize, y: usize) -> Rgba16 {
        self.master.get(self.master_index_at(x, y) as usize)
    }

    /// Master palette index per preview pixel, each bitmap pixel doubled
    /// horizontally.
    pub fn to_preview_indices(&self) -> IndexGrid {
        Grid::from_fn(self.preview_width(), self.height(), |x, y| {
            self.master_index_at(x / 2, y)
        })
    }

    /// RGBA8 bytes of the preview, each bitmap pixel drawn as a 2x1 block.
    ///
    /// The returned buffer has length `preview_width() * height() * 4`.
    pub fn to_rgba_preview(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.preview_width() * self.height() * 4);
        for y in 0..self.height() {
            for x in 0..self.width() {
                let px = self.color_at(x, y).to_rgba8();
                rgba.extend_from_slice(&px);
                rgba.extend_from_slice(&px);
            }
        }
        rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tiles() -> MulticolorBitmap {
        // Left tile: background black, slots 1-3 white, red, cyan.
        // Right tile: background black, slots 1-3 purple, green, blue.
        let palettes = Grid::from_vec(2, 1, vec![TilePalette([0, 1, 2, 3]), TilePalette([0, 4, 5, 6])])
            .unwrap();
        let pixels = Grid::from_fn(8, 8, |x, _| (x % 4) as u8);
        MulticolorBitmap::new(pixels, palettes, 0, MasterPalette::ntsc())
    }

    #[test]
    fn test_master_index_lookup() {
        let bitmap = two_tiles();
        assert_eq!(bitmap.master_index_at(0, 0), 0);
        assert_eq!(bitmap.master_index_at(3, 7), 3);
        assert_eq!(bitmap.master_index_at(4, 0), 0);
        assert_eq!(bitmap.master_index_at(6, 2), 5);
    }

    #[test]
    fn test_preview_doubles_width() {
        let bitmap = two_tiles();
        let preview = bitmap.to_preview_indices();
        assert_eq!((preview.width(), preview.height()), (16, 8));
        let row: Vec<u8> = preview.rows().next().unwrap().to_vec();
        assert_eq!(row, vec![0, 0, 1, 1, 2, 2, 3, 3, 0, 0, 4, 4, 5, 5, 6, 6]);
    }

    #[test]
    fn test_rgba_preview_layout() {
        let bitmap = two_tiles();
        let rgba = bitmap.to_rgba_preview();
        assert_eq!(rgba.len(), 16 * 8 * 4);
        // Pixel (1, 0) is white and covers preview columns 2 and 3.
        assert_eq!(&rgba[8..16], &[255, 255, 255, 255, 255, 255, 255, 255]);
        // Pixel (0, 0) is opaque black.
        assert_eq!(&rgba[0..4], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_accessors() {
        let bitmap = two_tiles();
        assert_eq!(bitmap.width(), 8);
        assert_eq!(bitmap.height(), 8);
        assert_eq!(bitmap.background(), 0);
        assert_eq!(bitmap.palette_at(5, 5), TilePalette([0, 4, 5, 6]));
    }
}
