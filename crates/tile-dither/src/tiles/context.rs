//! Dither context for tile palettes.

use super::layout::TileLayout;
use crate::color::Rgba16;
use crate::dither::DitherContext;
use crate::grid::{Grid, IndexGrid, SampleImage};

/// Error diffusion target where each pixel uses its tile's four colors.
///
/// Holds references to the source samples, the resolved tile colors and the
/// output grid; `set` writes the tile-palette slot (0-3) of each pixel.
pub struct TileContext<'a> {
    source: &'a SampleImage,
    colors: &'a Grid<[Rgba16; 4]>,
    indices: &'a mut IndexGrid,
}

impl<'a> TileContext<'a> {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the three grids agree in size.
    pub fn new(
        source: &'a SampleImage,
        colors: &'a Grid<[Rgba16; 4]>,
        indices: &'a mut IndexGrid,
    ) -> Self {
        debug_assert_eq!(
            (source.width(), source.height()),
            (indices.width(), indices.height())
        );
        let layout = TileLayout::new(source.width(), source.height());
        debug_assert_eq!((colors.width(), colors.height()), (layout.columns(), layout.rows()));
        Self {
            source,
            colors,
            indices,
        }
    }
}

impl DitherContext for TileContext<'_> {
    fn width(&self) -> usize {
        self.source.width()
    }

    fn height(&self) -> usize {
        self.source.height()
    }

    fn source(&self, x: usize, y: usize) -> Rgba16 {
        *self.source.get(x, y)
    }

    fn palette_at(&self, x: usize, y: usize) -> &[Rgba16] {
        let (col, row) = TileLayout::tile_of(x, y);
        self.colors.get(col, row)
    }

    fn set(&mut self, x: usize, y: usize, index: usize) {
        self.indices.set(x, y, index as u8);
    }
}
