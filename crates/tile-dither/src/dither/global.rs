//! Single-palette context.

use super::{diffuse, DitherContext};
use crate::color::Rgba16;
use crate::grid::{IndexGrid, SampleImage};

/// Dither context in which every pixel shares one palette.
///
/// Chosen indices are written into an [`IndexGrid`] of the same size as
/// the source.
#[derive(Debug)]
pub struct PaletteImage<'a> {
    source: &'a SampleImage,
    palette: &'a [Rgba16],
    indices: IndexGrid,
}

impl<'a> PaletteImage<'a> {
    pub fn new(source: &'a SampleImage, palette: &'a [Rgba16]) -> Self {
        Self {
            source,
            palette,
            indices: IndexGrid::new(source.width(), source.height()),
        }
    }

    /// Consume the context, returning the chosen palette indices.
    pub fn into_indices(self) -> IndexGrid {
        self.indices
    }
}

impl DitherContext for PaletteImage<'_> {
    fn width(&self) -> usize {
        self.source.width()
    }

    fn height(&self) -> usize {
        self.source.height()
    }

    fn source(&self, x: usize, y: usize) -> Rgba16 {
        *self.source.get(x, y)
    }

    fn palette_at(&self, _x: usize, _y: usize) -> &[Rgba16] {
        self.palette
    }

    fn set(&mut self, x: usize, y: usize, index: usize) {
        self.indices.set(x, y, index as u8);
    }
}

/// Dither `source` to `palette`, returning one palette index per pixel.
///
/// `palette` may hold at most 256 colors. Exact palette colors in the
/// source come out unchanged.
pub fn quantize_to_palette(source: &SampleImage, palette: &[Rgba16]) -> IndexGrid {
    debug_assert!(palette.len() <= 256, "indices are stored as u8");

    let mut ctx = PaletteImage::new(source, palette);
    diffuse(&mut ctx);
    ctx.into_indices()
}
