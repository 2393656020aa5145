//! MulticolorConverter builder -- the primary entry point for the crate.
//!
//! [`MulticolorConverter`] runs the full pipeline: downsample, quantize to
//! the master palette, plan tile palettes, diffuse again against the tile
//! palettes.

use super::DitherError;
use crate::dither::{diffuse, quantize_to_palette};
use crate::grid::{IndexGrid, SampleImage};
use crate::output::MulticolorBitmap;
use crate::palette::{MasterPalette, PALETTE_SIZE};
use crate::preprocess::downsample_frame;
use crate::tiles::{self, BackgroundChoice, TileContext};

/// Converter from full-color frames to multicolor bitmaps.
///
/// - Constructor requires a [`MasterPalette`]
/// - Configuration methods consume and return `self`
/// - [`convert()`](Self::convert) takes `&self`, so one converter serves
///   many images
///
/// # Example
///
/// ```
/// use tile_dither::{Grid, MasterPalette, MulticolorConverter, Rgba16};
///
/// let frame = Grid::filled(320, 200, Rgba16::from_u8(0x40, 0x3A, 0x7B));
/// let result = MulticolorConverter::new(MasterPalette::ntsc())
///     .convert(&frame)
///     .unwrap();
///
/// assert_eq!(result.bitmap.width(), 160);
/// assert_eq!(result.overflow_tiles, 0);
/// ```
#[derive(Debug, Clone)]
pub struct MulticolorConverter {
    master: MasterPalette,
    background: Option<usize>,
}

/// Result of [`MulticolorConverter::convert`].
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Final pixels and tile palettes.
    pub bitmap: MulticolorBitmap,
    /// Background and the overflow cost of every candidate.
    pub background: BackgroundChoice,
    /// Tiles whose first-pass colors did not fit in three slots.
    pub overflow_tiles: usize,
}

impl MulticolorConverter {
    /// Create a converter that searches for the best background.
    pub fn new(master: MasterPalette) -> Self {
        Self {
            master,
            background: None,
        }
    }

    /// Use master color `index` as the background instead of searching.
    #[inline]
    pub fn background(mut self, index: usize) -> Self {
        self.background = Some(index);
        self
    }

    #[inline]
    pub fn master(&self) -> &MasterPalette {
        &self.master
    }

    /// Convert a 320x200 frame.
    ///
    /// # Errors
    ///
    /// - [`DitherError::InvalidDimensions`] unless the frame halves to
    ///   160x200
    /// - [`DitherError::BackgroundOutOfRange`] for a fixed background
    ///   above 15
    pub fn convert(&self, source: &SampleImage) -> Result<Conversion, DitherError> {
        let halved = downsample_frame(source)?;
        self.convert_halved(&halved)
    }

    /// Convert an image that is already at bitmap resolution.
    ///
    /// Any size is accepted; partial tiles at the right and bottom edges are
    /// planned and dithered like full ones.
    pub fn convert_halved(&self, image: &SampleImage) -> Result<Conversion, DitherError> {
        let first_pass = quantize_to_palette(image, self.master.colors());

        let plan = match self.background {
            Some(index) if index >= PALETTE_SIZE => {
                return Err(DitherError::BackgroundOutOfRange(index));
            }
            Some(index) => tiles::plan_with_background(&first_pass, index as u8),
            None => tiles::plan(&first_pass),
        };
        let background = plan.background;
        let overflow_tiles = tiles::overflow_tiles(&first_pass, background.index);

        let colors = plan.resolve(&self.master);
        let mut pixels = IndexGrid::new(image.width(), image.height());
        diffuse(&mut TileContext::new(image, &colors, &mut pixels));

        Ok(Conversion {
            bitmap: MulticolorBitmap::new(
                pixels,
                plan.palettes,
                background.index,
                self.master.clone(),
            ),
            background,
            overflow_tiles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba16;
    use crate::grid::Grid;

    #[test]
    fn test_rejects_wrong_frame() {
        let converter = MulticolorConverter::new(MasterPalette::ntsc());
        let result = converter.convert(&Grid::filled(160, 200, Rgba16::default()));
        assert!(matches!(
            result,
            Err(DitherError::InvalidDimensions {
                width: 160,
                height: 200
            })
        ));
    }

    #[test]
    fn test_fixed_background_is_used() {
        let converter = MulticolorConverter::new(MasterPalette::ntsc()).background(6);
        let image = Grid::filled(8, 8, Rgba16::from_u8(0xFF, 0xFF, 0xFF));
        let result = converter.convert_halved(&image).unwrap();

        assert_eq!(result.background.index, 6);
        assert_eq!(result.bitmap.background(), 6);
        assert!(result.bitmap.palettes().as_slice().iter().all(|p| p.background() == 6));
    }

    #[test]
    fn test_fixed_background_out_of_range() {
        let converter = MulticolorConverter::new(MasterPalette::ntsc()).background(16);
        let image = Grid::filled(4, 8, Rgba16::default());
        assert!(matches!(
            converter.convert_halved(&image),
            Err(DitherError::BackgroundOutOfRange(16))
        ));
    }

    #[test]
    fn test_converter_is_reusable() {
        let converter = MulticolorConverter::new(MasterPalette::pepto());
        let image = Grid::from_fn(12, 10, |x, y| Rgba16::from_u8((x * 20) as u8, (y * 25) as u8, 90));
        let a = converter.convert_halved(&image).unwrap();
        let b = converter.convert_halved(&image).unwrap();
        assert_eq!(a.bitmap, b.bitmap);
        assert_eq!(a.background, b.background);
    }
}
