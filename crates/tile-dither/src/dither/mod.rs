//! Error diffusion with a per-pixel palette.
//!
//! This module generalizes Floyd-Steinberg dithering: instead of one global
//! palette, every pixel asks its [`DitherContext`] which colors it may
//! commit to. On tile-based hardware like the C64 this lets the error
//! flowing out of one tile be absorbed by the colors of the next.
//!
//! # Architecture
//!
//! - [`DitherContext`]: the five operations a ditherable target exposes
//! - [`diffuse`]: the sequential raster-order error diffusion pass
//! - [`PaletteImage`] / [`quantize_to_palette`]: the degenerate case where
//!   every pixel shares one palette
//!
//! The tile-palette context lives in [`crate::tiles::TileContext`].
//!
//! # Example
//!
//! ```
//! use tile_dither::{quantize_to_palette, Grid, MasterPalette, Rgba16};
//!
//! let palette = MasterPalette::ntsc();
//! let image = Grid::filled(8, 8, Rgba16::from_u8(0x80, 0x80, 0x80));
//! let indices = quantize_to_palette(&image, palette.colors());
//!
//! assert_eq!(indices.width(), 8);
//! assert!(indices.as_slice().iter().all(|&i| i < 16));
//! ```

mod global;

pub use global::{quantize_to_palette, PaletteImage};

use crate::color::{Rgba16, WideRgb};
use crate::palette::nearest;

/// A target that can be dithered.
///
/// `width`, `height` and `source` describe the continuous-tone input;
/// `palette_at` names the colors pixel `(x, y)` may use; `set` receives the
/// index into that palette chosen for the pixel.
pub trait DitherContext {
    /// Width in pixels.
    fn width(&self) -> usize;

    /// Height in pixels.
    fn height(&self) -> usize;

    /// Source sample at `(x, y)`.
    fn source(&self, x: usize, y: usize) -> Rgba16;

    /// Colors available to pixel `(x, y)`. Must not be empty.
    fn palette_at(&self, x: usize, y: usize) -> &[Rgba16];

    /// Commit pixel `(x, y)` to `palette_at(x, y)[index]`.
    fn set(&mut self, x: usize, y: usize, index: usize);
}

/// Error buffer for error diffusion.
///
/// Holds the current row and the next one, the only rows the kernel can
/// reach.
///
/// 1. Read accumulated error with `get_accumulated(x)`
/// 2. Distribute error with `add_error(x, row_offset, error)`
/// 3. Call `advance_row()` after each row
#[derive(Debug)]
pub struct ErrorBuffer {
    /// rows[0] is the current row, rows[1] the next.
    rows: [Vec<WideRgb>; 2],
    width: usize,
}

impl ErrorBuffer {
    /// Create a zeroed buffer for rows of `width` pixels.
    pub fn new(width: usize) -> Self {
        Self {
            rows: [vec![WideRgb::default(); width], vec![WideRgb::default(); width]],
            width,
        }
    }

    /// Error accumulated so far for pixel `x` of the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> WideRgb {
        self.rows[0][x]
    }

    /// Add error to pixel `x` of the current (`row_offset == 0`) or next
    /// (`row_offset == 1`) row.
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: WideRgb) {
        if x < self.width && row_offset < self.rows.len() {
            self.rows[row_offset][x] += error;
        }
    }

    /// Move to the next row: the next row becomes current and a zeroed row
    /// takes its place.
    pub fn advance_row(&mut self) {
        self.rows.swap(0, 1);
        self.rows[1].fill(WideRgb::default());
    }
}

/// Run error diffusion over a context.
///
/// Pixels are visited left to right, top to bottom. For each pixel the
/// accumulated error is added to the source sample, the nearest color of
/// the pixel's own palette is chosen, and the residual (source minus chosen
/// color, without the accumulated error) is spread with Floyd-Steinberg
/// weights:
///
/// ```text
///        X   7
///    3   5   1      (/16, integer division)
/// ```
///
/// The boundary checks match existing Koala converters:
/// the 3/16 share skips column 0 as a target and the 1/16 share is dropped
/// for the last two columns instead of only the last one. Integer division
/// truncates toward zero, so a few units of error per pixel are lost.
///
/// [`DitherContext::set`] is called exactly once per pixel, in visit order.
pub fn diffuse<C: DitherContext + ?Sized>(ctx: &mut C) {
    let (width, height) = (ctx.width(), ctx.height());
    let mut error_buf = ErrorBuffer::new(width);

    for y in 0..height {
        for x in 0..width {
            let sample = ctx.source(x, y).wide();
            let adjusted = sample + error_buf.get_accumulated(x);

            let palette = ctx.palette_at(x, y);
            let index = nearest(adjusted, palette);
            let residual = sample - palette[index].wide();

            if x + 1 < width {
                error_buf.add_error(x + 1, 0, residual.scale(7, 16));
            }
            if y + 1 < height {
                // x - 1 > 0: column 0 never receives the 3/16 share.
                if x >= 2 {
                    error_buf.add_error(x - 1, 1, residual.scale(3, 16));
                }
                // Bound checked against x + 2, not x + 1. Kept for output
                // compatibility; the second-to-last column loses its 1/16.
                if x + 2 < width {
                    error_buf.add_error(x + 1, 1, residual.scale(1, 16));
                }
                error_buf.add_error(x, 1, residual.scale(5, 16));
            }

            ctx.set(x, y, index);
        }
        error_buf.advance_row();
    }
}
