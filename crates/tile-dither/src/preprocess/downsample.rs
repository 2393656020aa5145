//! Pixel-pair averaging.

use crate::api::DitherError;
use crate::grid::SampleImage;

/// Width of a source frame in pixels.
pub const SOURCE_WIDTH: usize = 320;

/// Width of the bitmap after halving.
pub const BITMAP_WIDTH: usize = SOURCE_WIDTH / 2;

/// Height of source frame and bitmap.
pub const FRAME_HEIGHT: usize = 200;

/// Average each pair of horizontally adjacent pixels.
///
/// Output pixel `(x, y)` is the per-channel truncated mean of source pixels
/// `(2x, y)` and `(2x + 1, y)`, alpha included, stored at 8-bit precision:
/// the low byte of each mean is dropped and the high byte replicated. Both
/// dithering passes read these narrowed values. An odd last column is
/// dropped.
pub fn halve_width(source: &SampleImage) -> SampleImage {
    SampleImage::from_fn(source.width() / 2, source.height(), |x, y| {
        source
            .get(2 * x, y)
            .average(*source.get(2 * x + 1, y))
            .to_8bit_precision()
    })
}

/// Halve a 320x200 frame to the 160x200 bitmap resolution.
///
/// # Errors
///
/// [`DitherError::InvalidDimensions`] unless the halved size is 160x200. A
/// 321-pixel-wide source passes and loses its last column.
pub fn downsample_frame(source: &SampleImage) -> Result<SampleImage, DitherError> {
    if source.width() / 2 != BITMAP_WIDTH || source.height() != FRAME_HEIGHT {
        return Err(DitherError::InvalidDimensions {
            width: source.width(),
            height: source.height(),
        });
    }
    Ok(halve_width(source))
}
