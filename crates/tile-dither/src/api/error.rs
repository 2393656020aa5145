//! Unified error type for the tile-dither public API.
//!
//! [`DitherError`] wraps every error the crate can produce into a single
//! enum for `?` propagation in application code.

use crate::output::KoalaError;
use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the tile-dither public API.
///
/// # Example
///
/// ```
/// use tile_dither::{DitherError, MasterPalette};
///
/// fn load(name: &str) -> Result<MasterPalette, DitherError> {
///     Ok(MasterPalette::from_name(name)?)
/// }
///
/// assert!(load("pepto").is_ok());
/// assert!(matches!(load("vga"), Err(DitherError::Palette(_))));
/// ```
#[derive(Debug)]
pub enum DitherError {
    /// Source image is not a 320x200 frame
    InvalidDimensions { width: usize, height: usize },
    /// Fixed background outside the master palette
    BackgroundOutOfRange(usize),
    /// Palette validation error (empty, duplicate, length mismatch, or parse error)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Malformed Koala data
    Koala(KoalaError),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::InvalidDimensions { width, height } => {
                write!(f, "image to convert must be 320x200, got {}x{}", width, height)
            }
            DitherError::BackgroundOutOfRange(index) => {
                write!(f, "background index {} is not in 0..16", index)
            }
            DitherError::Palette(err) => write!(f, "palette error: {}", err),
            DitherError::ParseColor(err) => write!(f, "color parse error: {}", err),
            DitherError::Koala(err) => write!(f, "koala error: {}", err),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::Palette(err) => Some(err),
            DitherError::ParseColor(err) => Some(err),
            DitherError::Koala(err) => Some(err),
            DitherError::InvalidDimensions { .. } | DitherError::BackgroundOutOfRange(_) => None,
        }
    }
}

impl From<PaletteError> for DitherError {
    fn from(err: PaletteError) -> Self {
        DitherError::Palette(err)
    }
}

impl From<ParseColorError> for DitherError {
    fn from(err: ParseColorError) -> Self {
        DitherError::ParseColor(err)
    }
}

impl From<KoalaError> for DitherError {
    fn from(err: KoalaError) -> Self {
        DitherError::Koala(err)
    }
}
