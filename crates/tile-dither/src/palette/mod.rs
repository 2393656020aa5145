//! Master palette and nearest-color matching
//!
//! This module provides the fixed 16-color [`MasterPalette`], its presets,
//! the signed nearest-color search used by error diffusion, and the error
//! types for color parsing and palette validation.

mod error;
mod master;
mod nearest;

pub use error::{PaletteError, ParseColorError};
pub use master::{MasterPalette, COLOR_NAMES, PALETTE_SIZE};
pub use nearest::{distance, nearest};
