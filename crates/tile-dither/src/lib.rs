//! tile-dither: C64 multicolor bitmap conversion
//!
//! This library turns full-color 320x200 images into Commodore 64
//! multicolor bitmaps. The hardware shows 160 double-wide pixels per row,
//! split into 4x8 tiles; each tile may use four of the 16 VIC-II colors,
//! and one of those four (the background) is shared by the whole screen.
//!
//! # Quick Start
//!
//! The [`MulticolorConverter`] builder is the primary entry point:
//!
//! ```
//! use tile_dither::output::koala;
//! use tile_dither::{Grid, MasterPalette, MulticolorConverter, Rgba16};
//!
//! let frame = Grid::from_fn(320, 200, |x, y| {
//!     Rgba16::from_u8(x as u8, y as u8, 0x80)
//! });
//!
//! let result = MulticolorConverter::new(MasterPalette::ntsc())
//!     .convert(&frame)
//!     .unwrap();
//!
//! let bytes = koala::encode(&result.bitmap);
//! assert_eq!(bytes.len(), 10003);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! 320x200 Rgba16 frame
//!     |
//!     v
//! halve_width             (average horizontal pixel pairs)
//!     |
//!     v
//! quantize_to_palette     (error diffusion, all 16 colors everywhere)
//!     |
//!     v
//! choose_background       (fewest pixels forced off their color)
//! assign_palettes         (background + top three per tile)
//!     |
//!     v
//! diffuse(TileContext)    (error diffusion again, 4 colors per tile)
//!     |
//!     v
//! MulticolorBitmap  ----> koala::encode / to_rgba_preview
//! ```
//!
//! # Color Matching
//!
//! Samples are 16-bit RGB, widened from 8 bits by `v * 0x101`. Halving
//! stores each averaged pair back at 8-bit precision, so both dithering
//! passes see the same values an 8-bit frame buffer would hold. Error
//! diffusion works on signed [`WideRgb`] values that are never clamped, and
//! [`nearest`] compares squared halved channel differences. Together these
//! reproduce the Koala output of existing converters byte for byte; the one
//! deliberate difference is that distances are summed in 64 bits and never
//! wrap, which only matters for error-adjusted channels far outside
//! `0..=65535`.

pub mod api;
pub mod color;
pub mod dither;
pub mod grid;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod tiles;


pub use api::{Conversion, DitherError, MulticolorConverter};
pub use color::{Rgba16, WideRgb};
pub use dither::{diffuse, quantize_to_palette, DitherContext};
pub use grid::{Grid, IndexGrid, SampleImage};
pub use output::{KoalaError, MulticolorBitmap};
pub use palette::{nearest, MasterPalette, PaletteError, ParseColorError};
