//! Color sample types
//!
//! This module keeps the two numeric views of a color apart:
//!
//! - **Rgba16**: an image sample as decoded, four unsigned 16-bit channels.
//!   Use it for source images and palette entries.
//! - **WideRgb**: a signed, unbounded RGB triple. Error diffusion pushes
//!   channel values below zero and above 65535; this type carries those
//!   values through the nearest-color search without clamping.
//!
//! # Example
//!
//! ```
//! use tile_dither::{Rgba16, WideRgb};
//!
//! let sample = Rgba16::from_u8(0x8A, 0x41, 0x33);
//! assert_eq!(sample.r, 0x8A8A);
//!
//! let shifted = sample.wide() + WideRgb::new(-40_000, 0, 70_000);
//! assert_eq!(shifted.r, 0x8A8A - 40_000);
//! ```

mod rgba16;
mod wide;

pub use rgba16::Rgba16;
pub use wide::WideRgb;
