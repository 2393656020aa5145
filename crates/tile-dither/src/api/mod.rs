//! Public API for the tile-dither crate.
//!
//! This module provides the high-level API: the [`MulticolorConverter`]
//! builder, its [`Conversion`] result and the [`DitherError`] unified
//! error type.

mod converter;
mod error;

pub use converter::{Conversion, MulticolorConverter};
pub use error::DitherError;
