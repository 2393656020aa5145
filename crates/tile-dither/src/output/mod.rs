//! Output types for the conversion pipeline.
//!
//! [`MulticolorBitmap`] is the canonical result; [`koala`] serializes it to
//! and from Koala Painter files.

mod bitmap;
pub mod koala;

pub use bitmap::MulticolorBitmap;
pub use koala::{KoalaError, KOALA_FILE_SIZE, KOALA_LOAD_ADDRESS};
