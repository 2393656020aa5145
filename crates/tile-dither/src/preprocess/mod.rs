//! Preparing source images for the multicolor pipeline.
//!
//! Multicolor mode shows every pixel twice as wide as it is tall, so a
//! 320x200 picture carries only 160 distinct columns. [`downsample_frame`]
//! averages each horizontal pixel pair into one sample before anything is
//! quantized; the preview renderer doubles them again for display.

mod downsample;

pub use downsample::{downsample_frame, halve_width, BITMAP_WIDTH, FRAME_HEIGHT, SOURCE_WIDTH};
