//! Test fixtures: synthetic source frames written to scratch directories.

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

pub const FRAME_WIDTH: u32 = 320;
pub const FRAME_HEIGHT: u32 = 200;

/// NTSC palette entries used by the fixtures
pub mod colors {
    pub const BLACK: [u8; 3] = [0x00, 0x00, 0x00];
    pub const WHITE: [u8; 3] = [0xFF, 0xFF, 0xFF];
    pub const BLUE: [u8; 3] = [0x40, 0x3A, 0x7B];
    pub const YELLOW: [u8; 3] = [0xBF, 0xD1, 0x0E];
    pub const LIGHT_GREEN: [u8; 3] = [0x55, 0xEC, 0x42];
}

/// A frame filled with one color
pub fn solid_frame(rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(FRAME_WIDTH, FRAME_HEIGHT, Rgba([rgb[0], rgb[1], rgb[2], 0xFF]))
}

/// A smooth two-axis gradient, the worst case for tile palettes
pub fn gradient_frame() -> RgbaImage {
    RgbaImage::from_fn(FRAME_WIDTH, FRAME_HEIGHT, |x, y| {
        Rgba([
            (x * 255 / (FRAME_WIDTH - 1)) as u8,
            (y * 255 / (FRAME_HEIGHT - 1)) as u8,
            ((x + y) % 256) as u8,
            0xFF,
        ])
    })
}

/// Vertical bars of the given colors, each `width` source pixels wide
pub fn bars_frame(bars: &[[u8; 3]], width: u32) -> RgbaImage {
    RgbaImage::from_fn(FRAME_WIDTH, FRAME_HEIGHT, |x, _| {
        let rgb = bars[(x / width) as usize % bars.len()];
        Rgba([rgb[0], rgb[1], rgb[2], 0xFF])
    })
}

/// Save `image` as `<dir>/<name>` and return the path
pub fn write_image(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).expect("failed to write fixture image");
    path
}
