//! Koala Painter file format.
//!
//! A Koala file is a C64 PRG: a little-endian load address followed by
//! memory contents. For a 160x200 bitmap it holds 10003 bytes:
//!
//! | Offset | Size | Content |
//! |---|---|---|
//! | 0 | 2 | load address `$6000` (`00 60`) |
//! | 2 | 8000 | bitmap, 8 bytes per tile, tiles row-major |
//! | 8002 | 1000 | screen RAM, `slot1 << 4 \| slot2` per tile |
//! | 9002 | 1000 | color RAM, `slot3` per tile |
//! | 10002 | 1 | background color |
//!
//! Each bitmap byte is one 4-pixel row of a tile, two bits per pixel, the
//! leftmost pixel in the high bits.

use std::fmt;

use super::MulticolorBitmap;
use crate::api::DitherError;
use crate::grid::{Grid, IndexGrid};
use crate::palette::{MasterPalette, PALETTE_SIZE};
use crate::preprocess::{BITMAP_WIDTH, FRAME_HEIGHT};
use crate::tiles::{TileLayout, TilePalette, TILE_HEIGHT, TILE_WIDTH};

/// Load address written in front of the data.
pub const KOALA_LOAD_ADDRESS: u16 = 0x6000;

/// Size of a full-frame Koala file.
pub const KOALA_FILE_SIZE: usize = 2 + 8000 + 1000 + 1000 + 1;

/// Error type for reading Koala files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KoalaError {
    /// Fewer bytes than a full frame needs
    TooShort { len: usize },
    /// Load address other than `$6000`
    BadLoadAddress(u16),
    /// Background byte is not a color index
    ColorOutOfRange { offset: usize, value: u8 },
}

impl fmt::Display for KoalaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KoalaError::TooShort { len } => {
                write!(f, "file has {} bytes, need {}", len, KOALA_FILE_SIZE)
            }
            KoalaError::BadLoadAddress(addr) => {
                write!(f, "load address ${:04X}, expected ${:04X}", addr, KOALA_LOAD_ADDRESS)
            }
            KoalaError::ColorOutOfRange { offset, value } => {
                write!(f, "byte {} at offset {} is not a color index", value, offset)
            }
        }
    }
}

impl std::error::Error for KoalaError {}

/// Serialize `bitmap` into Koala layout.
///
/// Section sizes follow the tile count, so a 160x200 bitmap produces
/// exactly [`KOALA_FILE_SIZE`] bytes. Rows and columns of partial tiles
/// that fall outside the image are written as zero bits.
pub fn encode(bitmap: &MulticolorBitmap) -> Vec<u8> {
    let pixels = bitmap.pixels();
    let (width, height) = (pixels.width(), pixels.height());
    let layout = TileLayout::new(width, height);
    let tiles = layout.count();

    let mut out = Vec::with_capacity(2 + tiles * 10 + 1);
    out.extend_from_slice(&KOALA_LOAD_ADDRESS.to_le_bytes());

    for (col, row) in layout.tiles() {
        for cy in 0..TILE_HEIGHT {
            let y = row * TILE_HEIGHT + cy;
            let mut byte = 0u8;
            for cx in 0..TILE_WIDTH {
                let x = col * TILE_WIDTH + cx;
                byte <<= 2;
                if x < width && y < height {
                    byte |= *pixels.get(x, y) & 3;
                }
            }
            out.push(byte);
        }
    }

    let palettes = bitmap.palettes().as_slice();
    out.extend(palettes.iter().map(|p| {
        let [_, s1, s2, _] = p.slots();
        (s1 << 4) | (s2 & 0x0F)
    }));
    out.extend(palettes.iter().map(|p| p.slots()[3]));
    out.push(bitmap.background());
    out
}

/// Parse a full-frame Koala file.
///
/// Trailing bytes past [`KOALA_FILE_SIZE`] are ignored. Color RAM keeps
/// only its low nibble, as on the hardware.
///
/// # Errors
///
/// [`KoalaError`] (wrapped in [`DitherError::Koala`]) for a short file, a
/// load address other than `$6000`, or a background byte above 15.
pub fn decode(data: &[u8], master: &MasterPalette) -> Result<MulticolorBitmap, DitherError> {
    if data.len() < KOALA_FILE_SIZE {
        return Err(KoalaError::TooShort { len: data.len() }.into());
    }
    let address = u16::from_le_bytes([data[0], data[1]]);
    if address != KOALA_LOAD_ADDRESS {
        return Err(KoalaError::BadLoadAddress(address).into());
    }

    let layout = TileLayout::new(BITMAP_WIDTH, FRAME_HEIGHT);
    let tiles = layout.count();
    let bitmap_data = &data[2..2 + tiles * TILE_HEIGHT];
    let screen = &data[2 + tiles * TILE_HEIGHT..][..tiles];
    let color = &data[2 + tiles * (TILE_HEIGHT + 1)..][..tiles];
    let bg_offset = 2 + tiles * (TILE_HEIGHT + 2);
    let background = data[bg_offset];
    if background as usize >= PALETTE_SIZE {
        return Err(KoalaError::ColorOutOfRange {
            offset: bg_offset,
            value: background,
        }
        .into());
    }

    let palettes = Grid::from_fn(layout.columns(), layout.rows(), |col, row| {
        let i = row * layout.columns() + col;
        TilePalette([background, screen[i] >> 4, screen[i] & 0x0F, color[i] & 0x0F])
    });

    let pixels = IndexGrid::from_fn(BITMAP_WIDTH, FRAME_HEIGHT, |x, y| {
        let (col, row) = TileLayout::tile_of(x, y);
        let tile = row * layout.columns() + col;
        let byte = bitmap_data[tile * TILE_HEIGHT + y % TILE_HEIGHT];
        let shift = 2 * (TILE_WIDTH - 1 - x % TILE_WIDTH);
        (byte >> shift) & 3
    });

    Ok(MulticolorBitmap::new(pixels, palettes, background, master.clone()))
}
