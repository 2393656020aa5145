//! Preview PNG encoding
//!
//! Previews are written as 4-bit indexed PNGs whose PLTE is the master
//! palette, so every preview pixel is stored as its hardware color number.

use std::io::Cursor;
use tile_dither::MulticolorBitmap;

use crate::error::ConvertError;

/// PNG output settings
#[derive(Debug, Clone, Copy)]
pub struct PngOptions {
    /// Re-compress with oxipng (zopfli + adaptive filter selection)
    pub optimize: bool,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self { optimize: true }
    }
}

/// Encode the double-width preview of `bitmap` as a PNG
pub fn encode_preview(bitmap: &MulticolorBitmap, options: PngOptions) -> Result<Vec<u8>, ConvertError> {
    let indices = bitmap.to_preview_indices();
    let width = indices.width() as u32;
    let height = indices.height() as u32;

    let plte: Vec<u8> = bitmap
        .master()
        .colors()
        .iter()
        .flat_map(|c| c.to_rgb8())
        .collect();
    let packed = pack_nibbles(indices.as_slice(), indices.width());

    // Fast settings; oxipng re-compresses below
    let png_bytes = encode_png(width, height, &plte, &packed)?;
    if !options.optimize {
        return Ok(png_bytes);
    }

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or_else(|e| {
        tracing::warn!(%e, "oxipng failed, keeping unoptimized preview");
        png_bytes
    });
    Ok(optimized)
}

/// Encode packed 4-bit indexed pixel data as a PNG.
fn encode_png(width: u32, height: u32, plte: &[u8], packed: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Four);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack color numbers two per byte, high nibble first. Each row starts on a
/// byte boundary; an odd row ends in a half-filled byte.
fn pack_nibbles(indices: &[u8], width: usize) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }
    indices
        .chunks(width)
        .flat_map(|row| row.chunks(2))
        .map(|pair| {
            let high = pair[0] & 0x0F;
            let low = pair.get(1).map_or(0, |v| v & 0x0F);
            (high << 4) | low
        })
        .collect()
}
