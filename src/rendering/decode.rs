//! Image decoding into 16-bit samples
//!
//! Any format the `image` crate was built with (PNG, JPEG, GIF) is decoded
//! and widened to RGBA16. 8-bit channels expand by `v * 0x101`, so `0xFF`
//! becomes `0xFFFF` and palette colors survive exactly. Color channels are
//! premultiplied by alpha, so transparent areas convert as black.

use image::{DynamicImage, ImageBuffer, ImageReader, Rgba};
use std::io::{BufRead, Cursor, Seek};
use std::path::Path;
use tile_dither::{Grid, Rgba16, SampleImage};

use crate::error::ConvertError;

/// Load and decode an image file
pub fn load_image(path: &Path) -> Result<SampleImage, ConvertError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    decode_reader(reader)
}

/// Decode an image held in memory
pub fn load_image_from_bytes(data: &[u8]) -> Result<SampleImage, ConvertError> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
    decode_reader(reader)
}

fn decode_reader<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<SampleImage, ConvertError> {
    let image: DynamicImage = reader.decode()?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "Decoded image"
    );
    Ok(to_sample_image(&image.to_rgba16()))
}

/// Copy a straight-alpha RGBA16 buffer into a premultiplied [`SampleImage`]
pub fn to_sample_image(image: &ImageBuffer<Rgba<u16>, Vec<u16>>) -> SampleImage {
    Grid::from_fn(image.width() as usize, image.height() as usize, |x, y| {
        let [r, g, b, a] = image.get_pixel(x as u32, y as u32).0;
        Rgba16::new(premultiply(r, a), premultiply(g, a), premultiply(b, a), a)
    })
}

#[inline]
fn premultiply(channel: u16, alpha: u16) -> u16 {
    (u32::from(channel) * u32::from(alpha) / 0xFFFF) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use tile_dither::MasterPalette;

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_8bit_png_widens_exactly() {
        let mut image = RgbaImage::new(3, 2);
        image.put_pixel(0, 0, Rgba([0x8A, 0x41, 0x33, 0xFF]));
        image.put_pixel(2, 1, Rgba([0xFF, 0x00, 0x10, 0x80]));

        let samples = load_image_from_bytes(&png_bytes(&image)).unwrap();
        assert_eq!((samples.width(), samples.height()), (3, 2));
        assert_eq!(*samples.get(0, 0), Rgba16::from_u8(0x8A, 0x41, 0x33));
        assert_eq!(*samples.get(2, 1), Rgba16::new(0x8080, 0, 0x0810, 0x8080));
        assert_eq!(*samples.get(1, 0), Rgba16::new(0, 0, 0, 0));
    }

    #[test]
    fn test_transparent_white_converts_as_black() {
        let mut image = RgbaImage::from_pixel(2, 1, Rgba([0xFF, 0xFF, 0xFF, 0x00]));
        image.put_pixel(1, 0, Rgba([0xFF, 0xFF, 0xFF, 0xFF]));

        let samples = load_image_from_bytes(&png_bytes(&image)).unwrap();
        assert_eq!(*samples.get(0, 0), Rgba16::new(0, 0, 0, 0));
        assert_eq!(*samples.get(1, 0), Rgba16::from_u8(0xFF, 0xFF, 0xFF));

        let black = tile_dither::nearest(samples.get(0, 0).wide(), MasterPalette::ntsc().colors());
        assert_eq!(black, 0);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = load_image_from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_image(Path::new("/nonexistent/koalify/input.png")).unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}
