use thiserror::Error;
use tile_dither::{DitherError, MasterPalette};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Conversion error: {0}")]
    Dither(#[from] DitherError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown palette '{0}' (known: {presets})", presets = MasterPalette::PRESETS.join(", "))]
    UnknownPalette(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
