pub mod decode;
pub mod preview_png;

pub use decode::{load_image, load_image_from_bytes, to_sample_image};
pub use preview_png::{encode_preview, PngOptions};
