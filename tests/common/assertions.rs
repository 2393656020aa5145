//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// Assert bytes form a full-frame Koala file
pub fn assert_koala(bytes: &[u8]) {
    assert_eq!(bytes.len(), 10003, "Koala file must be 10003 bytes");
    assert_eq!(&bytes[..2], &[0x00, 0x60], "Koala load address must be $6000");
    assert!(bytes[10002] < 16, "background byte {} is not a color", bytes[10002]);
    assert!(
        bytes[9002..10002].iter().all(|&b| b < 16),
        "color RAM must hold 4-bit values"
    );
}

/// Assert bytes are a PNG image
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Read a file that must exist
pub fn read_output(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|e| panic!("expected {} to exist: {e}", path.display()))
}

/// Decode a preview PNG and assert its size
pub fn assert_preview_size(bytes: &[u8], width: u32, height: u32) -> image::RgbaImage {
    assert_png(bytes);
    let image = image::load_from_memory(bytes)
        .expect("preview must decode")
        .to_rgba8();
    assert_eq!((image.width(), image.height()), (width, height));
    image
}
