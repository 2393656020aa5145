//! The 16-color VIC-II master palette.
//!
//! Every tile palette and the shared background are indices into this set.
//! The hardware colors are fixed, but how they look depends on the video
//! path, so several measured presets are provided alongside user-defined
//! palettes.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::Rgba16;

/// Number of entries in the hardware palette.
pub const PALETTE_SIZE: usize = 16;

/// The VIC-II on an NTSC HDTV. It was based on S-Video, so not every color
/// can be exact.
const NTSC: [[u8; 3]; PALETTE_SIZE] = [
    [0x00, 0x00, 0x00],
    [0xFF, 0xFF, 0xFF],
    [0x8A, 0x41, 0x33],
    [0x2B, 0xBC, 0xD8],
    [0x95, 0x49, 0x9E],
    [0x39, 0x9D, 0x2C],
    [0x40, 0x3A, 0x7B],
    [0xBF, 0xD1, 0x0E],
    [0x95, 0x56, 0x21],
    [0x53, 0x40, 0x09],
    [0xDC, 0x68, 0x52],
    [0x50, 0x50, 0x50],
    [0x78, 0x78, 0x78],
    [0x55, 0xEC, 0x42],
    [0x78, 0x6C, 0xE7],
    [0x9F, 0x9F, 0x9F],
];

/// Philip "Pepto" Timmermann's PAL measurements.
const PEPTO: [[u8; 3]; PALETTE_SIZE] = [
    [0x00, 0x00, 0x00],
    [0xFF, 0xFF, 0xFF],
    [0x68, 0x37, 0x2B],
    [0x70, 0xA4, 0xB2],
    [0x6F, 0x3D, 0x86],
    [0x58, 0x8D, 0x43],
    [0x35, 0x28, 0x79],
    [0xB8, 0xC7, 0x6F],
    [0x6F, 0x4F, 0x25],
    [0x43, 0x39, 0x00],
    [0x9A, 0x67, 0x59],
    [0x44, 0x44, 0x44],
    [0x6C, 0x6C, 0x6C],
    [0x9A, 0xD2, 0x84],
    [0x6C, 0x5E, 0xB5],
    [0x95, 0x95, 0x95],
];

/// Colodore, a later PAL model.
const COLODORE: [[u8; 3]; PALETTE_SIZE] = [
    [0x00, 0x00, 0x00],
    [0xFF, 0xFF, 0xFF],
    [0x81, 0x33, 0x38],
    [0x75, 0xCE, 0xC8],
    [0x8E, 0x3C, 0x97],
    [0x56, 0xAC, 0x4D],
    [0x2E, 0x2C, 0x9B],
    [0xED, 0xF1, 0x71],
    [0x8E, 0x50, 0x29],
    [0x55, 0x38, 0x00],
    [0xC4, 0x6C, 0x71],
    [0x4A, 0x4A, 0x4A],
    [0x7B, 0x7B, 0x7B],
    [0xA9, 0xFF, 0x9F],
    [0x70, 0x6D, 0xEB],
    [0xB2, 0xB2, 0xB2],
];

/// Conventional names of the hardware colors, by index.
pub const COLOR_NAMES: [&str; PALETTE_SIZE] = [
    "black",
    "white",
    "red",
    "cyan",
    "purple",
    "green",
    "blue",
    "yellow",
    "orange",
    "brown",
    "light red",
    "dark grey",
    "grey",
    "light green",
    "light blue",
    "light grey",
];

/// An ordered set of exactly 16 distinct colors.
///
/// # Example
///
/// ```
/// use tile_dither::{MasterPalette, Rgba16};
///
/// let palette = MasterPalette::ntsc();
/// assert_eq!(palette.get(1), Rgba16::from_u8(255, 255, 255));
/// assert_eq!(palette.index_of(Rgba16::from_u8(0x2B, 0xBC, 0xD8)), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterPalette {
    colors: [Rgba16; PALETTE_SIZE],
}

impl MasterPalette {
    /// Names accepted by [`MasterPalette::from_name`].
    pub const PRESETS: [&'static str; 3] = ["ntsc", "pepto", "colodore"];

    /// Build a palette from 16 colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] for an empty slice
    /// - [`PaletteError::WrongLength`] unless exactly 16 colors are given
    /// - [`PaletteError::DuplicateColor`] if an RGB value repeats (Koala
    ///   files store indices, so entries must be distinguishable)
    pub fn new(colors: &[Rgba16]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        let colors: [Rgba16; PALETTE_SIZE] = colors
            .try_into()
            .map_err(|_| PaletteError::WrongLength {
                actual: colors.len(),
            })?;

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(color.wide()) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self { colors })
    }

    /// Build a palette from hex strings such as `"#8A4133"`.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| s.as_ref().parse::<Rgba16>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&parsed)
    }

    /// Look up a preset by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, PaletteError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ntsc" => Ok(Self::ntsc()),
            "pepto" => Ok(Self::pepto()),
            "colodore" => Ok(Self::colodore()),
            _ => Err(PaletteError::UnknownPreset(name.to_string())),
        }
    }

    /// The VIC-II as seen on an NTSC HDTV. This is the default.
    pub fn ntsc() -> Self {
        Self::from_table(&NTSC)
    }

    /// Pepto's PAL palette.
    pub fn pepto() -> Self {
        Self::from_table(&PEPTO)
    }

    /// The Colodore PAL palette.
    pub fn colodore() -> Self {
        Self::from_table(&COLODORE)
    }

    fn from_table(table: &[[u8; 3]; PALETTE_SIZE]) -> Self {
        Self {
            colors: table.map(|[r, g, b]| Rgba16::from_u8(r, g, b)),
        }
    }

    /// All 16 colors in hardware order.
    #[inline]
    pub fn colors(&self) -> &[Rgba16] {
        &self.colors
    }

    /// Color at a hardware index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`.
    #[inline]
    pub fn get(&self, index: usize) -> Rgba16 {
        self.colors[index]
    }

    /// Hardware index of an exact color (alpha ignored).
    pub fn index_of(&self, color: Rgba16) -> Option<usize> {
        self.colors.iter().position(|c| c.wide() == color.wide())
    }

    /// Always 16.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for MasterPalette {
    fn default() -> Self {
        Self::ntsc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for name in MasterPalette::PRESETS {
            let palette = MasterPalette::from_name(name).unwrap();
            assert!(MasterPalette::new(palette.colors()).is_ok(), "{name}");
            assert_eq!(palette.get(0), Rgba16::from_u8(0, 0, 0), "{name}");
            assert_eq!(palette.get(1), Rgba16::from_u8(255, 255, 255), "{name}");
        }
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(MasterPalette::from_name("PePto").unwrap(), MasterPalette::pepto());
        assert_eq!(
            MasterPalette::from_name("vice"),
            Err(PaletteError::UnknownPreset("vice".to_string()))
        );
    }

    #[test]
    fn test_default_is_ntsc() {
        assert_eq!(MasterPalette::default(), MasterPalette::ntsc());
        assert_eq!(MasterPalette::ntsc().get(2), Rgba16::from_u8(0x8A, 0x41, 0x33));
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let colors = vec![Rgba16::from_u8(0, 0, 0); 4];
        assert_eq!(
            MasterPalette::new(&colors),
            Err(PaletteError::WrongLength { actual: 4 })
        );
        assert_eq!(MasterPalette::new(&[]), Err(PaletteError::EmptyPalette));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let mut colors = MasterPalette::ntsc().colors().to_vec();
        colors[12] = colors[11];
        assert_eq!(
            MasterPalette::new(&colors),
            Err(PaletteError::DuplicateColor { index: 12 })
        );
    }

    #[test]
    fn test_duplicates_compare_rgb_only() {
        let mut colors = MasterPalette::ntsc().colors().to_vec();
        colors[5] = Rgba16 { a: 0, ..colors[3] };
        assert_eq!(
            MasterPalette::new(&colors),
            Err(PaletteError::DuplicateColor { index: 5 })
        );
    }

    #[test]
    fn test_from_hex() {
        let hex: Vec<String> = MasterPalette::colodore()
            .colors()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(MasterPalette::from_hex(&hex).unwrap(), MasterPalette::colodore());

        let mut bad = hex.clone();
        bad[3] = "#12345".to_string();
        assert!(matches!(
            MasterPalette::from_hex(&bad),
            Err(PaletteError::ParseColor(_))
        ));
    }

    #[test]
    fn test_index_of() {
        let palette = MasterPalette::ntsc();
        for i in 0..PALETTE_SIZE {
            assert_eq!(palette.index_of(palette.get(i)), Some(i));
        }
        assert_eq!(palette.index_of(Rgba16::from_u8(1, 2, 3)), None);
    }
}
