//! 16-bit RGBA image sample

use std::fmt;
use std::str::FromStr;

use super::wide::WideRgb;
use crate::palette::ParseColorError;

/// One image sample with four 16-bit channels.
///
/// 8-bit values are widened by replication (`v * 0x101`), so `0xFF` maps to
/// `0xFFFF` and `0x80` to `0x8080`. Alpha is carried along but never takes
/// part in color matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba16 {
    /// Red channel (0..=65535)
    pub r: u16,
    /// Green channel (0..=65535)
    pub g: u16,
    /// Blue channel (0..=65535)
    pub b: u16,
    /// Alpha channel (0..=65535)
    pub a: u16,
}

impl Rgba16 {
    /// Create a sample from raw 16-bit channels.
    #[inline]
    pub fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque sample from 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use tile_dither::Rgba16;
    /// let white = Rgba16::from_u8(255, 255, 255);
    /// assert_eq!(white, Rgba16::new(0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF));
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8([r, g, b, 0xFF])
    }

    /// Create a sample from an 8-bit `[R, G, B, A]` array.
    #[inline]
    pub fn from_rgba8(bytes: [u8; 4]) -> Self {
        Self {
            r: u16::from(bytes[0]) * 0x101,
            g: u16::from(bytes[1]) * 0x101,
            b: u16::from(bytes[2]) * 0x101,
            a: u16::from(bytes[3]) * 0x101,
        }
    }

    /// Narrow to an 8-bit `[R, G, B, A]` array by dropping the low byte.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r >> 8) as u8,
            (self.g >> 8) as u8,
            (self.b >> 8) as u8,
            (self.a >> 8) as u8,
        ]
    }

    /// Narrow to an 8-bit `[R, G, B]` array.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        let [r, g, b, _] = self.to_rgba8();
        [r, g, b]
    }

    /// Drop the low byte of every channel and widen again.
    ///
    /// The result is what an 8-bit RGBA buffer hands back after storing
    /// `self`.
    #[inline]
    pub fn to_8bit_precision(self) -> Self {
        Self::from_rgba8(self.to_rgba8())
    }

    /// Signed view of the color channels, alpha dropped.
    #[inline]
    pub fn wide(self) -> WideRgb {
        WideRgb::new(i32::from(self.r), i32::from(self.g), i32::from(self.b))
    }

    /// Channel-wise truncating average of two samples.
    #[inline]
    pub fn average(self, other: Self) -> Self {
        let avg = |a: u16, b: u16| ((u32::from(a) + u32::from(b)) / 2) as u16;
        Self {
            r: avg(self.r, other.r),
            g: avg(self.g, other.g),
            b: avg(self.b, other.b),
            a: avg(self.a, other.a),
        }
    }
}

impl fmt::Display for Rgba16 {
    /// Formats the 8-bit color as `#RRGGBB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for Rgba16 {
    type Err = ParseColorError;

    /// Parse an opaque color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// surrounding whitespace ignored.
    ///
    /// ```
    /// use tile_dither::Rgba16;
    ///
    /// let red: Rgba16 = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgba16::from_u8(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::NonAscii);
        }

        match s.len() {
            3 => {
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
