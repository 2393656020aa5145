//! Signed RGB triple for error arithmetic

use std::ops::{Add, AddAssign, Sub};

/// An RGB color with signed 32-bit channels and no range limit.
///
/// Produced by adding accumulated diffusion error to an [`Rgba16`](super::Rgba16)
/// sample. Values outside `0..=65535` are expected and meaningful: they let
/// error roll over across many pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WideRgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl WideRgb {
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `num / den` using integer division.
    ///
    /// Division truncates toward zero, so `scale(-7, 7, 16)` is `0` per
    /// channel rather than `-1`.
    #[inline]
    pub fn scale(self, num: i32, den: i32) -> Self {
        Self {
            r: self.r * num / den,
            g: self.g * num / den,
            b: self.b * num / den,
        }
    }
}

impl Add for WideRgb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for WideRgb {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Sub for WideRgb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}
