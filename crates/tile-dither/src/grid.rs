//! Row-major 2D buffers.
//!
//! [`Grid`] backs every image-shaped value in the crate: source samples,
//! palette index grids, and per-tile palette arrays.

use crate::color::Rgba16;

/// A `width * height` grid stored row-major in one `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Source image samples.
pub type SampleImage = Grid<Rgba16>;

/// One small palette index per pixel.
pub type IndexGrid = Grid<u8>;

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid of default values.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T> Grid<T> {
    /// Wrap row-major cells.
    ///
    /// Returns `None` when `cells.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Option<Self> {
        (cells.len() == width * height).then_some(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &T {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        &self.cells[y * self.width + x]
    }

    /// Overwrite the cell at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.cells[y * self.width + x] = value;
    }

    /// All cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        self.cells.chunks(self.width.max(1))
    }

    /// Transform every cell, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let grid = Grid::from_fn(3, 2, |x, y| (y * 10 + x) as u8);
        assert_eq!(grid.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(*grid.get(2, 1), 12);

        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows, vec![&[0u8, 1, 2][..], &[10, 11, 12][..]]);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid: IndexGrid = Grid::new(4, 4);
        grid.set(3, 2, 9);
        assert_eq!(*grid.get(3, 2), 9);
        assert_eq!(grid.as_slice().iter().filter(|&&v| v != 0).count(), 1);
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Grid::from_vec(2, 2, vec![0u8; 4]).is_some());
        assert!(Grid::from_vec(2, 2, vec![0u8; 5]).is_none());
    }

    #[test]
    fn test_map_keeps_shape() {
        let grid = Grid::filled(5, 3, 2u8);
        let doubled = grid.map(|&v| u32::from(v) * 2);
        assert_eq!(doubled.width(), 5);
        assert_eq!(doubled.height(), 3);
        assert!(doubled.as_slice().iter().all(|&v| v == 4));
    }
}
