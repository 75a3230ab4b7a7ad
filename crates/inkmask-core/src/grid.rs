//! Dense grayscale grids: the one data structure everything else speaks.
//!
//! An [`IntensityGrid`] is a row-major `height x width` buffer of `f32`
//! values in `[0.0, 1.0]`. The convention is photographic: 0.0 is fully
//! dark (ink, foreground), 1.0 is fully light (background). Rasterized
//! glyph masks and stipple fields are both just grids with different
//! interpretations, so they share this type.

use crate::error::{GridError, Result};

/// A glyph-silhouette mask. Dark cells are ink.
pub type Mask = IntensityGrid;

/// A stipple density field. Dark cells are stipple dots.
pub type StippleField = IntensityGrid;

/// Row-major grayscale raster with O(1) cell access.
///
/// Two grids are *compatible* when their `(height, width)` shapes are
/// equal; compatibility is checked at composite time, not encoded in the
/// type.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityGrid {
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl IntensityGrid {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(height: usize, width: usize, value: f32) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimension { height, width });
        }
        Ok(Self {
            height,
            width,
            data: vec![value; height * width],
        })
    }

    /// Creates a grid of pure background (all cells 1.0).
    pub fn background(height: usize, width: usize) -> Result<Self> {
        Self::filled(height, width, 1.0)
    }

    /// Builds a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(
        height: usize,
        width: usize,
        mut f: impl FnMut(usize, usize) -> f32,
    ) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimension { height, width });
        }
        let mut data = Vec::with_capacity(height * width);
        for r in 0..height {
            for c in 0..width {
                data.push(f(r, c));
            }
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Wraps an existing row-major buffer. The length must be exactly
    /// `height * width`.
    pub fn from_raw(height: usize, width: usize, data: Vec<f32>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimension { height, width });
        }
        let expected = height * width;
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                height,
                width,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Normalizes a single-channel 0-255 canvas into `[0, 1]` by dividing
    /// by 255. This is how rasterizer output enters the grid world.
    pub fn from_gray8(height: usize, width: usize, canvas: &[u8]) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimension { height, width });
        }
        let expected = height * width;
        if canvas.len() != expected {
            return Err(GridError::LengthMismatch {
                height,
                width,
                expected,
                actual: canvas.len(),
            });
        }
        let data = canvas.iter().map(|&v| f32::from(v) / 255.0).collect();
        Ok(Self {
            height,
            width,
            data,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Shape as `(height, width)`, the compatibility key.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Cell at `(row, col)`. Panics on out-of-bounds like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.width + col] = value;
    }

    /// The whole buffer in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// One row as a contiguous slice.
    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.width)
    }

    /// Consumes the grid, returning the raw row-major buffer.
    pub fn into_raw(self) -> Vec<f32> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_rejects_zero_dimensions() {
        assert_eq!(
            IntensityGrid::filled(0, 10, 0.5),
            Err(GridError::InvalidDimension {
                height: 0,
                width: 10
            })
        );
        assert_eq!(
            IntensityGrid::filled(10, 0, 0.5),
            Err(GridError::InvalidDimension {
                height: 10,
                width: 0
            })
        );
    }

    #[test]
    fn background_is_all_ones() {
        let grid = IntensityGrid::background(3, 4).unwrap();
        assert_eq!(grid.shape(), (3, 4));
        assert!(grid.as_slice().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn from_fn_is_row_major() {
        let grid = IntensityGrid::from_fn(2, 3, |r, c| (r * 3 + c) as f32).unwrap();
        assert_eq!(grid.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(grid.get(1, 2), 5.0);
    }

    #[test]
    fn from_raw_checks_length() {
        let err = IntensityGrid::from_raw(2, 2, vec![0.0; 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                height: 2,
                width: 2,
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn from_gray8_normalizes_by_255() {
        let grid = IntensityGrid::from_gray8(1, 3, &[0, 128, 255]).unwrap();
        assert_eq!(grid.get(0, 0), 0.0);
        assert!((grid.get(0, 1) - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(grid.get(0, 2), 1.0);
    }

    #[test]
    fn rows_yield_width_sized_slices() {
        let grid = IntensityGrid::from_fn(3, 2, |r, _| r as f32).unwrap();
        let rows: Vec<&[f32]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[2.0, 2.0]);
    }
}
