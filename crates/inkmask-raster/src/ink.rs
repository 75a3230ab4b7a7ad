//! Tight coverage bitmaps produced by a typeface.

/// A glyph's ink, cropped to its bounding box.
///
/// Row-major, top-down coverage values: 0 = no ink, 255 = full ink.
/// The dimensions are exactly the ink extents, which is what the
/// rasterizer centers inside the requested canvas.
#[derive(Debug, Clone)]
pub struct InkBitmap {
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

impl InkBitmap {
    /// Coverage at `(row, col)` within the ink box.
    pub fn coverage_at(&self, row: usize, col: usize) -> u8 {
        self.coverage[row * self.width + col]
    }
}
