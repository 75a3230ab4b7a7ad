//! Inkmask Core: the data model under the glyph-masking pipeline
//!
//! Everything the rasterizer and compositor exchange lives here:
//!
//! - [`IntensityGrid`] - dense row-major grayscale buffer in `[0, 1]`
//! - [`GlyphSpec`] - what to rasterize and at what size
//! - [`error::GridError`] - grid construction contract violations
//!
//! There is no stored state anywhere in this workspace: every operation
//! is a pure transform from specs and grids to a fresh grid.

pub mod error;
pub mod grid;

pub use error::{GridError, Result};
pub use grid::{IntensityGrid, Mask, StippleField};

/// What fraction of the canvas height becomes the glyph point size when
/// the caller does not say otherwise.
pub const DEFAULT_SIZE_RATIO: f32 = 0.9;

/// A single-glyph rasterization request.
///
/// Immutable value consumed once per `rasterize` call. Dimensions are the
/// exact shape of the output grid; `size_ratio` (in `(0, 1]`) scales the
/// canvas height into a rendering point size.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSpec {
    pub height: usize,
    pub width: usize,
    pub character: char,
    pub size_ratio: f32,
}

impl GlyphSpec {
    /// A spec for the default glyph `'A'` at the default size ratio.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            character: 'A',
            size_ratio: DEFAULT_SIZE_RATIO,
        }
    }

    pub fn with_character(mut self, character: char) -> Self {
        self.character = character;
        self
    }

    pub fn with_size_ratio(mut self, size_ratio: f32) -> Self {
        self.size_ratio = size_ratio;
        self
    }

    /// Requested output shape as `(height, width)`.
    pub fn shape_request(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Rendering point size: `round(height * size_ratio)`.
    pub fn point_size(&self) -> u32 {
        (self.height as f32 * self.size_ratio).round() as u32
    }
}
