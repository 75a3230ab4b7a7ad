//! Rasterization errors.

use inkmask_core::GridError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RasterError>;

/// Contract violations surfaced by [`crate::GlyphRasterizer`].
///
/// Font resolution is deliberately absent here: an unloadable candidate
/// font is part of the designed fallback chain, never an error.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid dimensions: {height}x{width}")]
    InvalidDimension { height: usize, width: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}
