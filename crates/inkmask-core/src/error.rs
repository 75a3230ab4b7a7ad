//! Error types shared by the grid data model.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

/// Contract violations when constructing or combining grids.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid dimensions: {height}x{width}")]
    InvalidDimension { height: usize, width: usize },

    #[error("buffer length {actual} does not match {height}x{width} = {expected}")]
    LengthMismatch {
        height: usize,
        width: usize,
        expected: usize,
        actual: usize,
    },
}
