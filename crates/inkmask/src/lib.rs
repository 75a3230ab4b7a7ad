//! Inkmask - stippled renderings confined to a glyph silhouette
//!
//! Two composable, stateless components:
//!
//! 1. [`GlyphRasterizer`] turns a single character into a grayscale
//!    [`IntensityGrid`] (ink near 0.0, background exactly 1.0), with the
//!    glyph centered on the canvas and fonts resolved through a probing
//!    chain that degrades to a built-in face instead of failing.
//! 2. [`MaskedCompositor`] takes that mask plus an externally produced
//!    stipple field of the same shape and erases cells on one side of a
//!    threshold, leaving a stipple pattern shaped like the glyph.
//!
//! ```no_run
//! use inkmask::prelude::*;
//!
//! let rasterizer = GlyphRasterizer::new();
//! let mask = rasterizer.rasterize(&GlyphSpec::new(250, 375))?;
//!
//! // Stipple field comes from an external point-placement algorithm.
//! let stipple = IntensityGrid::filled(250, 375, 0.0)?;
//!
//! // Keep stipples where the glyph drew ink.
//! let lettered = MaskedCompositor::new()
//!     .with_polarity(MaskPolarity::DarkKeeps)
//!     .composite(&stipple, &mask)?;
//! # Ok::<(), inkmask::InkmaskError>(())
//! ```
//!
//! # Feature flags
//!
//! - `parallel`: run the elementwise composite across rows with rayon.

pub use inkmask_compose as compose;
pub use inkmask_raster as raster;

pub use inkmask_compose::{composite, CompositeOptions, ComposeError, MaskPolarity, MaskedCompositor};
pub use inkmask_core::{GlyphSpec, GridError, IntensityGrid, Mask, StippleField};
pub use inkmask_raster::{FontProbe, GlyphRasterizer, RasterError};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InkmaskError>;

/// Unified error for callers driving the whole pipeline with `?`.
#[derive(Debug, Error)]
pub enum InkmaskError {
    #[error("rasterization failed: {0}")]
    Raster(#[from] RasterError),

    #[error("composition failed: {0}")]
    Compose(#[from] ComposeError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

/// Common imports for typical usage.
pub mod prelude {
    pub use inkmask_compose::{CompositeOptions, MaskPolarity, MaskedCompositor};
    pub use inkmask_core::{GlyphSpec, IntensityGrid, Mask, StippleField};
    pub use inkmask_raster::{FontProbe, GlyphRasterizer};

    pub use crate::{InkmaskError, Result};
}
