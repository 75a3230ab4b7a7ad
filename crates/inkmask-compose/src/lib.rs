//! Masked composition: a glyph mask decides which stipple cells survive.
//!
//! The operation is elementwise over two compatible grids. Each mask
//! cell is classified against a threshold: *dark* means strictly below,
//! so a cell exactly at the threshold is always *light*. What happens to
//! dark cells depends on [`MaskPolarity`]:
//!
//! - [`MaskPolarity::DarkErases`] (default): dark cells are forced to
//!   background 1.0, light cells pass the stipple value through.
//! - [`MaskPolarity::DarkKeeps`]: the inverse, for keeping stipples
//!   inside a glyph's ink (which rasterization renders dark).
//!
//! No cell depends on any other, so the row loop parallelizes freely;
//! the optional `parallel` feature runs it under rayon.

use inkmask_core::IntensityGrid;
use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub type Result<T> = std::result::Result<T, ComposeError>;

/// The single failure mode of composition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("shape mismatch: stipple is {stipple:?}, mask is {mask:?}")]
    ShapeMismatch {
        stipple: (usize, usize),
        mask: (usize, usize),
    },
}

/// Which side of the threshold gets erased to background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskPolarity {
    /// Dark mask cells become 1.0; light cells pass the stipple through.
    #[default]
    DarkErases,
    /// Dark mask cells pass the stipple through; light cells become 1.0.
    DarkKeeps,
}

/// Threshold and polarity for one composite call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeOptions {
    /// Mask cells strictly below this are dark. A cell exactly equal to
    /// the threshold is light, for either polarity.
    pub threshold: f32,
    pub polarity: MaskPolarity,
}

impl CompositeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_polarity(mut self, polarity: MaskPolarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl Default for CompositeOptions {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            polarity: MaskPolarity::DarkErases,
        }
    }
}

/// Applies a mask to a stipple field, cell by cell.
///
/// Stateless; the struct only carries the options so call sites read
/// like the rest of the pipeline.
#[derive(Debug, Clone, Default)]
pub struct MaskedCompositor {
    options: CompositeOptions,
}

impl MaskedCompositor {
    /// Default threshold 0.5, dark-erases polarity.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.options.threshold = threshold;
        self
    }

    pub fn with_polarity(mut self, polarity: MaskPolarity) -> Self {
        self.options.polarity = polarity;
        self
    }

    pub fn options(&self) -> &CompositeOptions {
        &self.options
    }

    /// Produces a fresh grid of the shared shape.
    ///
    /// Fails with [`ComposeError::ShapeMismatch`] before touching any
    /// cell when the shapes differ; there is never partial output.
    /// Output values come only from `{1.0}` and `stipple`'s own values.
    pub fn composite(
        &self,
        stipple: &IntensityGrid,
        mask: &IntensityGrid,
    ) -> Result<IntensityGrid> {
        composite(stipple, mask, &self.options)
    }
}

/// Free-function form of [`MaskedCompositor::composite`].
pub fn composite(
    stipple: &IntensityGrid,
    mask: &IntensityGrid,
    options: &CompositeOptions,
) -> Result<IntensityGrid> {
    if stipple.shape() != mask.shape() {
        return Err(ComposeError::ShapeMismatch {
            stipple: stipple.shape(),
            mask: mask.shape(),
        });
    }

    let (height, width) = stipple.shape();
    log::debug!(
        "composite {}x{} threshold={} polarity={:?}",
        height,
        width,
        options.threshold,
        options.polarity
    );

    let mut out = vec![0.0f32; height * width];

    #[cfg(feature = "parallel")]
    out.par_chunks_exact_mut(width)
        .zip(stipple.as_slice().par_chunks_exact(width))
        .zip(mask.as_slice().par_chunks_exact(width))
        .for_each(|((out_row, stipple_row), mask_row)| {
            composite_row(out_row, stipple_row, mask_row, options);
        });

    #[cfg(not(feature = "parallel"))]
    out.chunks_exact_mut(width)
        .zip(stipple.rows())
        .zip(mask.rows())
        .for_each(|((out_row, stipple_row), mask_row)| {
            composite_row(out_row, stipple_row, mask_row, options);
        });

    // Shape was validated above; length is height * width by construction.
    Ok(IntensityGrid::from_raw(height, width, out)
        .unwrap_or_else(|_| unreachable!("output buffer sized from validated shape")))
}

fn composite_row(out: &mut [f32], stipple: &[f32], mask: &[f32], options: &CompositeOptions) {
    for ((cell, &s), &m) in out.iter_mut().zip(stipple).zip(mask) {
        // Strict comparison: m == threshold is light.
        let dark = m < options.threshold;
        let erase = match options.polarity {
            MaskPolarity::DarkErases => dark,
            MaskPolarity::DarkKeeps => !dark,
        };
        *cell = if erase { 1.0 } else { s };
    }
}
