//! Glyph rasterization: one character becomes one grayscale grid.
//!
//! The rasterizer owns a resolved [`Typeface`] (a probed outline font or
//! the built-in bitmap fallback) and turns a [`GlyphSpec`] into an
//! [`IntensityGrid`] of exactly the requested shape:
//!
//! 1. allocate a 255-filled (background) canvas,
//! 2. render the glyph's tight ink bitmap at `round(height * size_ratio)`
//!    pixels,
//! 3. center the ink box with floor division and blit its coverage,
//! 4. normalize 0-255 to `[0, 1]`.
//!
//! Background cells stay exactly 1.0; ink approaches 0.0, with
//! anti-aliased edges in between for outline faces.
//!
//! ```no_run
//! use inkmask_core::GlyphSpec;
//! use inkmask_raster::GlyphRasterizer;
//!
//! let rasterizer = GlyphRasterizer::new();
//! let mask = rasterizer.rasterize(&GlyphSpec::new(250, 375))?;
//! assert_eq!(mask.shape(), (250, 375));
//! # Ok::<(), inkmask_raster::RasterError>(())
//! ```

pub mod builtin;
pub mod error;
pub mod ink;
pub mod outline;
pub mod probe;

pub use error::{RasterError, Result};
pub use probe::{FontProbe, Typeface};

use inkmask_core::{GlyphSpec, IntensityGrid};

/// Renders single glyphs onto centered background canvases.
///
/// Construction resolves the typeface once (the only IO this crate
/// does); `rasterize` itself is a pure function of the spec.
pub struct GlyphRasterizer {
    face: Typeface,
}

impl GlyphRasterizer {
    /// Resolves a face through the default platform probe.
    pub fn new() -> Self {
        Self::with_probe(&FontProbe::default())
    }

    /// Resolves a face through a caller-supplied probe.
    pub fn with_probe(probe: &FontProbe) -> Self {
        Self {
            face: probe.resolve(),
        }
    }

    /// Skips probing entirely and uses the built-in bitmap face.
    /// Deterministic on any machine, which tests rely on.
    pub fn builtin() -> Self {
        Self {
            face: Typeface::Builtin(builtin::BuiltinFace::new()),
        }
    }

    /// Which face the probe resolved.
    pub fn face_name(&self) -> &str {
        self.face.name()
    }

    /// Rasterizes `spec.character` centered on a background canvas of
    /// shape `(spec.height, spec.width)`.
    ///
    /// Characters the face cannot draw are not an error: the canvas
    /// comes back entirely background. The only failure is a
    /// non-positive dimension request.
    pub fn rasterize(&self, spec: &GlyphSpec) -> Result<IntensityGrid> {
        if spec.height == 0 || spec.width == 0 {
            return Err(RasterError::InvalidDimension {
                height: spec.height,
                width: spec.width,
            });
        }

        let mut canvas = vec![255u8; spec.height * spec.width];

        if let Some(ink) = self.face.ink_bitmap(spec.character, spec.point_size()) {
            // Center the ink box with floor division: odd differences
            // leave a 1px residual on the bottom/right, and oversized
            // ink goes negative and clips.
            let x0 = (spec.width as i64 - ink.width as i64).div_euclid(2);
            let y0 = (spec.height as i64 - ink.height as i64).div_euclid(2);
            log::debug!(
                "rasterize {:?}: ink {}x{} at ({}, {}) on {}x{} canvas",
                spec.character,
                ink.width,
                ink.height,
                x0,
                y0,
                spec.width,
                spec.height
            );

            for row in 0..ink.height {
                let py = y0 + row as i64;
                if py < 0 || py >= spec.height as i64 {
                    continue;
                }
                for col in 0..ink.width {
                    let px = x0 + col as i64;
                    if px < 0 || px >= spec.width as i64 {
                        continue;
                    }
                    let coverage = ink.coverage_at(row, col);
                    if coverage == 0 {
                        continue;
                    }
                    let cell = &mut canvas[py as usize * spec.width + px as usize];
                    // Ink darkens; overlapping coverage keeps the darkest.
                    *cell = (*cell).min(255 - coverage);
                }
            }
        }

        Ok(IntensityGrid::from_gray8(spec.height, spec.width, &canvas)?)
    }
}

impl Default for GlyphRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
