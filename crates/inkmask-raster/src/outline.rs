//! Outline faces: real fonts rendered through skrifa and zeno.
//!
//! The flow per glyph: map the character through the font's cmap, draw
//! the outline into a path builder, measure the tight bounds, and let
//! zeno scan-convert the path into an anti-aliased coverage mask sized
//! to exactly those bounds. Font coordinates are y-up, so the finished
//! rows get flipped before anyone else sees them.

use std::path::Path;

use kurbo::Shape;
use skrifa::{instance::LocationRef, outline::DrawSettings, MetadataProvider};
use thiserror::Error;
use zeno::Mask as ScanMask;

use crate::ink::InkBitmap;

/// Why a candidate font file was rejected by the probe.
#[derive(Debug, Error)]
pub enum FaceLoadError {
    #[error("font file not found: {0}")]
    FileNotFound(String),

    #[error("invalid font data")]
    InvalidData,
}

/// An outline font held in memory, validated at load time.
pub struct OutlineFace {
    data: Vec<u8>,
    name: String,
}

impl OutlineFace {
    /// Reads and validates a font file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FaceLoadError> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|_| FaceLoadError::FileNotFound(path.display().to_string()))?;
        Self::from_data(data, path.display().to_string())
    }

    /// Validates raw font bytes by attempting to parse them.
    pub fn from_data(data: Vec<u8>, name: String) -> Result<Self, FaceLoadError> {
        read_fonts::FontRef::new(&data).map_err(|_| FaceLoadError::InvalidData)?;
        Ok(Self { data, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the tight ink bitmap for `character` at `point_size`.
    ///
    /// Returns `None` for characters the font does not map and for
    /// glyphs with no ink (whitespace); callers treat both as "draw
    /// nothing".
    pub(crate) fn ink_bitmap(&self, character: char, point_size: u32) -> Option<InkBitmap> {
        let font = skrifa::FontRef::new(&self.data).ok()?;
        let glyph_id = font.charmap().map(character)?;
        let glyph = font.outline_glyphs().get(glyph_id)?;

        let mut pen = InkPathPen::new();
        let size = skrifa::instance::Size::new(point_size as f32);
        let settings = DrawSettings::unhinted(size, LocationRef::default());
        glyph.draw(settings, &mut pen).ok()?;
        let (path, bounds_path) = pen.finish();

        let bbox = bounds_path.bounding_box();
        if bbox.x0.is_infinite()
            || bbox.y0.is_infinite()
            || bbox.x1.is_infinite()
            || bbox.y1.is_infinite()
        {
            return None;
        }

        let min_x = bbox.x0 as f32;
        let min_y = bbox.y0 as f32;
        let max_x = bbox.x1 as f32;
        let max_y = bbox.y1 as f32;
        if max_x - min_x == 0.0 || max_y - min_y == 0.0 {
            return None;
        }

        let width = ((max_x - min_x).ceil() as u32).max(1);
        let height = ((max_y - min_y).ceil() as u32).max(1);

        let mut coverage = vec![0u8; (width * height) as usize];
        let _placement = ScanMask::new(path.as_str())
            .size(width, height)
            .offset((-min_x as i32, -min_y as i32))
            .render_into(&mut coverage, None);

        // Font coordinates are y-up, bitmaps are y-down.
        for y in 0..(height / 2) {
            let top_row = y as usize * width as usize;
            let bottom_row = (height - 1 - y) as usize * width as usize;
            for x in 0..width as usize {
                coverage.swap(top_row + x, bottom_row + x);
            }
        }

        log::debug!(
            "outline face: glyph {:?} ink box {}x{} at {}pt",
            character,
            width,
            height,
            point_size
        );

        Some(InkBitmap {
            width: width as usize,
            height: height as usize,
            coverage,
        })
    }
}

/// Outline pen collecting the path twice: an SVG string for zeno's
/// rasterizer and a kurbo path for exact bounds.
struct InkPathPen {
    commands: Vec<String>,
    bounds_path: kurbo::BezPath,
}

impl InkPathPen {
    fn new() -> Self {
        Self {
            commands: Vec::new(),
            bounds_path: kurbo::BezPath::new(),
        }
    }

    fn finish(self) -> (String, kurbo::BezPath) {
        (self.commands.join(" "), self.bounds_path)
    }
}

impl skrifa::outline::OutlinePen for InkPathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(format!("M {:.2},{:.2}", x, y));
        self.bounds_path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(format!("L {:.2},{:.2}", x, y));
        self.bounds_path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.commands
            .push(format!("Q {:.2},{:.2} {:.2},{:.2}", cx, cy, x, y));
        self.bounds_path
            .quad_to((cx as f64, cy as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.commands.push(format!(
            "C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            cx0, cy0, cx1, cy1, x, y
        ));
        self.bounds_path.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.commands.push("Z".to_string());
        self.bounds_path.close_path();
    }
}
