//! The terminal fallback face: an embedded 8x8 bitmap font.
//!
//! When every probed font file fails to load, rendering still has to
//! work. This face carries block glyphs for ASCII letters and digits as
//! plain bit rows and scales them to the requested point size with
//! nearest-neighbor sampling. Crude, but always available and fully
//! deterministic, which is exactly what a guaranteed fallback needs.

use crate::ink::InkBitmap;

/// Embedded bitmap face covering `A-Z`, `a-z` (drawn as uppercase) and
/// `0-9`. Everything else, whitespace included, has no ink.
pub struct BuiltinFace;

impl BuiltinFace {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &str {
        "builtin-8x8"
    }

    /// Scales the glyph's tight bit-cell to the requested point size.
    pub(crate) fn ink_bitmap(&self, character: char, point_size: u32) -> Option<InkBitmap> {
        let rows = glyph_rows(character.to_ascii_uppercase())?;

        // Tight bounds of the set bits within the 8x8 cell.
        let mut row_min = 8usize;
        let mut row_max = 0usize;
        let mut col_min = 8usize;
        let mut col_max = 0usize;
        let mut any = false;
        for (r, bits) in rows.iter().enumerate() {
            for c in 0..8 {
                if bits & (0x80 >> c) != 0 {
                    row_min = row_min.min(r);
                    row_max = row_max.max(r);
                    col_min = col_min.min(c);
                    col_max = col_max.max(c);
                    any = true;
                }
            }
        }
        if !any {
            return None;
        }

        let cell_h = row_max - row_min + 1;
        let cell_w = col_max - col_min + 1;

        // Scale so a full 8-row glyph spans roughly the point size.
        let scale = (point_size as f32 / 8.0).max(1.0);
        let out_h = ((cell_h as f32 * scale).round() as usize).max(1);
        let out_w = ((cell_w as f32 * scale).round() as usize).max(1);

        let mut coverage = vec![0u8; out_w * out_h];
        for (oy, out_row) in coverage.chunks_exact_mut(out_w).enumerate() {
            let sy = row_min + oy * cell_h / out_h;
            for (ox, cell) in out_row.iter_mut().enumerate() {
                let sx = col_min + ox * cell_w / out_w;
                if rows[sy] & (0x80 >> sx) != 0 {
                    *cell = 255;
                }
            }
        }

        Some(InkBitmap {
            width: out_w,
            height: out_h,
            coverage,
        })
    }
}

impl Default for BuiltinFace {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit rows for one 8x8 glyph cell, top to bottom, MSB = leftmost pixel.
fn glyph_rows(ch: char) -> Option<[u8; 8]> {
    let rows = match ch {
        'A' => [0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00],
        'B' => [0x7C, 0x66, 0x7C, 0x66, 0x66, 0x66, 0x7C, 0x00],
        'C' => [0x3C, 0x66, 0x60, 0x60, 0x60, 0x66, 0x3C, 0x00],
        'D' => [0x78, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0x78, 0x00],
        'E' => [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x7E, 0x00],
        'F' => [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x00],
        'G' => [0x3C, 0x66, 0x60, 0x6E, 0x66, 0x66, 0x3C, 0x00],
        'H' => [0x66, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00],
        'I' => [0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
        'J' => [0x1E, 0x0C, 0x0C, 0x0C, 0x6C, 0x6C, 0x38, 0x00],
        'K' => [0x66, 0x6C, 0x78, 0x70, 0x78, 0x6C, 0x66, 0x00],
        'L' => [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00],
        'M' => [0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x00],
        'N' => [0x66, 0x76, 0x7E, 0x7E, 0x6E, 0x66, 0x66, 0x00],
        'O' => [0x3C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00],
        'P' => [0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x00],
        'Q' => [0x3C, 0x66, 0x66, 0x66, 0x6A, 0x6C, 0x36, 0x00],
        'R' => [0x7C, 0x66, 0x66, 0x7C, 0x6C, 0x66, 0x66, 0x00],
        'S' => [0x3C, 0x66, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00],
        'T' => [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00],
        'U' => [0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00],
        'V' => [0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00],
        'W' => [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00],
        'X' => [0x66, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x66, 0x00],
        'Y' => [0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00],
        'Z' => [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x7E, 0x00],
        '0' => [0x3C, 0x66, 0x6E, 0x7E, 0x76, 0x66, 0x3C, 0x00],
        '1' => [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
        '2' => [0x3C, 0x66, 0x06, 0x0C, 0x18, 0x30, 0x7E, 0x00],
        '3' => [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00],
        '4' => [0x0C, 0x1C, 0x2C, 0x4C, 0x7E, 0x0C, 0x0C, 0x00],
        '5' => [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00],
        '6' => [0x3C, 0x66, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00],
        '7' => [0x7E, 0x06, 0x0C, 0x18, 0x18, 0x18, 0x18, 0x00],
        '8' => [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00],
        '9' => [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x66, 0x3C, 0x00],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_has_no_ink() {
        let face = BuiltinFace::new();
        assert!(face.ink_bitmap(' ', 32).is_none());
        assert!(face.ink_bitmap('\t', 32).is_none());
    }

    #[test]
    fn unmapped_characters_have_no_ink() {
        let face = BuiltinFace::new();
        assert!(face.ink_bitmap('@', 32).is_none());
        assert!(face.ink_bitmap('\u{00E9}', 32).is_none());
    }

    #[test]
    fn lowercase_maps_to_uppercase_glyph() {
        let face = BuiltinFace::new();
        let upper = face.ink_bitmap('A', 32).unwrap();
        let lower = face.ink_bitmap('a', 32).unwrap();
        assert_eq!(upper.coverage, lower.coverage);
    }

    #[test]
    fn ink_box_is_tight() {
        let face = BuiltinFace::new();
        let ink = face.ink_bitmap('I', 8).unwrap();
        // Every edge of the box must touch ink somewhere.
        let top_has_ink = (0..ink.width).any(|c| ink.coverage_at(0, c) != 0);
        let bottom_has_ink = (0..ink.width).any(|c| ink.coverage_at(ink.height - 1, c) != 0);
        let left_has_ink = (0..ink.height).any(|r| ink.coverage_at(r, 0) != 0);
        let right_has_ink = (0..ink.height).any(|r| ink.coverage_at(r, ink.width - 1) != 0);
        assert!(top_has_ink && bottom_has_ink && left_has_ink && right_has_ink);
    }

    #[test]
    fn scales_with_point_size() {
        let face = BuiltinFace::new();
        let small = face.ink_bitmap('H', 8).unwrap();
        let large = face.ink_bitmap('H', 64).unwrap();
        assert!(large.height > small.height);
        assert!(large.width > small.width);
        // Coverage is binary for the bitmap face.
        assert!(large.coverage.iter().all(|&v| v == 0 || v == 255));
    }
}
