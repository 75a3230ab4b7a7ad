//! Integration tests for the glyph rasterizer.
//!
//! Everything here runs against the built-in face so results do not
//! depend on which fonts happen to be installed; the probed path is
//! exercised only through its never-fails contract.

use inkmask_core::GlyphSpec;
use inkmask_raster::{FontProbe, GlyphRasterizer};

/// Ink bounding box of a grid: cells strictly below the 0.5 ink
/// threshold. Returns (row_min, row_max, col_min, col_max).
fn ink_bbox(grid: &inkmask_core::IntensityGrid) -> Option<(usize, usize, usize, usize)> {
    let mut bbox: Option<(usize, usize, usize, usize)> = None;
    for r in 0..grid.height() {
        for c in 0..grid.width() {
            if grid.get(r, c) < 0.5 {
                let (r0, r1, c0, c1) = bbox.unwrap_or((r, r, c, c));
                bbox = Some((r0.min(r), r1.max(r), c0.min(c), c1.max(c)));
            }
        }
    }
    bbox
}

#[test]
fn output_shape_matches_request() {
    let rasterizer = GlyphRasterizer::builtin();
    for (h, w) in [(1, 1), (7, 13), (64, 64), (250, 375)] {
        let grid = rasterizer.rasterize(&GlyphSpec::new(h, w)).unwrap();
        assert_eq!(grid.shape(), (h, w));
    }
}

#[test]
fn all_values_within_unit_interval() {
    let rasterizer = GlyphRasterizer::builtin();
    let grid = rasterizer
        .rasterize(&GlyphSpec::new(40, 40).with_character('B'))
        .unwrap();
    assert!(grid.as_slice().iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn glyph_actually_draws_ink() {
    let rasterizer = GlyphRasterizer::builtin();
    let grid = rasterizer.rasterize(&GlyphSpec::new(64, 64)).unwrap();
    assert!(grid.as_slice().iter().any(|&v| v < 0.5));
}

#[test]
fn whitespace_leaves_canvas_untouched() {
    let rasterizer = GlyphRasterizer::builtin();
    for ch in [' ', '\t', '\n'] {
        let grid = rasterizer
            .rasterize(&GlyphSpec::new(16, 16).with_character(ch))
            .unwrap();
        assert!(
            grid.as_slice().iter().all(|&v| v == 1.0),
            "character {ch:?} should draw nothing"
        );
    }
}

#[test]
fn unmapped_character_leaves_canvas_untouched() {
    let rasterizer = GlyphRasterizer::builtin();
    let grid = rasterizer
        .rasterize(&GlyphSpec::new(16, 16).with_character('\u{2603}'))
        .unwrap();
    assert!(grid.as_slice().iter().all(|&v| v == 1.0));
}

#[test]
fn background_cells_are_exactly_one() {
    let rasterizer = GlyphRasterizer::builtin();
    let grid = rasterizer.rasterize(&GlyphSpec::new(64, 64)).unwrap();
    // Corners sit well outside any centered glyph.
    assert_eq!(grid.get(0, 0), 1.0);
    assert_eq!(grid.get(0, 63), 1.0);
    assert_eq!(grid.get(63, 0), 1.0);
    assert_eq!(grid.get(63, 63), 1.0);
}

#[test]
fn symmetric_glyph_is_centered_within_one_pixel() {
    let rasterizer = GlyphRasterizer::builtin();
    for size in [32usize, 33, 64, 101] {
        let grid = rasterizer
            .rasterize(&GlyphSpec::new(size, size).with_character('I'))
            .unwrap();
        let (r0, r1, c0, c1) = ink_bbox(&grid).unwrap();
        let canvas_center = (size as f64 - 1.0) / 2.0;
        let ink_center_r = (r0 + r1) as f64 / 2.0;
        let ink_center_c = (c0 + c1) as f64 / 2.0;
        assert!(
            (ink_center_r - canvas_center).abs() <= 1.0,
            "row center off by more than 1px on {size}x{size}"
        );
        assert!(
            (ink_center_c - canvas_center).abs() <= 1.0,
            "col center off by more than 1px on {size}x{size}"
        );
    }
}

#[test]
fn rasterization_is_deterministic() {
    let rasterizer = GlyphRasterizer::builtin();
    let spec = GlyphSpec::new(48, 48).with_character('Q');
    let a = rasterizer.rasterize(&spec).unwrap();
    let b = rasterizer.rasterize(&spec).unwrap();
    assert_eq!(a, b);
}

#[test]
fn probe_exhaustion_still_renders() {
    // The fallback chain must terminate in a working face, never an error.
    let probe = FontProbe::new([std::path::PathBuf::from("/nope/missing-bold.ttf")]);
    let rasterizer = GlyphRasterizer::with_probe(&probe);
    assert_eq!(rasterizer.face_name(), "builtin-8x8");
    let grid = rasterizer.rasterize(&GlyphSpec::new(20, 20)).unwrap();
    assert_eq!(grid.shape(), (20, 20));
}

#[test]
fn default_probe_never_fails_to_produce_a_face() {
    // Whatever this machine has installed, construction and rendering
    // succeed; only the face identity varies.
    let rasterizer = GlyphRasterizer::new();
    let grid = rasterizer.rasterize(&GlyphSpec::new(30, 45)).unwrap();
    assert_eq!(grid.shape(), (30, 45));
    assert!(grid.as_slice().iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn size_ratio_shrinks_the_ink_box() {
    let rasterizer = GlyphRasterizer::builtin();
    let big = rasterizer
        .rasterize(&GlyphSpec::new(80, 80).with_size_ratio(0.9))
        .unwrap();
    let small = rasterizer
        .rasterize(&GlyphSpec::new(80, 80).with_size_ratio(0.3))
        .unwrap();
    let (br0, br1, ..) = ink_bbox(&big).unwrap();
    let (sr0, sr1, ..) = ink_bbox(&small).unwrap();
    assert!(br1 - br0 > sr1 - sr0);
}
