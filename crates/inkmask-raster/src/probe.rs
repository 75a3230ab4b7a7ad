//! Font resolution as a capability lookup.
//!
//! A probe walks an ordered list of candidate font files and keeps the
//! first one that loads and parses. Exhausting the list is not an error:
//! the chain terminates in the built-in bitmap face, which always exists.
//! Rendering therefore never fails for lack of fonts, it only degrades.

use std::path::PathBuf;

use crate::builtin::BuiltinFace;
use crate::ink::InkBitmap;
use crate::outline::OutlineFace;

/// Bold sans-serif candidates in the order they are tried, covering the
/// common install locations per platform. Relative names resolve against
/// the working directory.
const DEFAULT_CANDIDATES: [&str; 5] = [
    "arialbd.ttf",
    "DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:/Windows/Fonts/arialbd.ttf",
];

/// Ordered font-file probe with a guaranteed terminal fallback.
#[derive(Debug, Clone)]
pub struct FontProbe {
    candidates: Vec<PathBuf>,
}

impl FontProbe {
    /// Probe a caller-supplied candidate list instead of the platform
    /// defaults. An empty list resolves straight to the built-in face.
    pub fn new(candidates: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Walks the candidate list and returns the first face that loads.
    ///
    /// This never fails: candidates that are missing or unparsable are
    /// skipped, and an exhausted list yields [`Typeface::Builtin`].
    pub fn resolve(&self) -> Typeface {
        for path in &self.candidates {
            match OutlineFace::from_file(path) {
                Ok(face) => {
                    log::debug!("font probe: using {}", path.display());
                    return Typeface::Outline(face);
                }
                Err(err) => {
                    log::debug!("font probe: skipping {}: {err}", path.display());
                }
            }
        }
        log::warn!("font probe exhausted all candidates, using built-in face");
        Typeface::Builtin(BuiltinFace::new())
    }
}

impl Default for FontProbe {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATES.into_iter().map(PathBuf::from))
    }
}

/// A resolved typeface: either a real outline font or the embedded
/// bitmap fallback.
pub enum Typeface {
    Outline(OutlineFace),
    Builtin(BuiltinFace),
}

impl Typeface {
    /// Identifies the face in logs.
    pub fn name(&self) -> &str {
        match self {
            Typeface::Outline(face) => face.name(),
            Typeface::Builtin(face) => face.name(),
        }
    }

    /// Tight ink bitmap for `character` at `point_size` pixels, or `None`
    /// when the face has nothing to draw (whitespace, unmapped chars).
    pub(crate) fn ink_bitmap(&self, character: char, point_size: u32) -> Option<InkBitmap> {
        match self {
            Typeface::Outline(face) => face.ink_bitmap(character, point_size),
            Typeface::Builtin(face) => face.ink_bitmap(character, point_size),
        }
    }
}
