//! Glyph measurement and rasterization.
//!
//! [`GlyphMeasure`] is all the layout needs: advances and vertical metrics.
//! [`GlyphRaster`] adds coverage output for drawing. [`FontFace`] implements
//! both on top of `ab_glyph`; [`Monospace`] is a font-free measurer with a
//! fixed advance per character.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};

use crate::RenderError;

/// Horizontal and vertical text metrics, in pixels.
pub trait GlyphMeasure {
    /// Pen advance after drawing `text` on one line.
    fn advance(&self, text: &str) -> f32;

    /// Distance from the top of a line box to its baseline.
    fn ascent(&self) -> f32;

    /// Distance between consecutive baselines.
    fn line_height(&self) -> f32;
}

/// Produces per-pixel coverage for a run of text.
pub trait GlyphRaster: GlyphMeasure {
    /// Rasterize `text` with its pen starting at `x` on `baseline`.
    ///
    /// `plot(px, py, coverage)` is called for every covered pixel, with
    /// coverage in `0.0..=1.0`. Pixels may lie outside any canvas.
    fn rasterize(&self, text: &str, x: f32, baseline: f32, plot: &mut dyn FnMut(i32, i32, f32));
}

/// Fixed advance per `char`, no font file needed.
///
/// A layout helper rather than a renderer: it has no [`GlyphRaster`] impl.
/// Use it to size or lay out a snippet without loading a font, and as the
/// measurer in layout tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monospace {
    pub advance: f32,
    pub ascent: f32,
    pub line_height: f32,
}

impl Monospace {
    /// Metrics approximating a monospace font at `size` pixels.
    pub fn for_size(size: f32) -> Self {
        Self {
            advance: size * 0.6,
            ascent: size * 0.8,
            line_height: size * 1.2,
        }
    }
}

impl GlyphMeasure for Monospace {
    fn advance(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// A parsed font at a fixed pixel size.
pub struct FontFace {
    font: FontVec,
    scale: PxScale,
}

impl FontFace {
    /// Read and parse a TrueType/OpenType font file.
    pub fn load(path: &Path, size: f32) -> Result<Self, RenderError> {
        let bytes = std::fs::read(path).map_err(|source| RenderError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let face = Self::from_bytes(bytes, size).ok_or_else(|| RenderError::InvalidFont {
            path: path.to_path_buf(),
        })?;
        tracing::debug!(path = %path.display(), size, "loaded font");
        Ok(face)
    }

    /// Parse font data already in memory. Returns `None` if it is not a font.
    pub fn from_bytes(bytes: Vec<u8>, size: f32) -> Option<Self> {
        let font = FontVec::try_from_vec(bytes).ok()?;
        Some(Self {
            font,
            scale: PxScale::from(size),
        })
    }
}

impl GlyphMeasure for FontFace {
    fn advance(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0;
        let mut previous = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        width
    }

    fn ascent(&self) -> f32 {
        self.font.as_scaled(self.scale).ascent()
    }

    fn line_height(&self) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        scaled.height() + scaled.line_gap()
    }
}

impl GlyphRaster for FontFace {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        reason = "pixel bounds are small and already rounded"
    )]
    fn rasterize(&self, text: &str, x: f32, baseline: f32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let scaled = self.font.as_scaled(self.scale);
        let mut pen = x;
        let mut previous = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                pen += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(pen, baseline));
            pen += scaled.h_advance(id);
            previous = Some(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue; // whitespace and other glyphs without an outline
            };
            let bounds = outlined.px_bounds();
            let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
            outlined.draw(|gx, gy, coverage| {
                plot(left + gx as i32, top + gy as i32, coverage);
            });
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
