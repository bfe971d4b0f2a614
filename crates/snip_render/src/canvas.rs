//! Raster canvas and PNG output.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::{GlyphRaster, Layout, RenderConfig, RenderError, Theme};

/// An RGBA pixel buffer sized for one snippet.
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// A canvas filled with `background`. Zero-sized canvases are rejected.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyCanvas);
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, background),
        })
    }

    /// Size a canvas to hold `layout` plus the configured margin on every side.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "extents are non-negative and far below u32::MAX"
    )]
    pub fn for_layout(
        layout: &Layout<'_>,
        line_height: f32,
        config: &RenderConfig,
        theme: &Theme,
    ) -> Result<Self, RenderError> {
        if layout.lines == 0 {
            return Err(RenderError::EmptyCanvas);
        }
        let margin = config.margin * 2;
        let width = layout.width.ceil() as u32 + margin;
        let height = (layout.lines as f32 * line_height).ceil() as u32 + margin;
        tracing::debug!(width, height, lines = layout.lines, "sized canvas");
        Self::new(width, height, theme.background)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        (x < self.width() && y < self.height()).then(|| *self.image.get_pixel(x, y))
    }

    /// Draw every run of `layout` in its theme color.
    pub fn draw(
        &mut self,
        layout: &Layout<'_>,
        raster: &impl GlyphRaster,
        config: &RenderConfig,
        theme: &Theme,
    ) {
        let margin = config.margin as f32;
        let line_height = raster.line_height();
        let ascent = raster.ascent();
        for run in &layout.runs {
            let color = theme.color_for(run.kind);
            let x = margin + run.x;
            let baseline = margin + run.line as f32 * line_height + ascent;
            raster.rasterize(run.text, x, baseline, &mut |px, py, coverage| {
                self.blend(px, py, color, coverage);
            });
        }
    }

    /// Composite `color` over the pixel at `(x, y)` with the given coverage.
    ///
    /// Coordinates outside the canvas are ignored.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "blended channels are clamped to 0..=255"
    )]
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x >= self.width() || y >= self.height() {
            return;
        }
        let alpha = coverage.clamp(0.0, 1.0);
        let dst = self.image.get_pixel_mut(x, y);
        for channel in 0..3 {
            let src = f32::from(color.0[channel]);
            let old = f32::from(dst.0[channel]);
            dst.0[channel] = (src * alpha + old * (1.0 - alpha)).round().clamp(0.0, 255.0) as u8;
        }
        dst.0[3] = dst.0[3].max(color.0[3]);
    }

    /// Encode as PNG in memory.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Cursor::new(Vec::new());
        self.image.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }

    /// Encode as PNG and write to `path`.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        tracing::debug!(path = %path.display(), "wrote image");
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
