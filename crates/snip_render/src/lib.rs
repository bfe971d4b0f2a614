//! Renders token streams as highlighted PNG images.
//!
//! The pipeline is: [`Layout::compute`] places tokens using a
//! [`GlyphMeasure`], [`Canvas::for_layout`] sizes the image, and
//! [`Canvas::draw`] rasterizes each run in the [`Theme`] color for its kind.
//! [`render`] runs all three.

mod canvas;
mod error;
mod layout;
mod measure;
mod theme;

pub use canvas::Canvas;
pub use error::RenderError;
pub use layout::{Layout, PlacedRun};
pub use measure::{FontFace, GlyphMeasure, GlyphRaster, Monospace};
pub use theme::Theme;

use snip_lexer::TokenStream;

/// Font size and spacing for a rendered snippet.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Font size in pixels.
    pub font_size: f32,
    /// Empty border around the text, in pixels.
    pub margin: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            margin: 10,
        }
    }
}

/// Lay out, size, and draw `tokens` onto a fresh canvas.
pub fn render(
    tokens: &TokenStream<'_>,
    raster: &impl GlyphRaster,
    config: &RenderConfig,
    theme: &Theme,
) -> Result<Canvas, RenderError> {
    let layout = Layout::compute(tokens, raster);
    let mut canvas = Canvas::for_layout(&layout, raster.line_height(), config, theme)?;
    canvas.draw(&layout, raster, config, theme);
    Ok(canvas)
}
