//! Token placement.
//!
//! Walks a [`TokenStream`] in order with a running pen. Each token advances
//! the pen by its measured width; a newline returns the pen to the line
//! start and moves to the next line. Newlines inside a token's text (a
//! string literal spanning lines) break the line the same way, so every
//! placed run is single-line.

use snip_lexer::{TokenKind, TokenStream};

use crate::GlyphMeasure;

/// A run of text at a fixed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedRun<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// Pen offset from the line start, in pixels.
    pub x: f32,
    /// Zero-based line index.
    pub line: usize,
}

/// Positions of every visible run plus the content extent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout<'src> {
    pub runs: Vec<PlacedRun<'src>>,
    /// Width of the widest line, in pixels.
    pub width: f32,
    /// Number of lines. A trailing newline does not add an empty line.
    pub lines: usize,
}

impl<'src> Layout<'src> {
    pub fn compute(tokens: &TokenStream<'src>, measure: &impl GlyphMeasure) -> Self {
        let mut layout = Layout::default();
        let mut pen = 0.0_f32;
        let mut line = 0;
        let mut at_line_start = true;

        for token in tokens {
            for (i, piece) in token.text.split('\n').enumerate() {
                if i > 0 {
                    layout.width = layout.width.max(pen);
                    pen = 0.0;
                    line += 1;
                    at_line_start = true;
                }
                if piece.is_empty() {
                    continue;
                }
                at_line_start = false;
                if !token.kind.is_whitespace() {
                    layout.runs.push(PlacedRun {
                        kind: token.kind,
                        text: piece,
                        x: pen,
                        line,
                    });
                }
                pen += measure.advance(piece);
            }
        }

        layout.width = layout.width.max(pen);
        layout.lines = match (tokens.is_empty(), at_line_start) {
            (true, _) => 0,
            (false, true) => line,
            (false, false) => line + 1,
        };
        tracing::trace!(
            runs = layout.runs.len(),
            lines = layout.lines,
            width = layout.width,
            "laid out tokens"
        );
        layout
    }
}
