//! `codesnip`: screenshot a range of lines from a source file.
//!
//! The binary is a thin wrapper over [`parse_args`] and [`run`]. The library
//! half exists so the pipeline can be tested without spawning a process.

mod config;
mod error;
mod range;
mod source;
mod tracing_setup;

pub use config::{
    parse_args, Command, SnipConfig, DEFAULT_FONT, DEFAULT_OUTPUT, DEFAULT_TAB_WIDTH,
    FONT_ENV_VAR, USAGE,
};
pub use error::SnipError;
pub use range::LineRange;
pub use source::{expand_tabs, SourceFile};
pub use tracing_setup::{init_tracing, LOG_TREE_ENV_VAR};

use std::fmt::Write as _;
use std::path::PathBuf;

use snip_lexer::TokenStream;
use snip_render::FontFace;

/// Result of a successful [`run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// An image was written.
    Rendered {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// `--tokens` was given; holds the formatted token listing.
    Tokens(String),
}

/// Load the file, select the range, tokenize, then render or list tokens.
pub fn run(config: &SnipConfig) -> Result<Outcome, SnipError> {
    let _span = tracing::debug_span!("snip", path = %config.path.display()).entered();

    let file = SourceFile::load(&config.path)?;
    let range = select_range(&file, config.range)?;
    tracing::debug!(
        path = %file.path().display(),
        num_lines = file.num_lines(),
        %range,
        "selected lines"
    );
    let snippet = file.snippet(range, config.tab_width);
    let tokens = snip_lexer::tokenize(&snippet);
    tracing::debug!(
        lines = range.len(),
        tokens = tokens.len(),
        "tokenized snippet"
    );

    if config.dump_tokens {
        return Ok(Outcome::Tokens(format_tokens(&tokens)));
    }

    let face = FontFace::load(&config.font, config.render.font_size)?;
    let canvas = snip_render::render(&tokens, &face, &config.render, &config.theme)?;
    canvas.save(&config.output)?;
    Ok(Outcome::Rendered {
        path: config.output.clone(),
        width: canvas.width(),
        height: canvas.height(),
    })
}

/// The requested range checked against the file, or the whole file.
pub fn select_range(file: &SourceFile, range: Option<LineRange>) -> Result<LineRange, SnipError> {
    match range {
        Some(range) => range.validate(file.num_lines()),
        None => file.whole_range(),
    }
}

/// One token per line: kind name, then the text as a quoted literal.
pub fn format_tokens(tokens: &TokenStream<'_>) -> String {
    let mut out = String::new();
    for token in tokens {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:<12} {:?}", token.kind.name(), token.text);
    }
    out
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
