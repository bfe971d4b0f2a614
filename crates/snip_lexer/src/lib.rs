//! Tokenizer for syntax-highlighted code snippets.
//!
//! Converts C-like source text into an ordered [`TokenStream`] of typed
//! tokens. The renderer maps each token's [`TokenKind`] to a color and each
//! token's text to a horizontal advance; this crate knows nothing about
//! either.
//!
//! ```
//! use snip_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("int x;");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens.text(), "int x;");
//! ```
//!
//! The input is expected to be newline-normalized with tabs already
//! expanded. Tokenization is total: every input, including the empty string,
//! produces a stream.

mod classify;
mod cursor;
mod kind;
mod stream;
mod tokenizer;

pub use classify::{is_keyword, is_number, is_operator, is_punct, is_symbol_start, KEYWORDS};
pub use cursor::Cursor;
pub use kind::TokenKind;
pub use stream::{Token, TokenStream};
pub use tokenizer::{Tokenizer, UnknownChar};

/// Tokenize `source` with the default policy ([`UnknownChar::Emit`]).
pub fn tokenize(source: &str) -> TokenStream<'_> {
    Tokenizer::new(source).run()
}
