//! Single-pass tokenizer producing [`Token`] values.
//!
//! The tokenizer runs over a [`Cursor`] and never backtracks. Each call to
//! [`Tokenizer::next_token`] yields exactly one token; constructs that span
//! several tokens (a comment opener and its body, a quote, its body and the
//! closing quote) are produced across consecutive calls by recording what
//! comes next in the tokenizer's mode.
//!
//! # Dispatch
//!
//! Between tokens the current character selects exactly one branch,
//! in this priority order:
//!
//! 1. symbol run (keyword, number, or symbol)
//! 2. `//` line comment
//! 3. `#` preprocessor directive
//! 4. `"` string literal
//! 5. `'` character literal
//! 6. single-character tokens (whitespace, delimiters, punctuation, operators)
//! 7. anything else, handled per [`UnknownChar`]
//!
//! Malformed input never fails. Unterminated comments, directives and
//! literals run to end of input.

use crate::classify::{is_keyword, is_number, is_operator, is_punct, is_symbol_start};
use crate::cursor::Cursor;
use crate::{Token, TokenKind, TokenStream};

/// What to do with a character no branch recognizes (`%`, `~`, `\t`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownChar {
    /// Emit one [`TokenKind::Invalid`] token per unrecognized character.
    #[default]
    Emit,
    /// Skip the character. The token stream then no longer covers the input.
    Drop,
}

/// What the next call to [`Tokenizer::next_token`] must produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Between tokens.
    Scanning,
    /// After a `//` or `#` opener: the rest of the line.
    LineBody(TokenKind),
    /// After an opening quote: everything up to the closing quote.
    QuotedBody { quote: u8, kind: TokenKind },
    /// The closing quote, which the body scan stopped on.
    QuotedClose(TokenKind),
}

/// Forward-only tokenizer over one source string.
///
/// Owns its cursor for the whole pass; create a new tokenizer per input.
pub struct Tokenizer<'src> {
    cursor: Cursor<'src>,
    mode: Mode,
    unknown: UnknownChar,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            mode: Mode::Scanning,
            unknown: UnknownChar::default(),
        }
    }

    /// Set the policy for unrecognized characters.
    #[must_use]
    pub fn with_unknown(mut self, policy: UnknownChar) -> Self {
        self.unknown = policy;
        self
    }

    /// Produce the next token.
    ///
    /// Returns a [`TokenKind::End`] token with empty text once the source is
    /// exhausted. Subsequent calls keep returning `End`.
    pub fn next_token(&mut self) -> Token<'src> {
        match self.mode {
            Mode::Scanning => self.scan(),
            Mode::LineBody(kind) => self.line_body(kind),
            Mode::QuotedBody { quote, kind } => self.quoted_body(quote, kind),
            Mode::QuotedClose(kind) => self.quoted_close(kind),
        }
    }

    /// Tokenize the remaining input into a stream. `End` is not included.
    pub fn run(mut self) -> TokenStream<'src> {
        let mut tokens = TokenStream::new();
        loop {
            let token = self.next_token();
            if token.kind == TokenKind::End {
                return tokens;
            }
            tokens.push(token);
        }
    }

    fn scan(&mut self) -> Token<'src> {
        loop {
            let start = self.cursor.pos();
            let Some(c) = self.cursor.bump() else {
                return Token::new(TokenKind::End, "");
            };

            let kind = match c {
                c if is_symbol_start(c) => {
                    self.cursor.eat_while(is_symbol_start);
                    classify_run(self.cursor.slice_from(start))
                }
                '/' if self.cursor.peek() == Some('/') => {
                    self.cursor.bump();
                    self.mode = Mode::LineBody(TokenKind::Comment);
                    TokenKind::Comment
                }
                '#' => {
                    self.mode = Mode::LineBody(TokenKind::Preprocessor);
                    TokenKind::Preprocessor
                }
                '"' => {
                    self.mode = Mode::QuotedBody {
                        quote: b'"',
                        kind: TokenKind::String,
                    };
                    TokenKind::String
                }
                '\'' => {
                    self.mode = Mode::QuotedBody {
                        quote: b'\'',
                        kind: TokenKind::Char,
                    };
                    TokenKind::Char
                }
                c => match single_char_kind(c) {
                    Some(kind) => kind,
                    None if self.unknown == UnknownChar::Drop => continue,
                    None => TokenKind::Invalid,
                },
            };

            return Token::new(kind, self.cursor.slice_from(start));
        }
    }

    fn line_body(&mut self, kind: TokenKind) -> Token<'src> {
        let start = self.cursor.pos();
        self.cursor.eat_until_newline_or_eof();
        self.mode = Mode::Scanning;
        Token::new(kind, self.cursor.slice_from(start))
    }

    fn quoted_body(&mut self, quote: u8, kind: TokenKind) -> Token<'src> {
        let start = self.cursor.pos();
        self.cursor.eat_until(quote);
        // Stopped on the quote unless the literal ran to end of input.
        self.mode = if self.cursor.is_eof() {
            Mode::Scanning
        } else {
            Mode::QuotedClose(kind)
        };
        Token::new(kind, self.cursor.slice_from(start))
    }

    fn quoted_close(&mut self, kind: TokenKind) -> Token<'src> {
        let start = self.cursor.pos();
        self.cursor.bump();
        self.mode = Mode::Scanning;
        Token::new(kind, self.cursor.slice_from(start))
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::End).then_some(token)
    }
}

/// Classify a finished symbol run: keyword first, then number, else symbol.
fn classify_run(run: &str) -> TokenKind {
    if is_keyword(run) {
        TokenKind::Keyword
    } else if is_number(run) {
        TokenKind::Number
    } else {
        TokenKind::Symbol
    }
}

fn single_char_kind(c: char) -> Option<TokenKind> {
    if let Some(kind) = TokenKind::structural(c) {
        Some(kind)
    } else if is_punct(c) {
        Some(TokenKind::Punct)
    } else if is_operator(c) {
        Some(TokenKind::Operator)
    } else {
        None
    }
}
