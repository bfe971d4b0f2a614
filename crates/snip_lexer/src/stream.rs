//! Tokens and the ordered token stream.

use std::ops::Index;

use crate::TokenKind;

/// A classified run of source text.
///
/// `text` always borrows from the source that was tokenized, so a token is
/// cheap to copy and never owns or rewrites its text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }
}

/// Tokens in left-to-right scan order.
///
/// Tokens never overlap. Concatenating their texts yields the scanned input,
/// minus any characters the tokenizer was configured to drop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream<'src> {
    tokens: Vec<Token<'src>>,
}

impl<'src> TokenStream<'src> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token. Order of calls is the order of the stream.
    pub(crate) fn push(&mut self, token: Token<'src>) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token<'src>> {
        self.tokens.iter()
    }

    /// Kinds only, in stream order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Concatenation of every token's text.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text).collect()
    }

    /// Number of lines the stream spans: one more than its newline count.
    ///
    /// An empty stream spans zero lines. A trailing newline does not open a
    /// new line, so `"a\n"` spans one line, like `"a"`.
    pub fn line_count(&self) -> usize {
        if self.tokens.is_empty() {
            return 0;
        }
        let newlines = self
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Newline)
            .count();
        let ends_with_newline = self
            .tokens
            .last()
            .is_some_and(|t| t.kind == TokenKind::Newline);
        if ends_with_newline {
            newlines
        } else {
            newlines + 1
        }
    }
}

impl<'src> Index<usize> for TokenStream<'src> {
    type Output = Token<'src>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'src> IntoIterator for TokenStream<'src> {
    type Item = Token<'src>;
    type IntoIter = std::vec::IntoIter<Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a, 'src> IntoIterator for &'a TokenStream<'src> {
    type Item = &'a Token<'src>;
    type IntoIter = std::slice::Iter<'a, Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<'src> FromIterator<Token<'src>> for TokenStream<'src> {
    fn from_iter<I: IntoIterator<Item = Token<'src>>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}
