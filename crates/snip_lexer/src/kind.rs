//! Token kind tags.

/// Closed set of token categories produced by the tokenizer.
///
/// Literal and comment delimiters share the kind of their body: the opening
/// `"` of a string literal is a [`String`](Self::String) token, the `#` of a
/// directive is a [`Preprocessor`](Self::Preprocessor) token, and so on.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Runs
    Keyword,
    Symbol,
    Number,

    // Literals and comments
    String,
    Char,
    Comment,
    Preprocessor,

    // Single characters
    Punct,
    Operator,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Semicolon,

    // Whitespace
    Space,
    Newline,

    // Control
    End,
    Invalid,
}

impl TokenKind {
    /// Human-readable name, used by token dumps.
    pub fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Symbol => "symbol",
            Self::Number => "number",
            Self::String => "string",
            Self::Char => "char",
            Self::Comment => "comment",
            Self::Preprocessor => "preprocessor",
            Self::Punct => "punctuation",
            Self::Operator => "operator",
            Self::OpenParen => "`(`",
            Self::CloseParen => "`)`",
            Self::OpenCurly => "`{`",
            Self::CloseCurly => "`}`",
            Self::OpenBracket => "`[`",
            Self::CloseBracket => "`]`",
            Self::Semicolon => "`;`",
            Self::Space => "space",
            Self::Newline => "newline",
            Self::End => "end of input",
            Self::Invalid => "invalid",
        }
    }

    /// Structural token for a single delimiter character, if `c` is one.
    pub fn structural(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::Space),
            '\n' => Some(Self::Newline),
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            '{' => Some(Self::OpenCurly),
            '}' => Some(Self::CloseCurly),
            '[' => Some(Self::OpenBracket),
            ']' => Some(Self::CloseBracket),
            ';' => Some(Self::Semicolon),
            _ => None,
        }
    }

    /// Returns `true` for tokens that occupy horizontal space but draw nothing.
    pub fn is_whitespace(self) -> bool {
        matches!(self, Self::Space | Self::Newline)
    }
}
