//! Character and lexeme classifiers.
//!
//! Every function here is pure and total: it never fails and never looks
//! beyond the character or buffer it is given.
//!
//! # Keywords
//!
//! The keyword table is the 32 reserved words of C. Lookup uses the
//! lexeme's length as a first-pass filter (keywords are 2-8 chars), then
//! matches against the keywords of that length. The table lives in the
//! binary as a `match`, so it is built once and shared read-only by every
//! tokenization.
//!
//! A lexeme that contains `*` is also a keyword when stripping its leading
//! and trailing `*` leaves a keyword. Together with `*` being a
//! [symbol-start](is_symbol_start) character, this makes pointer-qualified
//! types such as `int*` and `char**` highlight as keywords.

/// The reserved words recognized by [`is_keyword`].
pub const KEYWORDS: [&str; 32] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

/// Returns `true` if `c` can start or continue a symbol run.
///
/// Accepts Unicode alphanumerics, `_`, and `*`. The `*` is deliberate: it
/// keeps `int*` in one run so it can classify as a keyword. As a side
/// effect a bare `*` scans as a symbol, not an operator.
#[inline]
pub fn is_symbol_start(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '*'
}

/// Returns `true` if `s` is a reserved keyword, optionally wrapped in `*`.
pub fn is_keyword(s: &str) -> bool {
    lookup(s) || (s.contains('*') && lookup(s.trim_matches('*')))
}

/// Returns `true` if `s` is a non-empty run of ASCII digits.
///
/// No float, hex, or suffix forms: `1.5`, `0x1F` and `10u` are not numbers.
pub fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` for `, . ? : !`.
#[inline]
pub fn is_punct(c: char) -> bool {
    matches!(c, ',' | '.' | '?' | ':' | '!')
}

/// Returns `true` for `+ - * / ^ < > = & |`.
#[inline]
pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '<' | '>' | '=' | '&' | '|')
}

/// Exact keyword lookup, bucketed by length.
fn lookup(text: &str) -> bool {
    if !(2..=8).contains(&text.len()) {
        return false;
    }
    match text.len() {
        2 => matches!(text, "do" | "if"),
        3 => matches!(text, "for" | "int"),
        4 => matches!(
            text,
            "auto" | "case" | "char" | "else" | "enum" | "goto" | "long" | "void"
        ),
        5 => matches!(
            text,
            "break" | "const" | "float" | "short" | "union" | "while"
        ),
        6 => matches!(
            text,
            "double" | "extern" | "return" | "signed" | "sizeof" | "static" | "struct" | "switch"
        ),
        7 => matches!(text, "default" | "typedef"),
        8 => matches!(text, "continue" | "register" | "unsigned" | "volatile"),
        _ => false,
    }
}
