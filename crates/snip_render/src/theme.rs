//! Token kind to color mapping.

use image::Rgba;
use snip_lexer::TokenKind;

/// Colors for the canvas background and every token kind.
///
/// # Example
///
/// ```
/// use snip_lexer::TokenKind;
/// use snip_render::Theme;
///
/// let theme = Theme::dark();
/// assert_ne!(theme.color_for(TokenKind::Keyword), theme.background);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgba<u8>,
    /// Fallback for symbols, whitespace and anything without its own color.
    pub text: Rgba<u8>,
    pub keyword: Rgba<u8>,
    pub number: Rgba<u8>,
    pub string: Rgba<u8>,
    pub char: Rgba<u8>,
    pub comment: Rgba<u8>,
    pub preprocessor: Rgba<u8>,
    pub punct: Rgba<u8>,
    pub operator: Rgba<u8>,
    /// Parens, braces, brackets and semicolons.
    pub delimiter: Rgba<u8>,
    pub invalid: Rgba<u8>,
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

impl Theme {
    /// Dark gray background with white default text.
    pub fn dark() -> Self {
        let purple = rgb(198, 120, 221); // Keywords
        let cyan = rgb(86, 182, 194); // Strings
        let green = rgb(152, 195, 121); // Comments
        let orange = rgb(209, 154, 102); // Numbers
        let yellow = rgb(229, 192, 123); // Directives
        let gray = rgb(171, 178, 191); // Punctuation

        Self {
            background: rgb(60, 60, 60),
            text: rgb(255, 255, 255),
            keyword: purple,
            number: orange,
            string: cyan,
            char: cyan,
            comment: green,
            preprocessor: yellow,
            punct: gray,
            operator: gray,
            delimiter: gray,
            invalid: rgb(224, 108, 117),
        }
    }

    /// Near-white background with darker, more saturated colors.
    pub fn light() -> Self {
        let purple = rgb(136, 57, 169);
        let cyan = rgb(0, 128, 128);
        let green = rgb(80, 120, 60);
        let orange = rgb(152, 104, 1);
        let yellow = rgb(133, 100, 4);
        let gray = rgb(95, 99, 104);

        Self {
            background: rgb(250, 250, 250),
            text: rgb(36, 41, 46),
            keyword: purple,
            number: orange,
            string: cyan,
            char: cyan,
            comment: green,
            preprocessor: yellow,
            punct: gray,
            operator: gray,
            delimiter: gray,
            invalid: rgb(193, 52, 52),
        }
    }

    /// Look up a built-in theme by name (`dark` or `light`).
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Color for a token kind. Total over every kind.
    pub fn color_for(&self, kind: TokenKind) -> Rgba<u8> {
        match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::Number => self.number,
            TokenKind::String => self.string,
            TokenKind::Char => self.char,
            TokenKind::Comment => self.comment,
            TokenKind::Preprocessor => self.preprocessor,
            TokenKind::Punct => self.punct,
            TokenKind::Operator => self.operator,
            TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::OpenCurly
            | TokenKind::CloseCurly
            | TokenKind::OpenBracket
            | TokenKind::CloseBracket
            | TokenKind::Semicolon => self.delimiter,
            TokenKind::Invalid => self.invalid,
            TokenKind::Symbol | TokenKind::Space | TokenKind::Newline | TokenKind::End => {
                self.text
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
