//! Character cursor over borrowed source text.
//!
//! The cursor walks the source one code point at a time. End of input is
//! reported as `None` from [`Cursor::bump`] and [`Cursor::peek`], never as a
//! stand-in character, so the scanner cannot confuse a real space (or any
//! other character) with exhaustion.
//!
//! # Peek Convention
//!
//! [`peek()`](Cursor::peek) returns the code point at the current position:
//! the one immediately after the last consumed character, which is exactly
//! what the next [`bump()`](Cursor::bump) would return. The scanner uses it
//! after consuming a `/` to decide whether a `//` comment starts.

/// Cursor over a source string with a monotonically advancing byte position.
///
/// The cursor is [`Copy`], so the scanner can snapshot it cheaply. All
/// positions are byte offsets and always fall on UTF-8 character boundaries.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    /// Source text, read-only for the cursor's lifetime.
    src: &'src str,
    /// Current read position (byte offset into `src`).
    pos: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned at byte 0.
    pub fn new(src: &'src str) -> Self {
        Self { src, pos: 0 }
    }

    /// Consume the code point at the current position.
    ///
    /// Returns `None` at end of input without advancing.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Returns the code point at the current position without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed remainder of the source.
    #[inline]
    fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on character boundaries.
    /// Positions taken from [`pos()`](Self::pos) always satisfy this.
    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.src[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current code point.
    ///
    /// Stops at end of input regardless of `pred`.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Advance until `byte` is found or end of input is reached.
    ///
    /// The cursor stops *on* the found byte (it is not consumed). Returns the
    /// number of bytes skipped. `byte` must be ASCII so that the stop
    /// position is a character boundary.
    pub fn eat_until(&mut self, byte: u8) -> usize {
        debug_assert!(byte.is_ascii(), "eat_until needs an ASCII delimiter");
        let start = self.pos;
        match memchr::memchr(byte, self.rest().as_bytes()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
        self.pos - start
    }

    /// Advance to the next `\n` (not consumed) or to end of input.
    ///
    /// Used for comment and directive bodies.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.eat_until(b'\n');
    }
}
