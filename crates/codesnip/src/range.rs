//! Inclusive line ranges given on the command line as `N-M`.

use std::fmt;

use crate::SnipError;

/// A 1-based, inclusive range of lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Parse `N-M`. Bounds are not checked until [`validate`](Self::validate).
    pub fn parse(text: &str) -> Result<Self, SnipError> {
        let malformed = || SnipError::MalformedRange {
            text: text.to_owned(),
        };
        let (start, end) = text.split_once('-').ok_or_else(malformed)?;
        let start = start.trim().parse().map_err(|_| malformed())?;
        let end = end.trim().parse().map_err(|_| malformed())?;
        Ok(Self { start, end })
    }

    /// Check `1 <= start <= end <= num_lines`.
    pub fn validate(self, num_lines: usize) -> Result<Self, SnipError> {
        if self.start > self.end {
            return Err(SnipError::ReversedRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.start == 0 || self.end > num_lines {
            return Err(SnipError::RangeOutOfBounds { num_lines });
        }
        Ok(self)
    }

    pub fn start(self) -> usize {
        self.start
    }

    pub fn end(self) -> usize {
        self.end
    }

    /// Number of lines covered.
    pub fn len(self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
