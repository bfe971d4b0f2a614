//! Loading source files and preparing snippet text.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{LineRange, SnipError};

/// A source file split into lines.
///
/// Both `\r\n` and `\n` end a line, and the last line needs no terminator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceFile {
    /// Read and split the file at `path`.
    pub fn load(path: &Path) -> Result<Self, SnipError> {
        let text = std::fs::read_to_string(path).map_err(|source| read_error(path, source))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source file");
        Ok(Self::from_text(path, &text))
    }

    /// Split already-loaded `text`, recording `path` for error messages.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// The full-file range, or `EmptyFile` when there is nothing to show.
    pub fn whole_range(&self) -> Result<LineRange, SnipError> {
        if self.lines.is_empty() {
            return Err(SnipError::EmptyFile {
                path: self.path.clone(),
            });
        }
        Ok(LineRange::new(1, self.lines.len()))
    }

    /// The lines in `range`, tab-expanded and each terminated by `'\n'`.
    ///
    /// `range` must already be validated against [`num_lines`](Self::num_lines).
    pub fn snippet(&self, range: LineRange, tab_width: usize) -> String {
        let mut out = String::new();
        let selected = self
            .lines
            .get(range.start().saturating_sub(1)..range.end())
            .unwrap_or_default();
        for line in selected {
            out.push_str(&expand_tabs(line, tab_width));
            out.push('\n');
        }
        out
    }
}

/// Replace each tab with spaces up to the next multiple of `tab_width`.
///
/// A width of zero removes tabs.
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    if !line.contains('\t') {
        return line.to_owned();
    }
    let mut out = String::with_capacity(line.len() + tab_width);
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            if tab_width == 0 {
                continue;
            }
            let pad = tab_width - column % tab_width;
            out.push_str(&" ".repeat(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}

fn read_error(path: &Path, source: std::io::Error) -> SnipError {
    let path = path.to_path_buf();
    match source.kind() {
        ErrorKind::NotFound => SnipError::NotFound { path },
        ErrorKind::PermissionDenied => SnipError::PermissionDenied { path },
        ErrorKind::InvalidData => SnipError::InvalidUtf8 { path },
        _ => SnipError::Read { path, source },
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
