use pretty_assertions::assert_eq;

use super::{expand_tabs, SourceFile};
use crate::{LineRange, SnipError};

// === Splitting ===

#[test]
fn lines_split_on_lf_and_crlf() {
    let file = SourceFile::from_text("a.c", "one\r\ntwo\nthree");
    assert_eq!(file.lines(), ["one", "two", "three"]);
    assert_eq!(file.num_lines(), 3);
}

#[test]
fn trailing_newline_does_not_add_a_line() {
    let file = SourceFile::from_text("a.c", "one\ntwo\n");
    assert_eq!(file.num_lines(), 2);
}

#[test]
fn blank_lines_are_kept() {
    let file = SourceFile::from_text("a.c", "a\n\nb\n");
    assert_eq!(file.lines(), ["a", "", "b"]);
}

#[test]
fn empty_file_has_no_whole_range() {
    let file = SourceFile::from_text("empty.c", "");
    assert!(matches!(file.whole_range(), Err(SnipError::EmptyFile { .. })));
}

// === Snippets ===

#[test]
fn snippet_takes_inclusive_range_with_terminators() {
    let file = SourceFile::from_text("a.c", "l1\nl2\nl3\nl4");
    let snippet = file.snippet(LineRange::new(2, 3), 4);
    assert_eq!(snippet, "l2\nl3\n");
}

#[test]
fn whole_range_covers_every_line() {
    let file = SourceFile::from_text("a.c", "x\n\ny");
    let range = file.whole_range().unwrap();
    assert_eq!(file.snippet(range, 4), "x\n\ny\n");
}

#[test]
fn snippet_expands_tabs() {
    let file = SourceFile::from_text("a.c", "\tx;");
    assert_eq!(file.snippet(LineRange::new(1, 1), 2), "  x;\n");
}

// === Tab expansion ===

#[test]
fn tab_pads_to_next_stop() {
    assert_eq!(expand_tabs("\tx", 4), "    x");
    assert_eq!(expand_tabs("ab\tx", 4), "ab  x");
    assert_eq!(expand_tabs("abcd\tx", 4), "abcd    x");
}

#[test]
fn consecutive_tabs() {
    assert_eq!(expand_tabs("\t\t", 3), "      ");
}

#[test]
fn line_without_tabs_is_unchanged() {
    assert_eq!(expand_tabs("int x;", 4), "int x;");
}

#[test]
fn zero_width_removes_tabs() {
    assert_eq!(expand_tabs("a\tb", 0), "ab");
}

// === Loading ===

#[test]
fn load_reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.c");
    std::fs::write(&path, "int main() {\n\treturn 0;\n}\n").unwrap();

    let file = SourceFile::load(&path).unwrap();
    assert_eq!(file.num_lines(), 3);
    assert_eq!(file.path(), path.as_path());
}

#[test]
fn load_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = SourceFile::load(&dir.path().join("missing.c"));
    assert!(matches!(result, Err(SnipError::NotFound { .. })));
}

#[test]
fn load_invalid_utf8_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bin.c");
    std::fs::write(&path, [0x66, 0xFF, 0xFE, 0x0A]).unwrap();

    let result = SourceFile::load(&path);
    assert!(matches!(result, Err(SnipError::InvalidUtf8 { .. })));
}
