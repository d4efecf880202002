//! Line Classification
//!
//! Core classification logic for turning raw source lines into processed
//! records. Classification is deterministic and side-effect-free: the same
//! raw line always produces the same record regardless of tree position.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::blueprint::ast::INDENT_UNIT;

/// Marker pattern for annotation lines: `@` followed by the annotation text.
static ANNOTATION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[ \t]*(.*)$").expect("annotation pattern is valid"));

/// The kind of a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    Comment,
    Annotation,
    Structural,
}

/// A classified source line. Ephemeral: consumed by the analyzer and not
/// retained after the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedLine {
    pub kind: LineKind,
    /// Leading whitespace measured in columns (tab = 4).
    pub indent: usize,
    /// Line content with indentation and marker stripped, trailing
    /// whitespace removed.
    pub content: String,
    /// 1-based source line number.
    pub line_number: usize,
}

/// Classify a single raw line.
pub fn classify_line(raw: &str, line_number: usize) -> ProcessedLine {
    let (indent, rest) = measure_indent(raw);
    let rest = rest.trim_end();

    if rest.is_empty() {
        return ProcessedLine {
            kind: LineKind::Empty,
            indent,
            content: String::new(),
            line_number,
        };
    }

    if rest.starts_with('#') {
        return ProcessedLine {
            kind: LineKind::Comment,
            indent,
            content: rest.trim_start_matches('#').trim().to_string(),
            line_number,
        };
    }

    if let Some(captures) = ANNOTATION_LINE.captures(rest) {
        return ProcessedLine {
            kind: LineKind::Annotation,
            indent,
            content: captures[1].trim_end().to_string(),
            line_number,
        };
    }

    ProcessedLine {
        kind: LineKind::Structural,
        indent,
        content: rest.to_string(),
        line_number,
    }
}

/// Classify every line of a source text, preserving file order.
pub fn classify_source(source: &str) -> Vec<ProcessedLine> {
    source
        .lines()
        .enumerate()
        .map(|(index, raw)| classify_line(raw, index + 1))
        .collect()
}

/// Measure leading whitespace in columns and return the rest of the line.
fn measure_indent(raw: &str) -> (usize, &str) {
    let mut columns = 0;
    for (offset, ch) in raw.char_indices() {
        match ch {
            ' ' => columns += 1,
            '\t' => columns += INDENT_UNIT as usize,
            _ => return (columns, &raw[offset..]),
        }
    }
    (columns, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_whitespace_lines_are_empty() {
        assert_eq!(classify_line("", 1).kind, LineKind::Empty);
        assert_eq!(classify_line("        ", 2).kind, LineKind::Empty);
        assert_eq!(classify_line("\t", 3).kind, LineKind::Empty);
    }

    #[test]
    fn test_comment_line() {
        let line = classify_line("    # scaffolding only", 4);
        assert_eq!(line.kind, LineKind::Comment);
        assert_eq!(line.indent, 4);
        assert_eq!(line.content, "scaffolding only");
    }

    #[test]
    fn test_annotation_line_strips_marker() {
        let line = classify_line("    @ cache the result", 7);
        assert_eq!(line.kind, LineKind::Annotation);
        assert_eq!(line.indent, 4);
        assert_eq!(line.content, "cache the result");
        assert_eq!(line.line_number, 7);
    }

    #[test]
    fn test_bare_annotation_marker_has_empty_content() {
        let line = classify_line("@", 1);
        assert_eq!(line.kind, LineKind::Annotation);
        assert_eq!(line.content, "");
    }

    #[test]
    fn test_structural_line_keeps_content() {
        let line = classify_line("        var count", 9);
        assert_eq!(line.kind, LineKind::Structural);
        assert_eq!(line.indent, 8);
        assert_eq!(line.content, "var count");
    }

    #[test]
    fn test_tab_counts_as_one_level() {
        let line = classify_line("\tfunc start", 2);
        assert_eq!(line.indent, 4);
        assert_eq!(line.content, "func start");
    }

    #[test]
    fn test_trailing_whitespace_is_stripped() {
        let line = classify_line("class Point   ", 1);
        assert_eq!(line.content, "class Point");
    }

    #[test]
    fn test_classify_source_numbers_lines_from_one() {
        let lines = classify_source("class A\n    var x\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line_number, 1);
        assert_eq!(lines[1].line_number, 2);
        assert_eq!(lines[1].indent, 4);
    }

    #[test]
    fn test_crlf_line_endings() {
        let lines = classify_source("class A\r\n    var x\r\n");
        assert_eq!(lines[0].content, "class A");
        assert_eq!(lines[1].content, "var x");
    }

    #[test]
    fn test_classifier_is_deterministic() {
        let a = classify_line("    if ready", 3);
        let b = classify_line("    if ready", 3);
        assert_eq!(a, b);
    }
}
