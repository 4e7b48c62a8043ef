use std::io::{self, Write};

use miette::{IntoDiagnostic, Result};
use tracing::debug;

use crate::source::core::{Position, Source};

/// Width of the right-aligned line number column.
pub const LINE_NUMBER_WIDTH: usize = 5;
/// Characters printed before the line text: the number column and one space.
pub const GUTTER: usize = LINE_NUMBER_WIDTH + 1;

/// Strip surrounding whitespace and any newline left inside the line.
pub fn trim_line(line: &str) -> String {
    line.trim().replace('\n', "")
}

/// Spaces needed before the carets so they land under `column`.
///
/// Everything trimmed from the line, leading or trailing, is taken off the
/// indent. An indent that would go negative is clamped to zero.
pub fn caret_indent(column: usize, line: &str, trimmed: &str) -> usize {
    let delta = line.chars().count() - trimmed.chars().count();
    (GUTTER + column - 1).saturating_sub(delta)
}

/// Print the numbered, trimmed line and a row of `length` carets under it.
pub fn render<W: Write>(out: &mut W, position: Position, line: &str, length: usize) -> io::Result<()> {
    let trimmed = trim_line(line);
    let indent = caret_indent(position.column, line, &trimmed);

    writeln!(
        out,
        "{:>width$} {}",
        position.line,
        trimmed,
        width = LINE_NUMBER_WIDTH
    )?;
    writeln!(out, "{}{}", " ".repeat(indent), "^".repeat(length))
}

/// Locate `offset` in `source` and render the caret view of it.
pub fn annotate<W: Write>(source: &Source, offset: usize, length: usize, out: &mut W) -> Result<()> {
    let position = source.locate(offset)?;
    let line = source.line(position.line);
    debug!(offset, length, %position, "rendering annotation");

    render(out, position, &line, length).into_diagnostic()?;
    out.flush().into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotated(text: &str, offset: usize, length: usize) -> String {
        let mut out = Vec::new();
        annotate(&Source::new(text), offset, length, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn carets_under_span_in_second_line() {
        assert_eq!(
            annotated("hello\nworld\n", 7, 3),
            "    2 world\n       ^^^\n"
        );
    }

    #[test]
    fn single_caret_at_line_start() {
        assert_eq!(annotated("ab\ncd\n", 3, 1), "    2 cd\n      ^\n");
    }

    #[test]
    fn leading_whitespace_shifts_carets_left() {
        let out = annotated("fn f() {\n    let x = 1;\n}\n", 17, 1);
        assert_eq!(out, "    2 let x = 1;\n          ^\n");
        let caret_line = out.lines().nth(1).unwrap();
        let text_line = out.lines().next().unwrap();
        assert_eq!(text_line.chars().nth(caret_line.len() - 1), Some('x'));
    }

    #[test]
    fn trailing_whitespace_also_counts_toward_delta() {
        // two trailing spaces pull the caret two columns left of `b`
        assert_eq!(annotated("ab  \n", 1, 1), "    1 ab\n     ^\n");
    }

    #[test]
    fn indent_never_goes_negative() {
        let line = "a          ";
        let trimmed = trim_line(line);
        assert_eq!(caret_indent(1, line, &trimmed), 0);
        assert_eq!(annotated("a          \n", 0, 2), "    1 a\n^^\n");
    }

    #[test]
    fn wide_line_numbers_are_not_truncated() {
        let mut out = Vec::new();
        render(&mut out, Position::new(123456, 1), "x", 1).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "123456 x\n      ^\n");
    }

    #[test]
    fn trim_removes_embedded_newlines() {
        assert_eq!(trim_line("  a\nb  "), "ab");
        assert_eq!(trim_line("\t\tvalue"), "value");
    }

    #[test]
    fn newline_offset_points_past_line_end() {
        assert_eq!(annotated("ab\ncd\n", 2, 1), "    1 ab\n        ^\n");
    }

    #[test]
    fn offset_at_end_is_an_error() {
        let mut out = Vec::new();
        let err = annotate(&Source::new("abc"), 3, 1, &mut out).unwrap_err();
        assert!(err.to_string().contains("offset 3 is out of range"));
        assert!(out.is_empty());
    }
}
