use std::ops::Add;

use miette::SourceSpan;

use crate::source::core::Source;
use crate::utils::loc::char_span_to_source_span;

/// A run of characters in a [`Source`], measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// A single character at `offset`.
    pub fn point(offset: usize) -> Self {
        Self::new(offset, 1)
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn value(&self, source: &Source) -> String {
        source
            .text()
            .chars()
            .skip(self.start)
            .take(self.length)
            .collect()
    }

    /// Narrow to `start..end`, relative to this span. A negative `end` counts
    /// back from the span's length.
    pub fn subspan(&self, start: usize, end: isize) -> Span {
        let end = if end < 0 {
            self.length as isize + end
        } else {
            end
        };
        let end = end.max(0) as usize;
        Span::new(self.start + start, end.saturating_sub(start))
    }

    /// Starts at whichever span comes first; the length is the sum of both,
    /// so adjacent spans join into exactly their concatenation.
    pub fn join(self, other: Span) -> Span {
        let (first, second) = if other.start < self.start {
            (other, self)
        } else {
            (self, other)
        };
        Span::new(first.start, first.length + second.length)
    }

    pub fn to_source_span(&self, source: &Source) -> SourceSpan {
        char_span_to_source_span(source.text(), self.start, self.length)
    }
}

impl Add for Span {
    type Output = Span;

    fn add(self, other: Span) -> Span {
        self.join(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_of_whole_text() {
        let text = "span with stuff";
        let source = Source::new(text);
        let span = Span::new(0, text.len());
        assert_eq!(span.value(&source), text);
    }

    #[test]
    fn value_is_clamped_to_text() {
        let source = Source::new("short");
        assert_eq!(Span::new(3, 10).value(&source), "rt");
        assert_eq!(Span::new(9, 2).value(&source), "");
    }

    #[test]
    fn subspan_with_positive_and_negative_end() {
        let source = Source::new("span with stuff");
        let span = Span::new(0, 15);
        assert_eq!(span.subspan(2, 6).value(&source), "an w");
        assert_eq!(span.subspan(2, -2).value(&source), "an with stu");
    }

    #[test]
    fn subspan_end_before_start_is_empty() {
        let span = Span::new(4, 3);
        let sub = span.subspan(2, -3);
        assert_eq!(sub, Span::new(6, 0));
        assert!(sub.is_empty());
    }

    #[test]
    fn join_adjacent_spans() {
        let a_text = "first span";
        let b_text = "second span";
        let source = Source::new(format!("{a_text}{b_text}"));
        let a = Span::new(0, a_text.len());
        let b = Span::new(a_text.len(), b_text.len());

        let joined = a + b;
        assert_eq!(joined.start, 0);
        assert_eq!(joined.length, a_text.len() + b_text.len());
        assert_eq!(joined.value(&source), "first spansecond span");
        assert_eq!(b + a, joined);
    }

    #[test]
    fn source_span_uses_byte_offsets() {
        let source = Source::new("ö = 1");
        let span = Span::new(2, 1).to_source_span(&source);
        assert_eq!(span.offset(), 3);
        assert_eq!(span.len(), 1);
    }
}
