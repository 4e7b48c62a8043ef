/// Byte offset of the character at `char_offset`.
///
/// Offsets at or past the last character map to `src.len()`, so an
/// end-of-text position still yields a valid (empty) label.
pub fn char_to_byte_offset(src: &str, char_offset: usize) -> usize {
    src.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(src.len())
}

/// Convert a character-based (start, width) into a byte-based `SourceSpan`.
pub fn char_span_to_source_span(src: &str, start: usize, width: usize) -> miette::SourceSpan {
    let from = char_to_byte_offset(src, start);
    let to = char_to_byte_offset(src, start + width);
    miette::SourceSpan::from((from, to - from))
}
