use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Lookups that have no answer in the scanned text.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("offset {offset} is out of range for a text of {len} characters")]
    #[diagnostic(
        code(spanmark::source::offset_out_of_range),
        help("Offsets are zero-based character counts and must be below the text length")
    )]
    OffsetOutOfRange { offset: usize, len: usize },
}

/// A lookup failure reported against a named source file.
#[derive(Error, Debug, Diagnostic)]
#[error("{message}")]
#[diagnostic(
    code(spanmark::source::error),
    help("Pick an offset inside the highlighted file")
)]
pub struct SourceError {
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("{label}")]
    pub span: SourceSpan,
    pub message: String,
    pub label: String,
}

impl SourceError {
    pub fn new(
        filename: &str,
        full_src: &str,
        span: SourceSpan,
        label: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source_code: NamedSource::new(filename, full_src.to_owned()),
            span,
            label: label.into(),
            message: message.into(),
        }
    }
}
