use std::fmt;
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{debug, trace};

use crate::source::error::{LocateError, SourceError};
use crate::utils::loc::char_span_to_source_span;

/// Path shown for sources that were not read from disk.
pub const UNNAMED_SOURCE: &str = "dummy/path/to/file.ext";

/// A 1-based line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The full text of one input file, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    text: String,
    path: Option<PathBuf>,
}

impl Source {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: None,
        }
    }

    pub fn with_path(text: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            path: Some(path.into()),
        }
    }

    /// Read the whole file at `path` into memory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read source file `{}`", path.display()))?;
        debug!(path = %path.display(), bytes = text.len(), "loaded source");
        Ok(Self::with_path(text, path))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn display_path(&self) -> String {
        match &self.path {
            Some(p) => p.display().to_string(),
            None => UNNAMED_SOURCE.to_owned(),
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn line_count(&self) -> usize {
        line_count(&self.text)
    }

    /// Like [`locate`], but an offset past the end is reported against this
    /// source so the diagnostic can show where the text stops.
    pub fn locate(&self, offset: usize) -> std::result::Result<Position, SourceError> {
        locate(&self.text, offset).map_err(|err| {
            let len = self.char_len();
            SourceError::new(
                &self.display_path(),
                &self.text,
                char_span_to_source_span(&self.text, len, 0),
                format!("text ends here, after {len} characters"),
                err.to_string(),
            )
        })
    }

    pub fn line(&self, line: usize) -> String {
        extract_line(&self.text, line)
    }
}

pub fn line_count(text: &str) -> usize {
    text.chars().filter(|&c| c == '\n').count() + 1
}

/// Find the line and column of the character at `offset`.
///
/// The counters are read before the character at `offset` is consumed, so a
/// newline sits at the end of its own line.
pub fn locate(text: &str, offset: usize) -> std::result::Result<Position, LocateError> {
    let mut line = 1;
    let mut column = 1;
    let mut len = 0;

    for (index, c) in text.chars().enumerate() {
        if index == offset {
            trace!(offset, line, column, "located offset");
            return Ok(Position { line, column });
        }

        column += 1;
        if c == '\n' {
            line += 1;
            column = 1;
        }
        len = index + 1;
    }

    Err(LocateError::OffsetOutOfRange { offset, len })
}

/// Return the text of the 1-based `line`, without its newline.
///
/// Asking for a line past the last newline yields whatever follows that
/// newline, which is the unterminated tail of the text (possibly empty).
pub fn extract_line(text: &str, line: usize) -> String {
    let mut count = 1;
    let mut buffer = String::new();

    for c in text.chars() {
        if c == '\n' {
            if count == line {
                return buffer;
            }
            buffer.clear();
            count += 1;
        } else {
            buffer.push(c);
        }
    }

    buffer
}
