use std::fmt;

use crate::source::core::Position;

/// A position inside a named file, printed as `path:line:column`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loc<'a> {
    pub path: &'a str,
    pub line: usize,
    pub column: usize,
}

impl<'a> Loc<'a> {
    pub fn new(path: &'a str, position: Position) -> Self {
        Self {
            path,
            line: position.line,
            column: position.column,
        }
    }
}

impl<'a> fmt::Display for Loc<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.column)
    }
}
