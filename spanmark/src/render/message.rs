use std::fmt;
use std::io::Write;

use colored::Colorize;
use miette::{IntoDiagnostic, Result};

use crate::source::core::Source;
use crate::source::span::Span;
use crate::utils::core::Loc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

impl Severity {
    fn header(self, color: bool) -> String {
        let label = format!("{self}:");
        if !color {
            return label;
        }
        match self {
            Severity::Note => label.blue().bold().to_string(),
            Severity::Warning => label.yellow().bold().to_string(),
            Severity::Error => label.red().bold().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub severity: Severity,
    pub span: Span,
    pub text: String,
}

/// Diagnostics collected against one [`Source`], in the order they were raised.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    messages: Vec<Message>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, span: Span, severity: Severity, text: impl Into<String>) {
        self.messages.push(Message {
            severity,
            span,
            text: text.into(),
        });
    }

    /// Record a message only when `condition` does not hold. Returns `condition`.
    pub fn expect(
        &mut self,
        condition: bool,
        span: Span,
        severity: Severity,
        text: impl Into<String>,
    ) -> bool {
        if !condition {
            self.fail(span, severity, text);
        }
        condition
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Error)
    }

    /// Print every message with its source line and carets.
    ///
    /// Returns `false` when there was nothing to print.
    pub fn print<W: Write>(&self, source: &Source, out: &mut W, color: bool) -> Result<bool> {
        if self.messages.is_empty() {
            return Ok(false);
        }

        let path = source.display_path();
        for message in &self.messages {
            let position = source.locate(message.span.start)?;
            let line = source.line(position.line);
            let trimmed = line.trim_start();
            let leading = line.chars().count() - trimmed.chars().count();
            let indent = (position.column - 1).saturating_sub(leading);

            writeln!(
                out,
                "{} {}",
                message.severity.header(color),
                Loc::new(&path, position)
            )
            .into_diagnostic()?;
            writeln!(out, "{trimmed}").into_diagnostic()?;
            writeln!(
                out,
                "{}{}  {}",
                " ".repeat(indent),
                "^".repeat(message.span.length),
                message.text
            )
            .into_diagnostic()?;
        }

        out.flush().into_diagnostic()?;
        Ok(true)
    }
}

impl<'a> IntoIterator for &'a Messages {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
