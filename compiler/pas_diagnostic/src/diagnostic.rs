use std::fmt;
use std::fmt::Write;

use pas_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::ErrorCode;

/// How serious a diagnostic is. Every phase stops at its first failure, so
/// there is only one level; notes ride along inside the diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The span a diagnostic points at, with the text printed under the carets.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// A diagnostic: code, message, optional location and notes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a built diagnostic does nothing until it is rendered"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Primary location; runtime errors on computed values may have none.
    pub label: Option<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Start an error with `code`; fill in the rest with the `with_*` methods.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: String::new(),
            label: None,
            notes: Vec::new(),
        }
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            ..self
        }
    }

    /// Set the primary label at the error location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.label = Some(Label {
            span,
            message: message.into(),
        });
        self
    }

    /// Append a `= note:` line.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.label.as_ref().map(|label| label.span)
    }

    /// Render against the source text the spans point into.
    ///
    /// ```text
    /// error[E1001]: expected `)`, found `END`
    ///  --> 1:31
    ///   |
    /// 1 | PROGRAM p4; BEGIN a := (1 + 2 END.
    ///   |                               ^^^ expected `)`
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = format!("{}[{}]: {}", self.severity, self.code, self.message);

        if let Some(label) = &self.label {
            let table = LineOffsetTable::build(source);
            let (line, col) = table.offset_to_line_col(source, label.span.start);
            let text = table.line_text(source, line);
            let gutter = " ".repeat(line.to_string().len());
            let width = source
                .get(label.span.to_range())
                .map_or(1, |s| s.chars().count().max(1));
            let pad = " ".repeat(col.saturating_sub(1) as usize);

            let _ = write!(out, "\n{gutter}--> {line}:{col}");
            let _ = write!(out, "\n{gutter} |");
            let _ = write!(out, "\n{line} | {text}");
            let _ = write!(out, "\n{gutter} | {pad}{}", "^".repeat(width));
            if !label.message.is_empty() {
                let _ = write!(out, " {}", label.message);
            }
        }

        for note in &self.notes {
            let _ = write!(out, "\n  = note: {note}");
        }

        out
    }
}

/// Source-free rendering: the label prints as a byte range.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Diagnostic {
            code,
            severity,
            message,
            label,
            notes,
        } = self;
        write!(f, "{severity} [{code}]: {message}")?;
        if let Some(Label { span, message }) = label {
            write!(f, "\n  --> {span}: {message}")?;
        }
        notes
            .iter()
            .try_for_each(|note| write!(f, "\n  = note: {note}"))
    }
}
