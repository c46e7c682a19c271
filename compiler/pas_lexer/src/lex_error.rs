//! Lexer error types.

use pas_diagnostic::{Diagnostic, ErrorCode};
use pas_ir::Span;
use thiserror::Error;

/// A lexical error. Positions are byte offsets into the source.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character matching no token rule (including an unclosed `{`).
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// A numeric literal that cannot be represented: an integer past `i64`,
    /// or a real too large to be finite.
    #[error("numeric literal `{text}` at position {position} is out of range")]
    InvalidNumber { text: String, position: usize },
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::InvalidCharacter { .. } => ErrorCode::E0001,
            LexError::InvalidNumber { .. } => ErrorCode::E0002,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::InvalidCharacter { ch, position } => {
                Span::from_range(*position..position + ch.len_utf8())
            }
            LexError::InvalidNumber { text, position } => {
                Span::from_range(*position..position + text.len())
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LexError::InvalidCharacter { ch: '{', .. } => diag
                .with_label(self.span(), "comment is never closed")
                .with_note("comments run from `{` to the next `}`"),
            LexError::InvalidCharacter { .. } => diag.with_label(self.span(), "not valid here"),
            LexError::InvalidNumber { .. } => diag
                .with_label(self.span(), "does not fit a 64-bit integer")
                .with_note("integer literals range up to 9223372036854775807"),
        }
    }
}
