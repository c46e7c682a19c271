//! Parse error types.

use pas_diagnostic::{Diagnostic, ErrorCode};
use pas_ir::{Span, TokenKind};
use pas_lexer::LexError;
use thiserror::Error;

/// A syntax error. Parsing stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer failed while the parser was pulling the next token.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The current token is not the one the grammar requires here.
    #[error("expected {expected}, found {actual}")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
        span: Span,
    },

    /// A factor position holds a token that cannot start an expression.
    #[error("expected expression, found {actual}")]
    ExpectedExpression { actual: TokenKind, span: Span },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::ExpectedExpression { .. } => ErrorCode::E1002,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span(),
            ParseError::UnexpectedToken { span, .. } | ParseError::ExpectedExpression { span, .. } => {
                *span
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.to_diagnostic(),
            ParseError::UnexpectedToken {
                expected, actual, ..
            } => {
                let diag = Diagnostic::error(self.code())
                    .with_message(self.to_string())
                    .with_label(self.span(), format!("expected {expected}"));
                match (expected, actual) {
                    (TokenKind::Semi, TokenKind::Ident) => {
                        diag.with_note("statements are separated by `;`")
                    }
                    (TokenKind::Eof, _) => diag.with_note("a program ends at its final `.`"),
                    _ => diag,
                }
            }
            ParseError::ExpectedExpression { .. } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(self.span(), "expected a number, variable, sign or `(`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unexpected_token_message() {
        let err = ParseError::UnexpectedToken {
            expected: TokenKind::RParen,
            actual: TokenKind::End,
            span: Span::new(30, 33),
        };
        assert_eq!(err.to_string(), "expected `)`, found `END`");
        assert_eq!(err.code(), ErrorCode::E1001);
    }

    #[test]
    fn test_lex_error_passes_through() {
        let err = ParseError::from(LexError::InvalidCharacter {
            ch: '@',
            position: 4,
        });
        assert_eq!(err.code(), ErrorCode::E0001);
        assert_eq!(err.to_string(), "invalid character '@' at position 4");
        assert_eq!(err.span(), Span::new(4, 5));
    }

    #[test]
    fn test_expected_expression_diagnostic() {
        let err = ParseError::ExpectedExpression {
            actual: TokenKind::Semi,
            span: Span::new(7, 8),
        };
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E1002);
        assert_eq!(diag.message, "expected expression, found `;`");
        assert_eq!(diag.primary_span(), Some(Span::new(7, 8)));
    }
}
