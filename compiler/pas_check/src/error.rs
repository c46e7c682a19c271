//! Checker errors.

use pas_diagnostic::{Diagnostic, ErrorCode};
use pas_ir::Span;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckError {
    /// A variable is read or assigned without having been declared.
    #[error("undefined variable `{name}`")]
    UndefinedVariable {
        name: String,
        span: Span,
        /// A declared name within a few edits of `name`.
        suggestion: Option<String>,
    },

    /// A declaration names a type the table does not know.
    #[error("undefined type `{name}`")]
    UndefinedType { name: String, span: Span },
}

impl CheckError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CheckError::UndefinedVariable { .. } => ErrorCode::E2001,
            CheckError::UndefinedType { .. } => ErrorCode::E2002,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            CheckError::UndefinedVariable { span, .. } | CheckError::UndefinedType { span, .. } => {
                *span
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            CheckError::UndefinedVariable {
                name, suggestion, ..
            } => {
                let diag = diag.with_label(self.span(), "not declared");
                match suggestion {
                    Some(similar) => diag.with_note(format!("did you mean `{similar}`?")),
                    None => diag.with_note(format!("declare it first: `VAR {name} : INTEGER;`")),
                }
            }
            CheckError::UndefinedType { .. } => diag
                .with_label(self.span(), "unknown type")
                .with_note("the built-in types are INTEGER and REAL"),
        }
    }
}
