//! Facade error types.

use pas_check::CheckError;
use pas_diagnostic::{Diagnostic, ErrorCode};
use pas_eval::EvalError;
use pas_parse::ParseError;
use thiserror::Error;

/// Failure of [`compile_and_check`](crate::compile_and_check): a syntax
/// error (lexical errors included) or an undefined name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Check(#[from] CheckError),
}

impl CompileError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::Parse(err) => err.code(),
            CompileError::Check(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::Parse(err) => err.to_diagnostic(),
            CompileError::Check(err) => err.to_diagnostic(),
        }
    }
}

/// Any failure of a full run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Compile(CompileError::Parse(err))
    }
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Compile(err) => err.code(),
            Error::Eval(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Compile(err) => err.to_diagnostic(),
            Error::Eval(err) => err.to_diagnostic(),
        }
    }

    /// Render against the source the error came from.
    pub fn render(&self, source: &str) -> String {
        self.to_diagnostic().render(source)
    }
}
