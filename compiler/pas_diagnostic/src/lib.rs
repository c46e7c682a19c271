//! Diagnostics for the Pascal-subset front end.
//!
//! Every phase error (lexer, parser, checker, interpreter) maps to an
//! [`ErrorCode`] and can be turned into a [`Diagnostic`]: a code for
//! searchability, a message saying what went wrong, and the span saying
//! where. Rendering against the source text is left to the caller via
//! [`Diagnostic::render`].

mod diagnostic;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
