//! Interpreter tests.
//!
//! - `operators_tests`: value-level arithmetic and the division and
//!   overflow policies
//! - `interpreter_tests`: programs and expressions run end to end
