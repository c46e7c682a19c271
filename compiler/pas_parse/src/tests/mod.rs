//! Parser tests.
//!
//! - `parser`: grammar coverage for programs, declarations, statements and
//!   expressions
//! - `errors`: syntax error reporting

mod parser;
