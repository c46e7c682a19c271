//! Canonical source formatter for the Pascal subset.
//!
//! Formatting is a pure function of the tree: comments and source spacing
//! are not preserved. For any parsed program `p`,
//! `parse(format_program(&p))` builds a tree of the same shape as `p`.
//!
//! # Modules
//!
//! - `emitter`: output abstraction ([`StringEmitter`] for in-memory output)
//! - `formatter`: layout of programs, blocks, statements and expressions

mod emitter;
mod formatter;

use pas_ir::Program;

pub use emitter::{Emitter, StringEmitter, INDENT_WIDTH};
pub use formatter::{format_expr, Formatter};

/// Format a program as canonical source, ending in a newline.
pub fn format_program(program: &Program) -> String {
    let mut formatter = Formatter::new(StringEmitter::new());
    formatter.format_program(program);
    formatter.into_emitter().into_string()
}
