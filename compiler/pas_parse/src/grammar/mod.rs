//! Grammar productions.
//!
//! - `decl.rs`: program header, blocks, `VAR` and `PROCEDURE` declarations
//! - `stmt.rs`: compound statements, assignments, variables
//! - `expr.rs`: the `expr` / `term` / `factor` precedence chain

mod decl;
mod expr;
mod stmt;
