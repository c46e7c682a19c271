//! Pascal-subset front end.
//!
//! Source text goes through four phases, each its own crate:
//!
//! ```text
//! pas_lexer -> pas_parse -> pas_check -> pas_eval
//!  tokens        AST      undefined-name   memory
//! ```
//!
//! # Entry points
//!
//! - [`compile_and_check`]: source text to a checked [`Program`]
//! - [`evaluate`]: run a program, producing its final [`Memory`]
//! - [`evaluate_expression`]: bare expression mode (`7 + 3 * 2`)
//! - [`run`]: both phases in one call
//!
//! Reading input and presenting errors belong to the caller. A driver that
//! reads single lines interactively wraps each one with
//! [`wrap_interactive`] before compiling it.

mod error;

use std::sync::Once;

use tracing::debug;

pub use error::{CompileError, Error};
pub use pas_check::{CheckError, SymbolTable};
pub use pas_diagnostic::{Diagnostic, ErrorCode};
pub use pas_eval::{EvalError, Evaluation, Memory, Value};
pub use pas_fmt::{format_expr, format_program};
pub use pas_ir::{Expr, Program};
pub use pas_lexer::LexError;
pub use pas_parse::ParseError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once; only
/// the first call installs a subscriber.
///
/// ```text
/// RUST_LOG=pas_eval=debug        assignments
/// RUST_LOG=pas_lexer=trace       every token
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Parse and check `source`. A program that fails checking is never
/// returned, so it can never be evaluated.
#[tracing::instrument(level = "debug", skip_all)]
pub fn compile_and_check(source: &str) -> Result<Program, CompileError> {
    let program = pas_parse::parse(source)?;
    let table = pas_check::check_program(&program)?;
    debug!(program = %program.name, symbols = table.len(), "checked");
    Ok(program)
}

/// Run a checked program from empty memory.
pub fn evaluate(program: &Program) -> Result<Evaluation, EvalError> {
    pas_eval::evaluate_program(program)
}

/// Parse and evaluate a bare expression. There is no check pass and no
/// memory, so any variable makes evaluation fail.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate_expression(source: &str) -> Result<Value, Error> {
    let expr = pas_parse::parse_expression(source)?;
    Ok(pas_eval::eval_expr(&expr, &Memory::new())?)
}

/// Compile, check and evaluate `source`.
pub fn run(source: &str) -> Result<Evaluation, Error> {
    let program = compile_and_check(source)?;
    Ok(evaluate(&program)?)
}

/// Wrap one interactively entered line as a complete program.
pub fn wrap_interactive(line: &str) -> String {
    format!("PROGRAM interactive; BEGIN {line} END.")
}

/// Reformat `source` canonically.
pub fn format_source(source: &str) -> Result<String, ParseError> {
    Ok(format_program(&pas_parse::parse(source)?))
}
