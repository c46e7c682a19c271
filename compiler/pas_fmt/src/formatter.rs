//! Core formatting.
//!
//! Layout rules:
//! - one declaration or statement per line, four spaces per nesting level
//! - `VAR` on its own line, each declared name on its own line below it
//! - a procedure's block is indented one level under its header
//! - the last statement of a compound has no `;`; an empty statement
//!   renders as nothing, so `BEGIN END` stays `BEGIN END`-shaped
//!
//! Expressions get parentheses only where the tree's shape differs from
//! what precedence and left-associativity would build by themselves.

use pas_ir::{Block, Compound, Declaration, Expr, Number, Program, Statement};

use crate::emitter::Emitter;

/// Formats AST nodes into an [`Emitter`].
pub struct Formatter<E: Emitter> {
    emitter: E,
}

impl<E: Emitter> Formatter<E> {
    pub fn new(emitter: E) -> Self {
        Formatter { emitter }
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }

    pub fn format_program(&mut self, program: &Program) {
        self.emitter.line(0, &["PROGRAM ", &program.name, ";"]);
        self.format_block(&program.block, 0);
        self.emitter.push(".");
        self.emitter.line_break();
    }

    /// Declarations, then the body; leaves the cursor right after `END`.
    fn format_block(&mut self, block: &Block, level: usize) {
        let mut in_var_section = false;
        for decl in &block.declarations {
            match decl {
                Declaration::Var(var) => {
                    if !in_var_section {
                        self.emitter.line(level, &["VAR"]);
                        in_var_section = true;
                    }
                    let ty = var.type_spec.name.as_str();
                    self.emitter.line(level + 1, &[&var.variable.name, " : ", ty, ";"]);
                }
                Declaration::Procedure(proc) => {
                    in_var_section = false;
                    self.emitter.line(level, &["PROCEDURE ", &proc.name, ";"]);
                    self.format_block(&proc.block, level + 1);
                    self.emitter.push(";");
                    self.emitter.line_break();
                }
            }
        }
        self.format_compound(&block.body, level);
    }

    fn format_compound(&mut self, compound: &Compound, level: usize) {
        self.emitter.line(level, &["BEGIN"]);

        let last = compound.statements.len().saturating_sub(1);
        for (i, stmt) in compound.statements.iter().enumerate() {
            let separator = if i == last { "" } else { ";" };
            match stmt {
                // A trailing empty statement is implied by the `;` before it.
                Statement::NoOp if i == last => {}
                Statement::NoOp => self.emitter.line(level + 1, &[separator]),
                Statement::Assign(assign) => {
                    let value = format_expr(&assign.expr);
                    self.emitter
                        .line(level + 1, &[&assign.target.name, " := ", &value, separator]);
                }
                Statement::Compound(inner) => {
                    self.format_compound(inner, level + 1);
                    self.emitter.push(separator);
                    self.emitter.line_break();
                }
            }
        }

        self.emitter.pad(level);
        self.emitter.push("END");
    }
}

/// Format an expression on one line.
///
/// ```text
/// (2 + 3) * 4     2 + 3 * 4     8 - (3 - 2)     -(1 + x)
/// ```
pub fn format_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(expr, &mut out);
    out
}

fn write_expr(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Binary { op, left, right } => {
            let prec = op.precedence();
            write_operand(left, out, binary_precedence(left).is_some_and(|p| p < prec));
            out.push(' ');
            out.push_str(op.as_symbol());
            out.push(' ');
            write_operand(right, out, binary_precedence(right).is_some_and(|p| p <= prec));
        }
        Expr::Unary { op, operand } => {
            out.push_str(op.as_symbol());
            // The operand of a sign is a factor: only a binary needs parens.
            write_operand(operand, out, binary_precedence(operand).is_some());
        }
        Expr::Number(number) => write_number(*number, out),
        Expr::Variable(var) => out.push_str(&var.name),
    }
}

fn write_operand(expr: &Expr, out: &mut String, parenthesize: bool) {
    if parenthesize {
        out.push('(');
        write_expr(expr, out);
        out.push(')');
    } else {
        write_expr(expr, out);
    }
}

fn binary_precedence(expr: &Expr) -> Option<u8> {
    match expr {
        Expr::Binary { op, .. } => Some(op.precedence()),
        _ => None,
    }
}

/// Reals always carry a `.` so they re-lex as reals, never as integers.
fn write_number(number: Number, out: &mut String) {
    match number {
        Number::Integer(n) => out.push_str(&n.to_string()),
        Number::Real(r) => {
            let text = r.to_string();
            out.push_str(&text);
            if r.is_finite() && !text.contains('.') {
                out.push_str(".0");
            }
        }
    }
}
