//! # tally
//!
//! tally is a small arithmetic expression front end written in Rust.
//! It tokenizes source text, parses it into a span-tagged syntax tree, and
//! evaluates that tree to numbers. Statements are separated by `;`; a
//! trailing terminator is implied.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::Error,
    interpreter::{evaluator::Evaluator, parser::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the node types that represent source code as a
/// tree: the program, its statements, and the expressions inside them. Every
/// node carries the [`Span`](ast::Span) of source text it was parsed from.
///
/// # Responsibilities
/// - Defines closed enums for statements and expressions, so every consumer
///   matches exhaustively.
/// - Serializes nodes with stable `type`/`start`/`end` field names.
/// - Provides the [`NodeBuilder`](ast::builder::NodeBuilder) seam used by
///   the parser.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase (parser, evaluator).
/// - Attaches source spans to every error for reporting.
/// - Combines both into the crate-level [`Error`](error::Error).
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::interpreter::lexer::tokenize;

/// Parses `source` into a [`Program`] with source spans.
///
/// # Example
/// ```
/// use tally::ast::Statement;
///
/// let program = tally::parse("").unwrap();
///
/// assert_eq!(program.body.len(), 1);
/// assert!(matches!(program.body[0], Statement::Empty(_)));
/// ```
pub fn parse(source: &str) -> Result<Program, error::ParseError> {
    Parser::new().parse(source)
}

/// Evaluates a parsed program to one result per statement.
///
/// Empty statements produce `None`.
pub fn evaluate(program: &Program) -> Result<Vec<Option<f64>>, error::RuntimeError> {
    Evaluator::new().eval_program(program)
}

/// Parses and evaluates `source`, returning one result per statement.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use tally::run;
///
/// assert_eq!(run("2 + 2 * 2; (2 + 2) * 2").unwrap(), vec![Some(6.0), Some(8.0)]);
/// assert_eq!(run("1;;").unwrap(), vec![Some(1.0), None]);
///
/// // Unary minus only applies to a literal.
/// assert!(run("-(1 + 2)").is_err());
/// ```
pub fn run(source: &str) -> Result<Vec<Option<f64>>, Error> {
    let program = parse(source)?;
    tracing::debug!(statements = program.body.len(), "evaluating program");

    Ok(evaluate(&program)?)
}
