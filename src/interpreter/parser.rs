/// Parser entry point, token stream handling and shared result type.
///
/// Holds [`Parser`], the per-call parse state with its one-token lookahead,
/// and `consume`, the single place tokens are taken off the stream.
pub mod core;

/// Statement-level grammar.
///
/// Parses the program, the statement list, empty statements and expression
/// statements.
pub mod statement;

/// Binary operator precedence levels.
///
/// Parses the additive and multiplicative levels as left-associative folds.
pub mod binary;

/// Primary expressions.
///
/// Parses parenthesized expressions, unary minus and numeric literals.
pub mod primary;

pub use self::core::{ParseResult, Parser};
