/// Parsing errors.
///
/// Defines the errors the parser raises while turning the token stream into a
/// [`Program`](crate::ast::Program): a token of the wrong kind, a token that
/// cannot start a literal, or a token stream that ends too early.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating an AST.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the parse-then-evaluate pipeline.
///
/// Returned by [`crate::run`]; both phase errors convert into it with `?`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source text did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed program failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
