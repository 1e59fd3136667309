use crate::ast::Span;

/// Represents all errors that can occur during evaluation.
///
/// Node kinds and operators are closed enums, so the evaluator has no
/// "impossible node" failure; the compiler rejects such states instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The right operand of a `/` evaluated to zero.
    #[error("Error at {span}: Division by zero.")]
    DivisionByZero {
        /// Span of the whole division expression.
        span: Span,
    },
}
