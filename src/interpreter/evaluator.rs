/// Core evaluation logic.
///
/// Contains the [`Evaluator`](core::Evaluator), its node dispatch, and the
/// statement and program rules.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*` and `/` on numbers.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements negation.
pub mod unary;

pub use self::core::{EvalResult, Evaluator};
