use crate::{
    ast::{BinaryExpression, BinaryOperator, Span},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates both operands, left first, then applies the operator.
    pub fn eval_binary_expression(&self, binary: &BinaryExpression) -> EvalResult<f64> {
        let left = self.eval_expression(&binary.left)?;
        let right = self.eval_expression(&binary.right)?;

        Self::eval_binary(binary.operator, left, right, binary.span)
    }

    /// Applies an arithmetic operator to two numbers.
    ///
    /// Arithmetic is IEEE-754 `f64`, except that a zero divisor is an error
    /// rather than an infinity or NaN.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `span`: Span of the expression, for error reporting.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     ast::{BinaryOperator, Span},
    ///     error::RuntimeError,
    ///     interpreter::evaluator::Evaluator,
    /// };
    ///
    /// let span = Span::new(0, 5);
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 10.0, 4.0, span), Ok(2.5));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 1.0, 0.0, span),
    ///            Err(RuntimeError::DivisionByZero { span }));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, span: Span) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { span });
                }
                Ok(left / right)
            },
        }
    }
}
