use crate::{
    ast::{UnaryArgument, UnaryExpression, UnaryOperator},
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates the operand, then applies the operator.
    ///
    /// Nested unary arguments are accepted even though the parser never
    /// produces them.
    pub fn eval_unary_expression(&self, unary: &UnaryExpression) -> EvalResult<f64> {
        let argument = match &unary.argument {
            UnaryArgument::NumericLiteral(literal) => Self::eval_numeric_literal(literal),
            UnaryArgument::UnaryExpression(inner) => self.eval_unary_expression(inner)?,
        };

        Ok(Self::eval_unary(unary.operator, argument))
    }

    /// Applies a unary operator to a number.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::UnaryOperator, interpreter::evaluator::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Negate, 3.0), -3.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
        }
    }
}
