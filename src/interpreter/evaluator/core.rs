use crate::{
    ast::{Expression, Node, NumericLiteral, Program, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A tree-walking evaluator.
///
/// Evaluation is plain structural recursion: no environment, no side
/// effects, and both operands of every binary expression are always
/// evaluated, left first. The evaluator is a zero-sized value and can be
/// shared freely.
///
/// ## Usage
///
/// Use [`Evaluator::eval`] for any node, or one of the typed entry points
/// when the node kind is known statically.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates any AST node.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the node kind: programs yield a [`Value::Sequence`], empty
    /// statements yield [`Value::Null`], and every other node yields a
    /// [`Value::Number`].
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] if any division in the node
    /// has a zero divisor.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     interpreter::{evaluator::Evaluator, parser::Parser, value::Value},
    /// };
    ///
    /// let program = Parser::new().parse("(2 + 2) * 2;;").unwrap();
    /// let evaluator = Evaluator::new();
    ///
    /// assert_eq!(evaluator.eval(&program).unwrap(), Value::Sequence(vec![Some(8.0), None]));
    /// assert_eq!(evaluator.eval(&program.body[1]).unwrap(), Value::Null);
    /// ```
    pub fn eval<'a>(&self, node: impl Into<Node<'a>>) -> EvalResult<Value> {
        match node.into() {
            Node::Program(program) => self.eval_program(program).map(Value::Sequence),
            Node::Statement(statement) => self.eval_statement(statement).map(Value::from),
            Node::EmptyStatement(_) => Ok(Value::Null),
            Node::ExpressionStatement(statement) => {
                self.eval_expression(&statement.expression).map(Value::Number)
            },
            Node::Expression(expression) => self.eval_expression(expression).map(Value::Number),
            Node::BinaryExpression(binary) => self.eval_binary_expression(binary).map(Value::Number),
            Node::UnaryExpression(unary) => self.eval_unary_expression(unary).map(Value::Number),
            Node::NumericLiteral(literal) => Ok(Value::Number(Self::eval_numeric_literal(literal))),
        }
    }

    /// Evaluates every statement of a program, in body order.
    ///
    /// Stops at the first failing statement.
    pub fn eval_program(&self, program: &Program) -> EvalResult<Vec<Option<f64>>> {
        program.body
               .iter()
               .map(|statement| self.eval_statement(statement))
               .collect()
    }

    /// Evaluates a single statement.
    ///
    /// # Returns
    /// `None` for an empty statement, `Some(value)` for an expression
    /// statement.
    pub fn eval_statement(&self, statement: &Statement) -> EvalResult<Option<f64>> {
        let result = match statement {
            Statement::Empty(_) => None,
            Statement::Expression(statement) => Some(self.eval_expression(&statement.expression)?),
        };

        tracing::trace!(span = %statement.span(), ?result, "evaluated statement");
        Ok(result)
    }

    /// Evaluates an expression to a number.
    pub fn eval_expression(&self, expression: &Expression) -> EvalResult<f64> {
        match expression {
            Expression::NumericLiteral(literal) => Ok(Self::eval_numeric_literal(literal)),
            Expression::BinaryExpression(binary) => self.eval_binary_expression(binary),
            Expression::UnaryExpression(unary) => self.eval_unary_expression(unary),
        }
    }

    #[must_use]
    pub const fn eval_numeric_literal(literal: &NumericLiteral) -> f64 {
        literal.value
    }
}
