use crate::ast::{
    BinaryExpression, BinaryOperator, EmptyStatement, Expression, ExpressionStatement,
    NumericLiteral, Program, Span, Statement, UnaryArgument, UnaryExpression, UnaryOperator,
};

/// Constructs AST nodes on behalf of the parser.
///
/// Every method takes the node's semantic fields plus the span the parser
/// computed for it. Implementations only decide what shape the node gets;
/// grammar legality is checked by the parser before a method is called.
///
/// Two implementations ship with the crate:
/// - [`SpannedBuilder`]: records spans exactly as given. The default.
/// - [`SpanlessBuilder`]: records `Span::default()` everywhere, so trees can
///   be compared regardless of whitespace and layout.
///
/// # Example
/// ```
/// use tally::{
///     ast::builder::SpanlessBuilder,
///     interpreter::parser::Parser,
/// };
///
/// let parser = Parser::with_builder(SpanlessBuilder);
/// let compact = parser.parse("1+2*3").unwrap();
/// let spaced = parser.parse("1 +  2 * 3").unwrap();
///
/// assert_eq!(compact, spaced);
/// ```
pub trait NodeBuilder {
    fn program(&self, body: Vec<Statement>, span: Span) -> Program;

    fn empty_statement(&self, span: Span) -> Statement;

    fn expression_statement(&self, expression: Expression, span: Span) -> Statement;

    /// `raw` is the lexeme as written; `value` is its parsed number.
    fn numeric_literal(&self, value: f64, raw: &str, span: Span) -> NumericLiteral;

    fn binary_expression(&self,
                         operator: BinaryOperator,
                         left: Expression,
                         right: Expression,
                         span: Span)
                         -> Expression;

    fn unary_expression(&self,
                        operator: UnaryOperator,
                        argument: UnaryArgument,
                        span: Span)
                        -> UnaryExpression;

    /// Re-spans an expression that was wrapped in parentheses.
    ///
    /// `span` starts where the inner expression starts and ends at the
    /// closing parenthesis.
    fn parenthesized(&self, inner: Expression, span: Span) -> Expression {
        inner.with_span(span)
    }
}

/// Builds nodes that carry the spans the parser reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpannedBuilder;

impl NodeBuilder for SpannedBuilder {
    fn program(&self, body: Vec<Statement>, span: Span) -> Program {
        Program { body, span }
    }

    fn empty_statement(&self, span: Span) -> Statement {
        Statement::Empty(EmptyStatement { span })
    }

    fn expression_statement(&self, expression: Expression, span: Span) -> Statement {
        Statement::Expression(ExpressionStatement { expression, span })
    }

    fn numeric_literal(&self, value: f64, raw: &str, span: Span) -> NumericLiteral {
        NumericLiteral { value,
                         raw: raw.to_string(),
                         span }
    }

    fn binary_expression(&self,
                         operator: BinaryOperator,
                         left: Expression,
                         right: Expression,
                         span: Span)
                         -> Expression {
        Expression::BinaryExpression(BinaryExpression { operator,
                                                        left: Box::new(left),
                                                        right: Box::new(right),
                                                        span })
    }

    fn unary_expression(&self,
                        operator: UnaryOperator,
                        argument: UnaryArgument,
                        span: Span)
                        -> UnaryExpression {
        UnaryExpression { operator,
                          argument,
                          span }
    }
}

/// Builds nodes with every span zeroed.
///
/// Delegates to [`SpannedBuilder`], discarding the positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanlessBuilder;

impl NodeBuilder for SpanlessBuilder {
    fn program(&self, body: Vec<Statement>, _span: Span) -> Program {
        SpannedBuilder.program(body, Span::default())
    }

    fn empty_statement(&self, _span: Span) -> Statement {
        SpannedBuilder.empty_statement(Span::default())
    }

    fn expression_statement(&self, expression: Expression, _span: Span) -> Statement {
        SpannedBuilder.expression_statement(expression, Span::default())
    }

    fn numeric_literal(&self, value: f64, raw: &str, _span: Span) -> NumericLiteral {
        SpannedBuilder.numeric_literal(value, raw, Span::default())
    }

    fn binary_expression(&self,
                         operator: BinaryOperator,
                         left: Expression,
                         right: Expression,
                         _span: Span)
                         -> Expression {
        SpannedBuilder.binary_expression(operator, left, right, Span::default())
    }

    fn unary_expression(&self,
                        operator: UnaryOperator,
                        argument: UnaryArgument,
                        _span: Span)
                        -> UnaryExpression {
        SpannedBuilder.unary_expression(operator, argument, Span::default())
    }

    fn parenthesized(&self, inner: Expression, _span: Span) -> Expression {
        inner
    }
}
