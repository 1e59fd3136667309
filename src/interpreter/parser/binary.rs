use crate::{
    ast::{BinaryOperator, Expression, Span, builder::NodeBuilder},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, ParseState},
    },
};

impl<B: NodeBuilder> ParseState<'_, '_, B> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level and descends through the hierarchy.
    ///
    /// Grammar: `expression := additive`
    pub(in crate::interpreter::parser) fn expression(&mut self) -> ParseResult<Expression> {
        self.additive()
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so
    /// `2 + 3 - 1` groups as `(2 + 3) - 1`. Every node built at this level
    /// starts where the level started.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn additive(&mut self) -> ParseResult<Expression> {
        let start = self.lookahead()?.span.start;
        let mut left = self.multiplicative()?;

        while self.lookahead()?.kind == TokenKind::AddOp {
            let operator = match self.consume(TokenKind::AddOp)?.lexeme {
                "-" => BinaryOperator::Sub,
                _ => BinaryOperator::Add,
            };
            let right = self.multiplicative()?;
            left = self.builder
                       .binary_expression(operator, left, right, Span::new(start, self.last_end));
        }

        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*` and `/`.
    ///
    /// Grammar: `multiplicative := primary (("*" | "/") primary)*`
    fn multiplicative(&mut self) -> ParseResult<Expression> {
        let start = self.lookahead()?.span.start;
        let mut left = self.primary()?;

        while self.lookahead()?.kind == TokenKind::MulOp {
            let operator = match self.consume(TokenKind::MulOp)?.lexeme {
                "/" => BinaryOperator::Div,
                _ => BinaryOperator::Mul,
            };
            let right = self.primary()?;
            left = self.builder
                       .binary_expression(operator, left, right, Span::new(start, self.last_end));
        }

        Ok(left)
    }
}
