use crate::{
    ast::{Expression, NumericLiteral, Span, UnaryArgument, UnaryOperator, builder::NodeBuilder},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, ParseState},
    },
};

impl<B: NodeBuilder> ParseState<'_, '_, B> {
    /// Parses a primary (atomic) expression.
    ///
    /// Dispatches on the lookahead: `(` opens a parenthesized expression, an
    /// additive operator starts a unary expression, and anything else must
    /// be a literal.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "(" expression ")"
    ///              | ("+" | "-") literal
    ///              | literal
    /// ```
    pub(in crate::interpreter::parser) fn primary(&mut self) -> ParseResult<Expression> {
        match self.lookahead()?.kind {
            TokenKind::OpeningParen => self.parenthesized(),
            TokenKind::AddOp => self.unary(),
            _ => self.literal().map(Expression::NumericLiteral),
        }
    }

    /// Parses `( expression )`.
    ///
    /// Produces the inner expression itself, its span stretched to end at the
    /// closing parenthesis. The start stays at the inner expression.
    fn parenthesized(&mut self) -> ParseResult<Expression> {
        self.consume(TokenKind::OpeningParen)?;
        let inner = self.expression()?;
        let closing = self.consume(TokenKind::ClosingParen)?;

        let span = Span::new(inner.span().start, closing.span.end);
        Ok(self.builder.parenthesized(inner, span))
    }

    /// Parses a unary minus applied to a single literal.
    ///
    /// The operand must be a literal: `-(1 + 2)` and
    /// `--1` are rejected. A leading `+` is lexed as the same token kind but
    /// is not a unary operator, and fails as an unexpected token.
    fn unary(&mut self) -> ParseResult<Expression> {
        let token = self.consume(TokenKind::AddOp)?;
        let Some(operator) = UnaryOperator::from_lexeme(token.lexeme) else {
            return Err(ParseError::UnexpectedToken { found:    token.kind,
                                                     expected: TokenKind::Number,
                                                     span:     token.span, });
        };

        let argument = self.literal()?;
        let span = Span::new(token.span.start, self.last_end);

        let argument = UnaryArgument::NumericLiteral(argument);
        Ok(Expression::UnaryExpression(self.builder.unary_expression(operator, argument, span)))
    }

    /// Parses a literal.
    ///
    /// Numbers are the only literal kind.
    ///
    /// # Errors
    /// `UnexpectedLiteral` when the lookahead cannot start a literal.
    fn literal(&mut self) -> ParseResult<NumericLiteral> {
        let token = self.lookahead()?;

        match token.kind {
            TokenKind::Number => self.numeric_literal(),
            found => Err(ParseError::UnexpectedLiteral { found,
                                                         span: token.span }),
        }
    }

    fn numeric_literal(&mut self) -> ParseResult<NumericLiteral> {
        let token = self.consume(TokenKind::Number)?;
        let value =
            token.lexeme
                 .parse::<f64>()
                 .map_err(|_| ParseError::UnexpectedLiteral { found: token.kind,
                                                              span:  token.span, })?;

        Ok(self.builder.numeric_literal(value, token.lexeme, token.span))
    }
}
