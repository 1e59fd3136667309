use crate::{
    ast::{Program, Span, Statement, builder::NodeBuilder},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, ParseState},
    },
};

impl<B: NodeBuilder> ParseState<'_, '_, B> {
    /// Parses a whole program.
    ///
    /// The program span runs from the first statement's start to the last
    /// statement's end. For empty input that is the zero-width span of the
    /// synthetic terminator at offset 0.
    ///
    /// Grammar: `program := statement+`
    pub(in crate::interpreter::parser) fn program(&mut self) -> ParseResult<Program> {
        let body = self.statement_list()?;

        let start = body.first().map_or(0, |statement| statement.span().start);
        let end = body.last().map_or(start, |statement| statement.span().end);

        tracing::debug!(statements = body.len(), start, end, "parsed program");
        Ok(self.builder.program(body, Span::new(start, end)))
    }

    /// Parses statements until the token stream is exhausted.
    ///
    /// At least one statement is always parsed, so an exhausted stream at
    /// the very start is an `UnexpectedEndOfInput`.
    fn statement_list(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = vec![self.statement()?];

        while self.has_lookahead() {
            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// A leading `;` makes an empty statement; anything else must be an
    /// expression followed by `;`.
    ///
    /// Grammar: `statement := ";" | expression ";"`
    fn statement(&mut self) -> ParseResult<Statement> {
        match self.lookahead()?.kind {
            TokenKind::Semicolon => self.empty_statement(),
            _ => self.expression_statement(),
        }
    }

    fn empty_statement(&mut self) -> ParseResult<Statement> {
        let semicolon = self.consume(TokenKind::Semicolon)?;

        tracing::trace!(span = %semicolon.span, "parsed empty statement");
        Ok(self.builder.empty_statement(semicolon.span))
    }

    /// Parses an expression and the semicolon that terminates it.
    ///
    /// The statement's span covers the terminator as well.
    fn expression_statement(&mut self) -> ParseResult<Statement> {
        let start = self.lookahead()?.span.start;

        let expression = self.expression()?;
        let semicolon = self.consume(TokenKind::Semicolon)?;
        let span = Span::new(start, semicolon.span.end);

        tracing::trace!(%span, "parsed expression statement");
        Ok(self.builder.expression_statement(expression, span))
    }
}
