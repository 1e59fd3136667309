use std::iter::Peekable;

use crate::{
    ast::{
        Program,
        builder::{NodeBuilder, SpannedBuilder},
    },
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind, tokenize},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser for the arithmetic grammar.
///
/// The parser itself only owns its [`NodeBuilder`]. All cursor and lookahead
/// state is created fresh by each [`Parser::parse`] call, so one parser can
/// be reused for any number of inputs.
///
/// Grammar:
/// ```text
///     program        := statement+
///     statement      := ";" | expression ";"
///     expression     := additive
///     additive       := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := primary (("*" | "/") primary)*
///     primary        := "(" expression ")" | "-" literal | literal
///     literal        := number
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser<B = SpannedBuilder> {
    builder: B,
}

impl Parser {
    /// Creates a parser that records source spans on every node.
    #[must_use]
    pub const fn new() -> Self {
        Self { builder: SpannedBuilder }
    }
}

impl<B: NodeBuilder> Parser<B> {
    /// Creates a parser that constructs nodes through `builder`.
    #[must_use]
    pub const fn with_builder(builder: B) -> Self {
        Self { builder }
    }

    /// Parses `source` into a [`Program`].
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered; no partial tree is
    /// produced.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::Statement, interpreter::parser::Parser};
    ///
    /// let program = Parser::new().parse("1;;").unwrap();
    ///
    /// assert_eq!(program.body.len(), 2);
    /// assert!(matches!(program.body[1], Statement::Empty(_)));
    /// assert!(Parser::new().parse("(1 + 2").is_err());
    /// ```
    pub fn parse(&self, source: &str) -> ParseResult<Program> {
        let mut state = ParseState { tokens:   tokenize(source).peekable(),
                                     builder:  &self.builder,
                                     last_end: 0, };

        state.program()
    }
}

/// Cursor state for a single parse.
///
/// Wraps the lexer in a [`Peekable`] to get exactly one token of lookahead.
pub(in crate::interpreter::parser) struct ParseState<'src, 'b, B> {
    pub(in crate::interpreter::parser) tokens:   Peekable<Lexer<'src>>,
    pub(in crate::interpreter::parser) builder:  &'b B,
    /// End offset of the most recently consumed token.
    pub(in crate::interpreter::parser) last_end: usize,
}

impl<'src, B: NodeBuilder> ParseState<'src, '_, B> {
    /// Returns a copy of the next unconsumed token.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if the token stream is exhausted.
    pub(in crate::interpreter::parser) fn lookahead(&mut self) -> ParseResult<Token<'src>> {
        self.tokens
            .peek()
            .copied()
            .ok_or(ParseError::UnexpectedEndOfInput { offset: self.last_end })
    }

    /// Returns `true` while any token remains.
    pub(in crate::interpreter::parser) fn has_lookahead(&mut self) -> bool {
        self.tokens.peek().is_some()
    }

    /// Consumes the lookahead token if it is of kind `expected`.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if there is no lookahead.
    /// - `UnexpectedToken` if the lookahead is of another kind; the token is
    ///   left in place.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  expected: TokenKind)
                                                  -> ParseResult<Token<'src>> {
        let token = self.lookahead()?;

        if token.kind != expected {
            return Err(ParseError::UnexpectedToken { found: token.kind,
                                                     expected,
                                                     span: token.span });
        }

        self.tokens.next();
        self.last_end = token.span.end;
        Ok(token)
    }
}
