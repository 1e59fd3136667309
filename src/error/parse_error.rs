use crate::{ast::Span, interpreter::lexer::TokenKind};

/// Represents all errors that can occur during parsing.
///
/// The lexer never fails on its own: unknown input simply ends the token
/// stream, which the parser then reports as [`ParseError::UnexpectedEndOfInput`]
/// wherever the grammar still expected something.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lookahead token was not the kind the grammar required.
    #[error("Error at {span}: Unexpected token {found}, expected {expected}.")]
    UnexpectedToken {
        /// The token kind encountered.
        found:    TokenKind,
        /// The token kind the grammar required.
        expected: TokenKind,
        /// Where the offending token sits.
        span:     Span,
    },
    /// A literal was required but the lookahead cannot start one.
    #[error("Error at {span}: Unexpected literal {found}.")]
    UnexpectedLiteral {
        /// The token kind encountered.
        found: TokenKind,
        /// Where the offending token sits.
        span:  Span,
    },
    /// The token stream ran out while the grammar needed more input.
    #[error("Error at {offset}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Character offset reached by the last consumed token.
        offset: usize,
    },
}

impl ParseError {
    /// Where in the source the error was detected.
    ///
    /// End-of-input errors report a zero-width span at their offset.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } | Self::UnexpectedLiteral { span, .. } => *span,
            Self::UnexpectedEndOfInput { offset } => Span::empty_at(*offset),
        }
    }
}
