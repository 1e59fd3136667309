use logos::Logos;
use serde::Serialize;

use crate::ast::Span;

/// The kind of a lexical token.
///
/// The patterns are tried in declaration order: whitespace and comments,
/// `;`, `(`, `)`, numbers, additive operators, multiplicative operators.
/// The only overlapping prefix is `/` against `//`, which resolves to a
/// comment under both priority order and longest match.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Whitespace and `// line comments`. Never handed to the parser.
    #[regex(r"\s+")]
    #[regex(r"//[^\n\r]*", allow_greedy = true)]
    Skip,
    /// `;`, or the zero-width terminator synthesized at end of input.
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    OpeningParen,
    /// `)`
    #[token(")")]
    ClosingParen,
    /// A run of decimal digits, such as `42` or `007`.
    #[regex(r"[0-9]+")]
    Number,
    /// `+` or `-`
    #[token("+")]
    #[token("-")]
    AddOp,
    /// `*` or `/`
    #[token("*")]
    #[token("/")]
    MulOp,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Skip => "whitespace",
            Self::Semicolon => "';'",
            Self::OpeningParen => "'('",
            Self::ClosingParen => "')'",
            Self::Number => "number",
            Self::AddOp => "'+' or '-'",
            Self::MulOp => "'*' or '/'",
        };
        write!(f, "{name}")
    }
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer:
/// its kind, the exact source slice, and its character span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    /// What the token is.
    pub kind:   TokenKind,
    /// The matched text. Empty for the synthetic terminator.
    pub lexeme: &'src str,
    #[serde(flatten)]
    pub span:   Span,
}

impl Token<'_> {
    /// Returns `true` for the zero-width `;` the lexer adds at end of input.
    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        matches!(self.kind, TokenKind::Semicolon) && self.span.is_empty()
    }
}

/// A lazy, single-pass token stream over a source string.
///
/// Each call to [`Iterator::next`] scans forward from the current cursor.
/// Skip tokens are consumed silently. When no pattern matches, the stream
/// ends without an error and without a terminator. When the input runs out
/// normally, one zero-width `;` is yielded at the end offset unless the text
/// ends with an explicit `;`. Whitespace or a comment after that `;` still
/// gets a terminator.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("1 + 2").map(|token| token.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::AddOp, TokenKind::Number, TokenKind::Semicolon]);
/// ```
pub struct Lexer<'src> {
    inner:       logos::Lexer<'src, TokenKind>,
    /// Byte offset of the cursor, to check progress against logos spans.
    byte_offset: usize,
    /// Character offset of the cursor; what token spans are measured in.
    char_offset: usize,
    last_kind:   Option<TokenKind>,
    /// Byte offset where the last emitted token ended.
    last_end:    usize,
    finished:    bool,
}

/// Starts tokenizing `source`.
///
/// Nothing is scanned until the returned iterator is pulled.
#[must_use]
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:       TokenKind::lexer(source),
               byte_offset: 0,
               char_offset: 0,
               last_kind:   None,
               last_end:    0,
               finished:    false, }
    }

    /// Character offset of the cursor.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.char_offset
    }

    fn finish_with_terminator(&mut self) -> Option<Token<'src>> {
        self.finished = true;

        let at_end = self.last_end == self.inner.source().len();
        if at_end && self.last_kind == Some(TokenKind::Semicolon) {
            return None;
        }

        tracing::trace!(offset = self.char_offset, "synthesizing end-of-input terminator");
        Some(Token { kind:   TokenKind::Semicolon,
                     lexeme: "",
                     span:   Span::empty_at(self.char_offset), })
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.inner.next() {
                Some(Ok(kind)) => {
                    let range = self.inner.span();
                    if range.end <= self.byte_offset {
                        self.finished = true;
                        return None;
                    }

                    let lexeme = self.inner.slice();
                    let start = self.char_offset;
                    let end = start + lexeme.chars().count();
                    self.byte_offset = range.end;
                    self.char_offset = end;

                    if kind == TokenKind::Skip {
                        continue;
                    }

                    tracing::trace!(?kind, lexeme, start, end, "token");
                    self.last_kind = Some(kind);
                    self.last_end = range.end;
                    return Some(Token { kind,
                                        lexeme,
                                        span: Span::new(start, end) });
                },
                Some(Err(())) => {
                    tracing::debug!(offset = self.char_offset,
                                    slice = self.inner.slice(),
                                    "unrecognized input, ending token stream");
                    self.finished = true;
                    return None;
                },
                None => return self.finish_with_terminator(),
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
