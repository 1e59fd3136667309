use serde::Serialize;

/// Construction seam between the parser and the node types below.
///
/// See [`builder::NodeBuilder`].
pub mod builder;

/// A half-open `[start, end)` range of character offsets into the source
/// text.
///
/// Both tokens and AST nodes carry a span. Offsets count Unicode scalar
/// values, so for the ASCII-only grammar they coincide with byte offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Offset of the first character.
    pub start: usize,
    /// Offset one past the last character.
    pub end:   usize,
}

impl Span {
    /// Creates a span from its two offsets.
    ///
    /// ## Example
    /// ```
    /// use tally::ast::Span;
    ///
    /// let span = Span::new(2, 5);
    /// assert_eq!(span.len(), 3);
    /// assert!(!span.is_empty());
    /// ```
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span at `offset`.
    #[must_use]
    pub const fn empty_at(offset: usize) -> Self {
        Self { start: offset,
               end:   offset, }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` when `other` lies entirely inside `self`.
    ///
    /// ## Example
    /// ```
    /// use tally::ast::Span;
    ///
    /// assert!(Span::new(0, 9).contains(Span::new(4, 5)));
    /// assert!(Span::new(0, 9).contains(Span::new(0, 9)));
    /// assert!(!Span::new(1, 5).contains(Span::new(0, 5)));
    /// ```
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// The root of every parse: an ordered list of statements.
///
/// The body is never empty. Parsing the empty string yields a single
/// [`Statement::Empty`] produced by the lexer's synthetic terminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Program")]
pub struct Program {
    /// Statements in source order.
    pub body: Vec<Statement>,
    #[serde(flatten)]
    pub span: Span,
}

/// A top-level statement, terminated by a semicolon (explicit or synthetic).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    /// A bare `;`.
    #[serde(rename = "EmptyStatement")]
    Empty(EmptyStatement),
    /// An expression followed by its terminator.
    #[serde(rename = "ExpressionStatement")]
    Expression(ExpressionStatement),
}

impl Statement {
    /// Gets the span from `self`.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Empty(EmptyStatement { span }) | Self::Expression(ExpressionStatement { span, .. }) => {
                *span
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyStatement {
    #[serde(flatten)]
    pub span: Span,
}

/// An expression used as a statement.
///
/// The span runs from the start of the expression to the end of the
/// semicolon that terminates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    /// The expression to evaluate.
    pub expression: Expression,
    #[serde(flatten)]
    pub span:       Span,
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// A number written in the source, such as `42`.
    NumericLiteral(NumericLiteral),
    /// Two operands joined by `+`, `-`, `*` or `/`.
    BinaryExpression(BinaryExpression),
    /// A negated literal, such as `-3`.
    UnaryExpression(UnaryExpression),
}

impl Expression {
    /// Gets the span from `self`.
    ///
    /// ## Example
    /// ```
    /// use tally::ast::{Expression, NumericLiteral, Span};
    ///
    /// let expr = Expression::NumericLiteral(NumericLiteral { value: 7.0,
    ///                                                        raw:   "7".to_string(),
    ///                                                        span:  Span::new(3, 4), });
    ///
    /// assert_eq!(expr.span(), Span::new(3, 4));
    /// ```
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::NumericLiteral(NumericLiteral { span, .. })
            | Self::BinaryExpression(BinaryExpression { span, .. })
            | Self::UnaryExpression(UnaryExpression { span, .. }) => *span,
        }
    }

    /// Consumes `self` and returns the same node carrying `span` instead.
    ///
    /// Children keep their own spans. The parser uses this to stretch a
    /// parenthesized expression over its closing parenthesis.
    #[must_use]
    pub fn with_span(self, span: Span) -> Self {
        match self {
            Self::NumericLiteral(literal) => Self::NumericLiteral(NumericLiteral { span, ..literal }),
            Self::BinaryExpression(binary) => {
                Self::BinaryExpression(BinaryExpression { span, ..binary })
            },
            Self::UnaryExpression(unary) => Self::UnaryExpression(UnaryExpression { span, ..unary }),
        }
    }
}

/// A decimal number literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericLiteral {
    /// The parsed value.
    pub value: f64,
    /// The lexeme exactly as written, leading zeros included.
    pub raw:   String,
    #[serde(flatten)]
    pub span:  Span,
}

/// A binary arithmetic operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression {
    /// The operator.
    pub operator: BinaryOperator,
    /// Left operand.
    pub left:     Box<Expression>,
    /// Right operand.
    pub right:    Box<Expression>,
    #[serde(flatten)]
    pub span:     Span,
}

/// A prefix operation on a literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpression {
    /// The operator.
    pub operator: UnaryOperator,
    /// The operand.
    pub argument: UnaryArgument,
    #[serde(flatten)]
    pub span:     Span,
}

/// What a unary operator may be applied to.
///
/// The parser only ever produces [`UnaryArgument::NumericLiteral`]; the
/// nested form exists so that hand-built trees such as `--1` can still be
/// represented and evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum UnaryArgument {
    /// A literal operand.
    NumericLiteral(NumericLiteral),
    /// A nested unary operation.
    UnaryExpression(Box<UnaryExpression>),
}

impl UnaryArgument {
    /// Gets the span from `self`.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::NumericLiteral(literal) => literal.span,
            Self::UnaryExpression(unary) => unary.span,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    /// Addition (`+`)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (`-`)
    #[serde(rename = "-")]
    Sub,
    /// Multiplication (`*`)
    #[serde(rename = "*")]
    Mul,
    /// Division (`/`)
    #[serde(rename = "/")]
    Div,
}

impl BinaryOperator {
    /// Maps an operator lexeme to its operator, if it is one.
    ///
    /// ## Example
    /// ```
    /// use tally::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_lexeme("*"), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_lexeme("%"), None);
    /// ```
    #[must_use]
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
///
/// Only negation exists. A leading `+` is lexed like `-` but rejected by the
/// parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-`)
    #[serde(rename = "-")]
    Negate,
}

impl UnaryOperator {
    #[must_use]
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "-" => Some(Self::Negate),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

/// A borrowed view of any evaluable AST node.
///
/// The evaluator accepts all of these, not only whole programs. `From`
/// conversions exist for each node reference type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    EmptyStatement(&'a EmptyStatement),
    ExpressionStatement(&'a ExpressionStatement),
    Expression(&'a Expression),
    BinaryExpression(&'a BinaryExpression),
    UnaryExpression(&'a UnaryExpression),
    NumericLiteral(&'a NumericLiteral),
}

impl Node<'_> {
    /// Gets the span from `self`.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Program(program) => program.span,
            Self::Statement(statement) => statement.span(),
            Self::EmptyStatement(EmptyStatement { span })
            | Self::ExpressionStatement(ExpressionStatement { span, .. }) => *span,
            Self::Expression(expression) => expression.span(),
            Self::BinaryExpression(binary) => binary.span,
            Self::UnaryExpression(unary) => unary.span,
            Self::NumericLiteral(literal) => literal.span,
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(value: &'a Program) -> Self {
        Self::Program(value)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(value: &'a Statement) -> Self {
        Self::Statement(value)
    }
}

impl<'a> From<&'a EmptyStatement> for Node<'a> {
    fn from(value: &'a EmptyStatement) -> Self {
        Self::EmptyStatement(value)
    }
}

impl<'a> From<&'a ExpressionStatement> for Node<'a> {
    fn from(value: &'a ExpressionStatement) -> Self {
        Self::ExpressionStatement(value)
    }
}

impl<'a> From<&'a BinaryExpression> for Node<'a> {
    fn from(value: &'a BinaryExpression) -> Self {
        Self::BinaryExpression(value)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(value: &'a Expression) -> Self {
        Self::Expression(value)
    }
}

impl<'a> From<&'a UnaryExpression> for Node<'a> {
    fn from(value: &'a UnaryExpression) -> Self {
        Self::UnaryExpression(value)
    }
}

impl<'a> From<&'a NumericLiteral> for Node<'a> {
    fn from(value: &'a NumericLiteral) -> Self {
        Self::NumericLiteral(value)
    }
}
