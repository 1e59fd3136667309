/// The evaluator module reduces AST nodes to values.
///
/// The evaluator walks the tree produced by the parser and computes the
/// result of every statement. It has no state of its own.
///
/// # Responsibilities
/// - Evaluates every node kind with an exhaustive match.
/// - Applies the four arithmetic operators and unary negation.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and lazily produces tokens: numbers,
/// operators, parentheses and semicolons, each with its character span. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with kind, lexeme and span.
/// - Drops whitespace and line comments.
/// - Synthesizes the end-of-input statement terminator.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead and
/// builds a [`Program`](crate::ast::Program) through a
/// [`NodeBuilder`](crate::ast::builder::NodeBuilder).
///
/// # Responsibilities
/// - Encodes operator precedence and associativity in its grammar levels.
/// - Computes the span of every node it builds.
/// - Reports the first syntax error with its location.
pub mod parser;
/// The value module defines what evaluation produces.
pub mod value;
