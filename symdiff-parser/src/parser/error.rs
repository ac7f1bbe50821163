use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;
use crate::tokenizer::TokenKind;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "tree".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "input".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", self.expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", self.found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = "add a closing parenthesis `)` after the last operand",
)]
pub struct UnclosedParenthesis;

/// A tuple was opened without a tag naming the node.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing tag in tuple",
    labels = ["this tuple has no tag"],
    help = format!("every tuple starts with a tag, such as {}", "(variable, \"x\")".fg(EXPR)),
)]
pub struct MissingTag;

/// A numeric literal could not be represented as a finite number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", self.lexeme),
    labels = ["this number"],
    help = "numbers must be finite; this one is too large to represent",
)]
pub struct InvalidNumber {
    /// The text of the literal.
    pub lexeme: String,
}

/// Tuples were nested more deeply than the reader allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["this tuple"],
    help = format!("tuples can be nested at most {} levels deep", self.limit),
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub limit: usize,
}
