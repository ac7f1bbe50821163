//! Kinds of errors produced while building or evaluating expressions.

use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// A tree node used a tag that does not name any operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown operator `{}`", self.name),
    labels = ["this tuple"],
    help = if self.suggestions.is_empty() {
        format!("the known operators are: {}", crate::expr::OPERATORS.join(", "))
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` operator?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these operators? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnknownOperator {
    /// The tag that was used.
    pub name: String,

    /// A list of similarly named operators, if any.
    pub suggestions: Vec<String>,
}

/// A tree node did not have the shape its tag requires.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed expression tree",
    labels = [format!("expected {}", self.expected)],
    help = format!("found {}", self.found),
)]
pub struct MalformedTree {
    /// A description of what the node should have looked like.
    pub expected: String,

    /// A description of what was found instead.
    pub found: String,
}

/// A variable had no value in the environment it was evaluated in.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not bound", self.name),
    labels = ["this variable"],
    help = format!("to bind it, add a value for {} to the environment", (&self.name).fg(EXPR)),
)]
pub struct UnboundVariable {
    /// The name of the variable that was unbound.
    pub name: String,
}
