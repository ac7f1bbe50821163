use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a [`Tree`] node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TreeKind {
    /// A numeric literal payload, such as the `5` in `(number, 5)`.
    Number(f64),

    /// A string payload, such as the `"x"` in `(variable, "x")`.
    String(String),

    /// A tagged tuple, such as `(add, a, b)`.
    Tuple {
        /// The tag naming the node.
        tag: String,

        /// The operands following the tag.
        args: Vec<Tree>,
    },
}

/// A tagged nested-tuple tree.
///
/// Trees read from text remember the region of the source they came from, so that errors found
/// while building an expression from them can point back at the input. Trees created in code
/// have an empty span.
///
/// The [`PartialEq`] implementation ignores spans.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tree {
    /// The kind of node.
    pub kind: TreeKind,

    /// The region of the source code that this node was parsed from.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub span: Range<usize>,
}

impl Tree {
    /// Creates a numeric payload.
    pub fn number(value: f64) -> Self {
        TreeKind::Number(value).into()
    }

    /// Creates a string payload.
    pub fn string(value: impl Into<String>) -> Self {
        TreeKind::String(value.into()).into()
    }

    /// Creates a tagged tuple.
    pub fn tuple(tag: impl Into<String>, args: Vec<Tree>) -> Self {
        TreeKind::Tuple { tag: tag.into(), args }.into()
    }

    /// Attaches a span to this node.
    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = span;
        self
    }

    /// If the node is a tagged tuple, returns the tag and its operands.
    pub fn as_tuple(&self) -> Option<(&str, &[Tree])> {
        match &self.kind {
            TreeKind::Tuple { tag, args } => Some((tag, args)),
            _ => None,
        }
    }

    /// If the node is a numeric payload, returns the number.
    pub fn as_number(&self) -> Option<f64> {
        match self.kind {
            TreeKind::Number(value) => Some(value),
            _ => None,
        }
    }

    /// If the node is a string payload, returns the string.
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            TreeKind::String(value) => Some(value),
            _ => None,
        }
    }
}

impl From<TreeKind> for Tree {
    fn from(kind: TreeKind) -> Self {
        Self { kind, span: 0..0 }
    }
}

impl From<f64> for Tree {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i32> for Tree {
    fn from(value: i32) -> Self {
        Self::number(value.into())
    }
}

impl From<&str> for Tree {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Tree {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TreeKind::Number(value) => write!(f, "{}", value),
            TreeKind::String(value) => write!(f, "\"{}\"", value),
            TreeKind::Tuple { tag, args } => {
                write!(f, "({}", tag)?;
                for arg in args {
                    write!(f, ", {}", arg)?;
                }
                write!(f, ")")
            },
        }
    }
}
