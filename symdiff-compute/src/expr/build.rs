use crate::error::{MalformedTree, UnknownOperator};
use levenshtein::levenshtein;
use super::Expr;
use symdiff_error::Error;
use symdiff_parser::tree::{Tree, TreeKind};

/// The tags accepted by [`Expr::build`], excluding the symbolic aliases.
pub const OPERATORS: &[&str] = &["number", "variable", "negate", "sin", "cos", "add", "multiply"];

/// The operator named by a tree tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Number,
    Variable,
    Negate,
    Sin,
    Cos,
    Add,
    Multiply,
}

impl Operator {
    /// Looks up the operator for the given tag. `-`, `+` and `*` are accepted as aliases for
    /// `negate`, `add` and `multiply`.
    fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "number" => Self::Number,
            "variable" => Self::Variable,
            "negate" | "-" => Self::Negate,
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "add" | "+" => Self::Add,
            "multiply" | "*" => Self::Multiply,
            _ => return None,
        })
    }

    /// The number of operands following the tag.
    fn arity(self) -> usize {
        match self {
            Self::Add | Self::Multiply => 2,
            _ => 1,
        }
    }
}

/// Describes a tree node for error messages.
fn describe(tree: &Tree) -> String {
    match &tree.kind {
        TreeKind::Number(value) => format!("the number `{}`", value),
        TreeKind::String(value) => format!("the string \"{}\"", value),
        TreeKind::Tuple { tag, args } => format!("a `{}` tuple with {} operand(s)", tag, args.len()),
    }
}

/// Creates a [`MalformedTree`] error pointing at the given node.
fn malformed(tree: &Tree, expected: impl Into<String>) -> Error {
    Error::new(vec![tree.span.clone()], MalformedTree {
        expected: expected.into(),
        found: describe(tree),
    })
}

impl Expr {
    /// Builds an expression from its tagged-tuple form.
    ///
    /// Returns an [`UnknownOperator`] error if a tag is not one of the known operators (see
    /// [`OPERATORS`]), and a [`MalformedTree`] error if a node has the wrong number of operands
    /// or a payload of the wrong type.
    ///
    /// ```
    /// use symdiff_compute::expr::Expr;
    /// use symdiff_parser::tree;
    ///
    /// let expr = Expr::build(&tree!((add, (number, 0), (variable, "x")))).unwrap();
    /// assert_eq!(expr, Expr::add(Expr::number(0.0), Expr::variable("x")));
    /// ```
    pub fn build(tree: &Tree) -> Result<Self, Error> {
        let Some((tag, args)) = tree.as_tuple() else {
            return Err(malformed(tree, "a tagged tuple"));
        };

        let Some(op) = Operator::from_tag(tag) else {
            let suggestions = OPERATORS
                .iter()
                .filter(|name| levenshtein(name, tag) <= 2)
                .map(|name| name.to_string())
                .collect();
            return Err(Error::new(vec![tree.span.clone()], UnknownOperator {
                name: tag.to_string(),
                suggestions,
            }));
        };

        if args.len() != op.arity() {
            return Err(malformed(tree, format!("`{}` with {} operand(s)", tag, op.arity())));
        }

        Ok(match op {
            Operator::Number => {
                let value = args[0].as_number()
                    .ok_or_else(|| malformed(&args[0], "a numeric literal"))?;
                Self::Number(value)
            },
            Operator::Variable => {
                let name = args[0].as_str()
                    .ok_or_else(|| malformed(&args[0], "a variable name string"))?;
                Self::variable(name)
            },
            Operator::Negate => Self::negate(Self::build(&args[0])?),
            Operator::Sin => Self::sin(Self::build(&args[0])?),
            Operator::Cos => Self::cos(Self::build(&args[0])?),
            Operator::Add => Self::add(Self::build(&args[0])?, Self::build(&args[1])?),
            Operator::Multiply => Self::multiply(Self::build(&args[0])?, Self::build(&args[1])?),
        })
    }
}

impl TryFrom<&Tree> for Expr {
    type Error = Error;

    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        Self::build(tree)
    }
}
