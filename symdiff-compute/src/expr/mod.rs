//! The symbolic expression type.
//!
//! An [`Expr`] is an immutable tree over a closed set of variants: numbers, variables, negation,
//! sine, cosine, addition and multiplication. Every transformation in this crate returns a new
//! [`Expr`] instead of mutating its input.
//!
//! # Structural equality
//!
//! The [`PartialEq`] implementation for [`Expr`] is **structural**: two expressions are equal if
//! they are the same variant and all of their fields / children are (recursively) equal. No
//! attempt is made to detect semantic equality, so `x + 0` and `x` are not equal until the former
//! is simplified. Numbers compare with `f64` equality, meaning `-0` equals `0` and `NaN` equals
//! nothing.
//!
//! ```
//! use symdiff_compute::expr::Expr;
//!
//! assert_eq!(Expr::number(2.0), Expr::number(2.0));
//! assert_ne!(Expr::number(2.0), Expr::variable("2.0"));
//! ```

mod build;
mod iter;

pub use build::OPERATORS;
use iter::ExprIter;
use std::{fmt, ops::{Add, Mul, Neg}};
use symdiff_parser::tree::Tree;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A symbolic expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal constant, such as `2` or `0.5`.
    Number(f64),

    /// A free variable, such as `x`.
    Variable(String),

    /// The negation of an expression, `-a`.
    Negation(Box<Expr>),

    /// The sine of an expression, in radians.
    Sine(Box<Expr>),

    /// The cosine of an expression, in radians.
    Cosine(Box<Expr>),

    /// Two expressions added together.
    Addition(Box<Expr>, Box<Expr>),

    /// Two expressions multiplied together.
    Multiplication(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// The number zero.
    pub const ZERO: Expr = Expr::Number(0.0);

    /// The number one.
    pub const ONE: Expr = Expr::Number(1.0);

    /// Creates a number.
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates the negation `-a`. No simplification is done.
    pub fn negate(a: Expr) -> Self {
        Self::Negation(Box::new(a))
    }

    /// Creates `sin(a)`. No simplification is done.
    pub fn sin(a: Expr) -> Self {
        Self::Sine(Box::new(a))
    }

    /// Creates `cos(a)`. No simplification is done.
    pub fn cos(a: Expr) -> Self {
        Self::Cosine(Box::new(a))
    }

    /// Creates the sum `a + b`. No simplification is done.
    pub fn add(a: Expr, b: Expr) -> Self {
        Self::Addition(Box::new(a), Box::new(b))
    }

    /// Creates the product `a * b`. No simplification is done.
    pub fn multiply(a: Expr, b: Expr) -> Self {
        Self::Multiplication(Box::new(a), Box::new(b))
    }

    /// If the expression is a [`Expr::Number`], returns the contained number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Variable`], returns the name of the variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if no variable appears anywhere in the expression.
    ///
    /// This is purely structural; see [`Expr::is_exact`] for the exactness test,
    /// which also accounts for variables that simplification removes.
    pub fn is_constant(&self) -> bool {
        self.post_order_iter().all(|expr| !matches!(expr, Self::Variable(_)))
    }

    /// Returns the names of the variables that appear in the expression, in order of first
    /// appearance and without duplicates.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for name in self.post_order_iter().filter_map(Self::as_variable) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Converts the expression back into its tagged-tuple form.
    ///
    /// Building the returned tree gives back an expression equal to `self`.
    pub fn to_tree(&self) -> Tree {
        match self {
            Self::Number(value) => Tree::tuple("number", vec![Tree::number(*value)]),
            Self::Variable(name) => Tree::tuple("variable", vec![Tree::string(name.as_str())]),
            Self::Negation(operand) => Tree::tuple("negate", vec![operand.to_tree()]),
            Self::Sine(operand) => Tree::tuple("sin", vec![operand.to_tree()]),
            Self::Cosine(operand) => Tree::tuple("cos", vec![operand.to_tree()]),
            Self::Addition(lhs, rhs) => Tree::tuple("add", vec![lhs.to_tree(), rhs.to_tree()]),
            Self::Multiplication(lhs, rhs) => {
                Tree::tuple("multiply", vec![lhs.to_tree(), rhs.to_tree()])
            },
        }
    }
}

/// Formats the expression in fully parenthesized infix form: `-a`, `sin(a)`, `cos(a)`,
/// `(a + b)` and `(a * b)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Negation(operand) => write!(f, "-{}", operand),
            Self::Sine(operand) => write!(f, "sin({})", operand),
            Self::Cosine(operand) => write!(f, "cos({})", operand),
            Self::Addition(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Self::Multiplication(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::variable(name)
    }
}

/// Sugar for [`Expr::add`].
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::add(self, rhs)
    }
}

/// Sugar for [`Expr::multiply`].
impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::multiply(self, rhs)
    }
}

/// Sugar for [`Expr::negate`].
impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::negate(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    #[test]
    fn operators_build_nodes() {
        let expr = -(Expr::number(2.0) * x()) + Expr::sin(x());
        assert_eq!(expr, Expr::add(
            Expr::negate(Expr::multiply(Expr::number(2.0), x())),
            Expr::sin(x()),
        ));
    }

    #[test]
    fn display() {
        let expr = Expr::add(
            Expr::multiply(Expr::number(2.0), x()),
            Expr::negate(Expr::cos(Expr::number(0.5))),
        );
        assert_eq!(expr.to_string(), "((2 * x) + -cos(0.5))");
    }

    #[test]
    fn structural_equality() {
        assert_eq!(Expr::ZERO, Expr::number(-0.0));
        assert_ne!(Expr::add(x(), Expr::ZERO), x());
        assert_ne!(Expr::add(x(), Expr::ONE), Expr::add(Expr::ONE, x()));
    }

    #[test]
    fn constant_and_variables() {
        let expr = Expr::multiply(Expr::add(x(), Expr::variable("y")), Expr::sin(x()));
        assert!(!expr.is_constant());
        assert_eq!(expr.variables(), vec!["x", "y"]);
        assert!(Expr::cos(Expr::add(Expr::ONE, Expr::ONE)).is_constant());
    }

    #[test]
    fn post_order() {
        let expr = Expr::add(Expr::negate(x()), Expr::ONE);
        let visited = expr.post_order_iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(visited, vec!["x", "-x", "1", "(-x + 1)"]);
    }
}
