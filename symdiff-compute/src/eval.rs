//! Numeric evaluation and exactness.

use crate::{env::Env, error::UnboundVariable, expr::Expr};
use symdiff_error::Error;

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given environment to look up
    /// variables.
    fn eval(&self, env: &Env) -> Result<f64, Error>;

    /// Evaluate the expression to produce a number, using an empty environment. This fails if
    /// the expression references any variable.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Env::default())
    }
}

impl Eval for Expr {
    /// Both operands of a binary node are always evaluated, so evaluation fails if either one
    /// references an unbound variable, even if the other is zero.
    fn eval(&self, env: &Env) -> Result<f64, Error> {
        Ok(match self {
            Self::Number(value) => *value,
            Self::Variable(name) => env.get_var(name).ok_or_else(|| {
                Error::new(vec![], UnboundVariable { name: name.clone() })
            })?,
            Self::Negation(operand) => -operand.eval(env)?,
            Self::Sine(operand) => operand.eval(env)?.sin(),
            Self::Cosine(operand) => operand.eval(env)?.cos(),
            Self::Addition(lhs, rhs) => lhs.eval(env)? + rhs.eval(env)?,
            Self::Multiplication(lhs, rhs) => lhs.eval(env)? * rhs.eval(env)?,
        })
    }
}

impl Expr {
    /// Returns true if the value of the expression does not depend on any variable binding.
    ///
    /// A number is exact; a variable is not. A unary node is exact if its operand is exact. A
    /// binary node is exact if both of its operands are exact **after simplification**, so
    /// `x * 0` is not exact on its own (the simplified `x` operand is not exact), but
    /// `x * 0 + 1` is, because `x * 0` simplifies to `0`.
    pub fn is_exact(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Variable(_) => false,
            Self::Negation(operand) | Self::Sine(operand) | Self::Cosine(operand) => {
                operand.is_exact()
            },
            // a simplified expression is exact iff it contains no variables
            Self::Addition(lhs, rhs) | Self::Multiplication(lhs, rhs) => {
                lhs.simplify().is_constant() && rhs.simplify().is_constant()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
    use symdiff_parser::tree;
    use super::*;

    /// Builds the expression for the given tree.
    fn build(tree: symdiff_parser::tree::Tree) -> Expr {
        Expr::build(&tree).unwrap()
    }

    #[test]
    fn number() {
        for n in [0.0, -3.5, 16.0, 1e-9] {
            assert_eq!(Expr::Number(n).eval_default().unwrap(), n);
        }
    }

    #[test]
    fn variable() {
        let expr = build(tree!((variable, "x")));
        let env = Env::from([("x", 4.25)]);
        assert_eq!(expr.eval(&env).unwrap(), 4.25);
    }

    #[test]
    fn unbound_variable() {
        let expr = build(tree!((variable, "x")));
        let err = expr.eval(&Env::from([("y", 1.0)])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnboundVariable>(),
            Some(&UnboundVariable { name: "x".to_string() }),
        );
    }

    #[test]
    fn no_short_circuit_on_zero() {
        let expr = build(tree!((multiply, (number, 0), (variable, "x"))));
        assert!(expr.eval_default().unwrap_err().is::<UnboundVariable>());
    }

    #[test]
    fn arithmetic_and_trig() {
        // -(2 * x) + sin(x) * cos(y)
        let expr = build(tree!((add,
            (negate, (multiply, (number, 2), (variable, "x"))),
            (multiply, (sin, (variable, "x")), (cos, (variable, "y")))
        )));
        let env = Env::new().with_var("x", 0.5).with_var("y", 2.0);
        let expected = -(2.0 * 0.5) + 0.5_f64.sin() * 2.0_f64.cos();
        assert_float_absolute_eq!(expr.eval(&env).unwrap(), expected, 1e-12);
    }

    #[test]
    fn trig_uses_radians() {
        let expr = build(tree!((sin, (number, 3.141592653589793))));
        assert_float_absolute_eq!(expr.eval_default().unwrap(), 0.0, 1e-12);
    }

    #[test]
    fn exactness() {
        assert!(build(tree!((number, 3))).is_exact());
        assert!(!build(tree!((variable, "x"))).is_exact());
        assert!(build(tree!((sin, (add, (number, 1), (number, 2))))).is_exact());
        assert!(!build(tree!((cos, (variable, "x")))).is_exact());
        assert!(!build(tree!((multiply, (variable, "x"), (number, 0)))).is_exact());
        assert!(build(tree!((add, (multiply, (variable, "x"), (number, 0)), (number, 1)))).is_exact());
    }
}
