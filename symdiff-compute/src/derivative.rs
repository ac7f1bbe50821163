//! Symbolic differentiation.
//!
//! [`derive_raw`] applies the differentiation rules directly, producing a correct but cluttered
//! expression (`1*x + x*1` for the derivative of `x*x`). [`derivative`] passes that result
//! through [`simplify`], which is what callers normally want.
//!
//! Variables other than the one being differentiated with respect to are treated as constants.

use crate::{expr::Expr, simplify::simplify};

/// `(f + g)' = f' + g'`
fn sum_rule(f: &Expr, g: &Expr, with: &str) -> Expr {
    Expr::add(derive_raw(f, with), derive_raw(g, with))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(f: &Expr, g: &Expr, with: &str) -> Expr {
    Expr::add(
        Expr::multiply(derive_raw(f, with), g.clone()),
        Expr::multiply(f.clone(), derive_raw(g, with)),
    )
}

/// Computes the derivative of the given expression without simplifying the result.
pub fn derive_raw(f: &Expr, with: &str) -> Expr {
    match f {
        Expr::Number(_) => Expr::ZERO,
        Expr::Variable(name) => {
            if name == with {
                Expr::ONE
            } else {
                Expr::ZERO
            }
        },
        Expr::Negation(operand) => Expr::negate(derive_raw(operand, with)),
        // chain rule: sin(u)' = u' * cos(u)
        Expr::Sine(operand) => Expr::multiply(
            derive_raw(operand, with),
            Expr::cos((**operand).clone()),
        ),
        // chain rule: cos(u)' = u' * -sin(u)
        Expr::Cosine(operand) => Expr::multiply(
            derive_raw(operand, with),
            Expr::negate(Expr::sin((**operand).clone())),
        ),
        Expr::Addition(lhs, rhs) => sum_rule(lhs, rhs, with),
        Expr::Multiplication(lhs, rhs) => product_rule(lhs, rhs, with),
    }
}

/// Computes the derivative of the given expression with respect to the variable `with`, and
/// simplifies the result.
#[tracing::instrument(level = "debug", skip(f), fields(f = %f))]
pub fn derivative(f: &Expr, with: &str) -> Expr {
    let result = simplify(&derive_raw(f, with));
    tracing::debug!(%result, "computed derivative");
    result
}

/// Computes the `n`-th derivative of the given expression with respect to the variable `with`.
/// The zeroth derivative is the simplified expression itself.
pub fn nth_derivative(f: &Expr, with: &str, n: usize) -> Expr {
    (0..n).fold(simplify(f), |acc, _| derivative(&acc, with))
}

impl Expr {
    /// Computes the simplified derivative of this expression with respect to `with`. See
    /// [`derivative`].
    pub fn derive(&self, with: &str) -> Expr {
        derivative(self, with)
    }

    /// Computes the `n`-th derivative of this expression with respect to `with`. See
    /// [`nth_derivative`].
    pub fn derive_n(&self, with: &str, n: usize) -> Expr {
        nth_derivative(self, with, n)
    }
}

#[cfg(test)]
mod tests {
    use crate::{env::Env, eval::Eval};
    use pretty_assertions::assert_eq;
    use symdiff_parser::{tree, tree::Tree};
    use super::*;

    /// Builds the expression for the given tree.
    fn build(tree: Tree) -> Expr {
        Expr::build(&tree).unwrap()
    }

    /// Boilerplate helper function for evaluating an expression and substituting in "x".
    fn eval_x(e: &Expr, x: f64) -> f64 {
        e.eval(&Env::from([("x", x)])).unwrap()
    }

    /// Performs central finite difference to approximate the derivative of the provided
    /// expression.
    fn finite_difference(e: &Expr, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        (eval_x(e, x + DX) - eval_x(e, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: Tree, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.0001;

        let expr = build(function);
        let symbolic = derivative(&expr, "x");

        for point in points.into_iter() {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(&expr, point);

            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "For \"{expr}\" at x={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}",
            );
        }
    }

    #[test]
    fn constant() {
        assert_eq!(derivative(&build(tree!((number, 5))), "x"), build(tree!((number, 0))));
    }

    #[test]
    fn variable() {
        let x = build(tree!((variable, "x")));
        assert_eq!(derivative(&x, "x"), build(tree!((number, 1))));
        assert_eq!(derivative(&x, "y"), build(tree!((number, 0))));
    }

    #[test]
    fn sine() {
        assert_eq!(
            derivative(&build(tree!((sin, (variable, "x")))), "x"),
            build(tree!((cos, (variable, "x")))),
        );
    }

    #[test]
    fn cosine() {
        assert_eq!(
            derivative(&build(tree!((cos, (variable, "x")))), "x"),
            build(tree!((negate, (sin, (variable, "x"))))),
        );
    }

    #[test]
    fn negation() {
        assert_eq!(
            derivative(&build(tree!((negate, (sin, (variable, "x"))))), "x"),
            build(tree!((negate, (cos, (variable, "x"))))),
        );
    }

    #[test]
    fn product_of_same_variable() {
        assert_eq!(
            derivative(&build(tree!((multiply, (variable, "x"), (variable, "x")))), "x"),
            build(tree!((add, (variable, "x"), (variable, "x")))),
        );
    }

    #[test]
    fn linear() {
        assert_eq!(
            derivative(&build(tree!((add, (multiply, (number, 2), (variable, "x")), (number, 3)))), "x"),
            build(tree!((number, 2))),
        );
    }

    #[test]
    fn raw_is_unsimplified() {
        let expr = build(tree!((multiply, (variable, "x"), (variable, "x"))));
        assert_eq!(
            derive_raw(&expr, "x"),
            build(tree!((add,
                (multiply, (number, 1), (variable, "x")),
                (multiply, (variable, "x"), (number, 1))
            ))),
        );
    }

    #[test]
    fn chain_rule_keeps_original_operand() {
        // sin(2x)' = 2 * cos(2x)
        let expr = build(tree!((sin, (multiply, (number, 2), (variable, "x")))));
        assert_eq!(
            derivative(&expr, "x"),
            build(tree!((multiply, (number, 2), (cos, (multiply, (number, 2), (variable, "x")))))),
        );
    }

    #[test]
    fn other_variables_are_constant() {
        // (x*y)' = y with respect to x
        let expr = build(tree!((multiply, (variable, "x"), (variable, "y"))));
        assert_eq!(derivative(&expr, "x"), build(tree!((variable, "y"))));
        assert_eq!(derivative(&expr, "z"), Expr::ZERO);
    }

    #[test]
    fn higher_order() {
        let expr = build(tree!((sin, (variable, "x"))));
        assert_eq!(nth_derivative(&expr, "x", 0), expr);
        assert_eq!(
            nth_derivative(&expr, "x", 2),
            build(tree!((negate, (sin, (variable, "x"))))),
        );
        assert_eq!(
            expr.derive_n("x", 3),
            build(tree!((negate, (cos, (variable, "x"))))),
        );
    }

    #[test]
    fn matches_finite_difference() {
        test_for_function(
            tree!((add, (multiply, (variable, "x"), (variable, "x")), (add, (variable, "x"), (number, 1)))),
            [0., 1., 2., 5., 8.],
        );
        test_for_function(
            tree!((multiply, (sin, (variable, "x")), (cos, (multiply, (number, 3), (variable, "x"))))),
            [-2., -0.3, 0., 0.7, 1.9],
        );
        test_for_function(
            tree!((negate, (cos, (cos, (add, (variable, "x"), (number, 0.25)))))),
            [-1., 0., 0.5, 3.],
        );
    }
}
