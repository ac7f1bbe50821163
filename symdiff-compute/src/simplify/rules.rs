//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given: its operands must already be
//! simplified.

use crate::{eval::Eval, expr::Expr, step_collector::StepCollector};
use super::step::Step;

/// If the expression is an addition, calls the given transformation function with the left and
/// right-hand side.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
fn do_add(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Addition(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a multiplication, calls the given transformation function with the
/// left and right-hand side.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
fn do_multiply(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Multiplication(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// Records that `step` rewrote `expr`.
fn record(expr: &Expr, step: Step, step_collector: &mut dyn StepCollector<Step>) {
    tracing::trace!(%expr, %step, "applied simplification rule");
    step_collector.push(step);
}

/// Replaces a node whose operands are all exact with its value.
///
/// The operands are simplified, so they are exact exactly when they contain no variables. Only
/// such nodes are evaluated, which means evaluation here cannot hit an unbound variable.
pub fn fold_constant(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let exact_operands = match expr {
        Expr::Number(_) | Expr::Variable(_) => return None,
        Expr::Negation(operand) | Expr::Sine(operand) | Expr::Cosine(operand) => {
            operand.is_constant()
        },
        Expr::Addition(lhs, rhs) | Expr::Multiplication(lhs, rhs) => {
            lhs.is_constant() && rhs.is_constant()
        },
    };
    if !exact_operands {
        return None;
    }

    let value = expr.eval_default().ok()?;
    record(expr, Step::FoldConstant, step_collector);
    Some(Expr::Number(value))
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if *lhs == Expr::ZERO {
            Some(rhs.clone())
        } else if *rhs == Expr::ZERO {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    record(expr, Step::AddZero, step_collector);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
///
/// Only a literal zero operand triggers this rule, so `x*sin(0)` is not rewritten until
/// `sin(0)` has been folded to `0`.
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        (*lhs == Expr::ZERO || *rhs == Expr::ZERO).then_some(Expr::ZERO)
    })?;

    record(expr, Step::MultiplyZero, step_collector);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if *lhs == Expr::ONE {
            Some(rhs.clone())
        } else if *rhs == Expr::ONE {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    record(expr, Step::MultiplyOne, step_collector);
    Some(opt)
}

/// Applies the first rule that matches, in order: constant folding, then the identities for
/// zero and one.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constant(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    #[test]
    fn fold_only_exact_operands() {
        let mut steps = Vec::new();
        let folded = fold_constant(&Expr::add(Expr::number(2.0), Expr::number(3.0)), &mut steps);
        assert_eq!(folded, Some(Expr::number(5.0)));
        assert_eq!(steps, vec![Step::FoldConstant]);

        assert_eq!(fold_constant(&Expr::sin(x()), &mut ()), None);
        assert_eq!(fold_constant(&Expr::number(1.0), &mut ()), None);
    }

    #[test]
    fn zero_identity_before_one() {
        let expr = Expr::multiply(Expr::ONE, Expr::ZERO);
        // fold wins over both identities when everything is exact
        assert_eq!(all(&expr, &mut ()), Some(Expr::ZERO));

        let mut steps = Vec::new();
        let expr = Expr::multiply(Expr::ZERO, x());
        assert_eq!(all(&expr, &mut steps), Some(Expr::ZERO));
        assert_eq!(steps, vec![Step::MultiplyZero]);
    }

    #[test]
    fn rules_ignore_other_variants() {
        assert_eq!(add_zero(&Expr::multiply(Expr::ZERO, x()), &mut ()), None);
        assert_eq!(multiply_one(&Expr::add(Expr::ONE, x()), &mut ()), None);
        assert_eq!(multiply_zero(&Expr::negate(Expr::ZERO), &mut ()), None);
    }

    #[test]
    fn negative_zero_is_zero() {
        let expr = Expr::add(x(), Expr::number(-0.0));
        assert_eq!(add_zero(&expr, &mut ()), Some(x()));
    }
}
