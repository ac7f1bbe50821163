//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into a smaller,
//! semantically equivalent one. Simplification works bottom-up: the operands of a node are
//! simplified first, then the rules in [`rules`] are tried on the node itself, in this order:
//!
//! 1. If every operand is exact, the node is evaluated and replaced by its value.
//! 2. `0+a = a` and `a+0 = a`.
//! 3. `0*a = 0` and `a*0 = 0`.
//! 4. `1*a = a` and `a*1 = a`.
//!
//! Because the identity checks only look at simplified operands, and constant folding is tried
//! first, `2 + 3` folds to `5` instead of being treated as a sum with no zero term.
//!
//! The result is a fixed point: simplifying an already simplified expression returns it
//! unchanged. For every environment that binds the expression's variables, the simplified
//! expression evaluates to the same value as the original (as long as no operand multiplied by
//! zero evaluates to a non-finite number).

pub mod rules;
pub mod step;

use crate::{expr::Expr, step_collector::StepCollector};
use step::Step;

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let expr = match expr {
        Expr::Number(_) | Expr::Variable(_) => return expr.clone(),
        Expr::Negation(operand) => Expr::negate(inner_simplify(operand, step_collector)),
        Expr::Sine(operand) => Expr::sin(inner_simplify(operand, step_collector)),
        Expr::Cosine(operand) => Expr::cos(inner_simplify(operand, step_collector)),
        Expr::Addition(lhs, rhs) => Expr::add(
            inner_simplify(lhs, step_collector),
            inner_simplify(rhs, step_collector),
        ),
        Expr::Multiplication(lhs, rhs) => Expr::multiply(
            inner_simplify(lhs, step_collector),
            inner_simplify(rhs, step_collector),
        ),
    };

    // every rule returns either a number or one of the simplified operands, so one pass over
    // this node is enough
    rules::all(&expr, step_collector).unwrap_or(expr)
}

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied. This is useful for debugging, and also for
/// displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps);
    (expr, steps)
}

impl Expr {
    /// Simplify this expression. See [`simplify`].
    pub fn simplify(&self) -> Expr {
        simplify(self)
    }
}
