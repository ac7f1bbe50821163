use super::Expr;

/// An iterator over an expression and all of its subexpressions, in left-to-right post-order:
/// every node is yielded after its operands.
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    /// Nodes still to be yielded, paired with whether their operands have already been pushed.
    pending: Vec<(&'a Expr, bool)>,
}

impl<'a> ExprIter<'a> {
    /// Creates a post-order iterator rooted at `expr`.
    pub fn new(expr: &'a Expr) -> Self {
        Self { pending: vec![(expr, false)] }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.pending.pop()?;
            if expanded {
                return Some(expr);
            }

            self.pending.push((expr, true));
            match expr {
                Expr::Number(_) | Expr::Variable(_) => (),
                Expr::Negation(operand) | Expr::Sine(operand) | Expr::Cosine(operand) => {
                    self.pending.push((operand, false));
                },
                Expr::Addition(lhs, rhs) | Expr::Multiplication(lhs, rhs) => {
                    // the stack is last-in first-out, so the left operand goes on top
                    self.pending.push((rhs, false));
                    self.pending.push((lhs, false));
                },
            }
        }
    }
}
