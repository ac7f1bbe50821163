//! Tagged-tuple expression trees, the input format of `symdiff`.
//!
//! A tree is a nested tuple whose first element is a tag naming the node, followed by the node's
//! operands: `(add, (number, 0), (variable, "x"))`. Trees can be written directly in Rust source
//! with the [`tree!`] macro, or read from text with the [`Parser`](parser::Parser).
//!
//! This crate only deals with the *shape* of the input. Checking that tags and arities make
//! sense is done when a tree is built into an expression by `symdiff-compute`.

pub mod parser;
pub mod tokenizer;
pub mod tree;

/// Builds a [`Tree`](tree::Tree) from tagged-tuple syntax.
///
/// ```
/// use symdiff_parser::{tree, tree::Tree};
///
/// let tree = tree!((add, (number, 0), (variable, "x")));
/// assert_eq!(tree, Tree::tuple("add", vec![
///     Tree::tuple("number", vec![Tree::number(0.0)]),
///     Tree::tuple("variable", vec![Tree::string("x")]),
/// ]));
/// ```
///
/// Payloads are literals or single identifiers bound to a number or string, as in
/// `tree!((number, n))`. Tags must be identifiers here; use [`Tree::tuple`](tree::Tree::tuple)
/// directly for the symbolic aliases `+`, `-` and `*`.
#[macro_export]
macro_rules! tree {
    (($tag:ident, $lit:literal $(,)?)) => {
        $crate::tree::Tree::tuple(stringify!($tag), vec![$crate::tree::Tree::from($lit)])
    };
    (($tag:ident $(, $arg:tt)* $(,)?)) => {
        $crate::tree::Tree::tuple(stringify!($tag), vec![$($crate::tree!($arg)),*])
    };
    ($value:expr) => {
        $crate::tree::Tree::from($value)
    };
}
