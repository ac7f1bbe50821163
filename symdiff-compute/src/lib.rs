//! Evaluation, simplification and symbolic differentiation of expressions.
//!
//! Expressions are built from the tagged-tuple [`Tree`](symdiff_parser::tree::Tree) produced by
//! `symdiff-parser`, then evaluated with [`Eval`], simplified with [`simplify`], or differentiated
//! with [`derivative`].
//!
//! ```
//! use symdiff_compute::{Env, Eval, Expr};
//! use symdiff_parser::tree;
//!
//! let expr = Expr::build(&tree!((multiply, (variable, "x"), (variable, "x")))).unwrap();
//! assert_eq!(expr.derive("x").to_string(), "(x + x)");
//! assert_eq!(expr.eval(&Env::from([("x", 3.0)])).unwrap(), 9.0);
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for [`Expr`] and [`Env`].

pub mod derivative;
pub mod env;
pub mod error;
pub mod eval;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, derive_raw, nth_derivative};
pub use env::Env;
pub use eval::Eval;
pub use expr::Expr;
pub use simplify::{simplify, simplify_with_steps, step::Step};
pub use step_collector::StepCollector;
