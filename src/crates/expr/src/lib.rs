//! Placeholder lambda expressions built from typed expression trees.
//!
//! This crate provides a lazy, statically typed embedded DSL for writing small
//! lambdas with positional placeholders: `_1.lt(_2)`, `_1.assign(100)`,
//! `3 + _1 - 1`. Operators only assemble a tree whose type encodes the whole
//! computation; nothing runs until the tree is invoked with arguments.
//!
//! # Example
//!
//! ```
//! use lambda_expr::{Binary, Unary, WriteBack, _1, _2};
//!
//! let shift = 3 + _1 - 1;
//! assert_eq!(shift.eval1(4), 6);
//!
//! let ascending = _1.lt(_2);
//! assert!(ascending.eval2(1, 2));
//!
//! let fill = _1.assign(100);
//! let mut slot = 7;
//! fill.write_back(&mut slot);
//! assert_eq!(slot, 100);
//! ```
//!
//! Arity is checked at compile time. Arithmetic trees take one argument:
//!
//! ```compile_fail
//! use lambda_expr::{Binary, _1, _2};
//! let _ = (_1 + _2).eval2(1, 2);
//! ```

pub mod expr;
pub mod leaf;
pub mod node;
pub mod ops;
pub mod placeholder;
pub mod sink;


// Re-export main types for convenience
pub use expr::{Expr, IntoExpr};
pub use leaf::{Constant, RefHolder, constant, hold};
pub use node::{
    Binary, DynBinary, DynUnary, Int, Node, Rendered, Unary, UnaryMut, WriteBack, render,
};
pub use ops::{Append, Greater, Less, Minus, Negate, Plus, Times, greater, less};
pub use placeholder::{_1, _2, Assign, First, Second};
pub use sink::{Sink, WriteSink};
