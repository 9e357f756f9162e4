//! Arithmetic operations for the placeholder lambda DSL.
//!
//! Arithmetic trees are single-argument lambdas: `3 + _1 - 1` evaluates as
//! `|a| 3 + a - 1`. There is no two-argument form, so using one as a
//! comparator is a compile error. Results wrap on `i32` overflow.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::expr::{Expr, IntoExpr};
use crate::leaf::Constant;
use crate::node::{Int, Node, Unary};

/// Node that adds the results of its two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plus<L, R> {
    left: L,
    right: R,
}

/// Node that subtracts its right child's result from its left child's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Minus<L, R> {
    left: L,
    right: R,
}

/// Node that multiplies the results of its two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Times<L, R> {
    left: L,
    right: R,
}

macro_rules! arith_node {
    ($node:ident, $symbol:literal, $apply:ident) => {
        impl<L, R> $node<L, R> {
            pub fn new(left: L, right: R) -> Self {
                Self { left, right }
            }

            pub fn left(&self) -> &L {
                &self.left
            }

            pub fn right(&self) -> &R {
                &self.right
            }
        }

        impl<L: Node, R: Node> Node for $node<L, R> {
            fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("(")?;
                self.left.describe(f)?;
                f.write_str(concat!(" ", $symbol, " "))?;
                self.right.describe(f)?;
                f.write_str(")")
            }

            fn name(&self) -> &'static str {
                stringify!($node)
            }
        }

        impl<L, R> Unary for $node<L, R>
        where
            L: Unary<Output = Int>,
            R: Unary<Output = Int>,
        {
            type Output = Int;

            fn eval1(&self, arg: Int) -> Int {
                self.left.eval1(arg).$apply(self.right.eval1(arg))
            }
        }
    };
}

arith_node!(Plus, "+", wrapping_add);
arith_node!(Minus, "-", wrapping_sub);
arith_node!(Times, "*", wrapping_mul);

// Operator factories. The right operand may be another expression or a
// literal; a literal on the left is covered by the `Int` impls below.
macro_rules! arith_operator {
    ($trait:ident, $method:ident, $node:ident) => {
        impl<L: Node, R: IntoExpr> $trait<R> for Expr<L> {
            type Output = Expr<$node<L, R::Target>>;

            fn $method(self, rhs: R) -> Self::Output {
                Expr($node::new(self.0, rhs.into_expr().0))
            }
        }

        impl<R: Node> $trait<Expr<R>> for Int {
            type Output = Expr<$node<Constant, R>>;

            fn $method(self, rhs: Expr<R>) -> Self::Output {
                Expr($node::new(Constant::new(self), rhs.0))
            }
        }
    };
}

arith_operator!(Add, add, Plus);
arith_operator!(Sub, sub, Minus);
arith_operator!(Mul, mul, Times);
