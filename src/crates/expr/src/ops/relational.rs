//! Comparison operations for the placeholder lambda DSL.
//!
//! Rust's `<` and `>` must return `bool`, so comparisons are built with the
//! `lt`/`gt` methods on [`Expr`] or the free [`less`]/[`greater`] factories.
//!
//! `Less` only has the two-argument form and is meant as a sort comparator.
//! `Greater` also works as a one-argument predicate. Using `Less` as a
//! predicate is rejected at compile time:
//!
//! ```compile_fail
//! use lambda_expr::{Unary, _1};
//! let _ = _1.lt(3).eval1(5);
//! ```

use std::fmt;

use crate::expr::{Expr, IntoExpr};
use crate::node::{Binary, Int, Node, Unary};

/// Node comparing its children with `<`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Less<L, R> {
    lhs: L,
    rhs: R,
}

/// Node comparing its children with `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Greater<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> Less<L, R> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

impl<L, R> Greater<L, R> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

fn describe_pair<L: Node, R: Node>(
    f: &mut fmt::Formatter<'_>,
    lhs: &L,
    symbol: &str,
    rhs: &R,
) -> fmt::Result {
    f.write_str("(")?;
    lhs.describe(f)?;
    write!(f, " {} ", symbol)?;
    rhs.describe(f)?;
    f.write_str(")")
}

impl<L: Node, R: Node> Node for Less<L, R> {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe_pair(f, &self.lhs, "<", &self.rhs)
    }

    fn name(&self) -> &'static str {
        "Less"
    }
}

impl<L, R> Binary for Less<L, R>
where
    L: Binary<Output = Int>,
    R: Binary<Output = Int>,
{
    type Output = bool;

    fn eval2(&self, first: Int, second: Int) -> bool {
        self.lhs.eval2(first, second) < self.rhs.eval2(first, second)
    }
}

impl<L: Node, R: Node> Node for Greater<L, R> {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe_pair(f, &self.lhs, ">", &self.rhs)
    }

    fn name(&self) -> &'static str {
        "Greater"
    }
}

impl<L, R> Unary for Greater<L, R>
where
    L: Unary<Output = Int>,
    R: Unary<Output = Int>,
{
    type Output = bool;

    fn eval1(&self, arg: Int) -> bool {
        self.lhs.eval1(arg) > self.rhs.eval1(arg)
    }
}

impl<L, R> Binary for Greater<L, R>
where
    L: Binary<Output = Int>,
    R: Binary<Output = Int>,
{
    type Output = bool;

    fn eval2(&self, first: Int, second: Int) -> bool {
        self.lhs.eval2(first, second) > self.rhs.eval2(first, second)
    }
}

/// Build `lhs < rhs`.
pub fn less<L: IntoExpr, R: IntoExpr>(lhs: L, rhs: R) -> Expr<Less<L::Target, R::Target>> {
    Expr(Less::new(lhs.into_expr().0, rhs.into_expr().0))
}

/// Build `lhs > rhs`.
pub fn greater<L: IntoExpr, R: IntoExpr>(lhs: L, rhs: R) -> Expr<Greater<L::Target, R::Target>> {
    Expr(Greater::new(lhs.into_expr().0, rhs.into_expr().0))
}

// Extension methods on Expr
impl<N: Node> Expr<N> {
    /// Compare with `<`. Same as `less(self, rhs)`.
    pub fn lt<R: IntoExpr>(self, rhs: R) -> Expr<Less<N, R::Target>> {
        less(self, rhs)
    }

    /// Compare with `>`. Same as `greater(self, rhs)`.
    pub fn gt<R: IntoExpr>(self, rhs: R) -> Expr<Greater<N, R::Target>> {
        greater(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::{_1, _2};

    #[test]
    fn less_compares_argument_positions() {
        let ascending = _1.lt(_2);
        assert!(ascending.eval2(1, 2));
        assert!(!ascending.eval2(2, 1));
        assert!(!ascending.eval2(3, 3));

        let descending = _2.lt(_1);
        assert!(descending.eval2(2, 1));
        assert!(!descending.eval2(1, 2));
    }

    #[test]
    fn greater_in_both_arities() {
        let above_three = _1.gt(3);
        assert!(above_three.eval1(4));
        assert!(!above_three.eval1(3));

        let descending = _1.gt(_2);
        assert!(descending.eval2(5, 1));
        assert!(!descending.eval2(1, 5));
    }

    #[test]
    fn free_factories_accept_literals() {
        assert!(less(1, _1).eval2(2, 0));
        assert!(greater(_1 + 1, 5).eval1(5));
        assert_eq!(greater(_1 + 1, 5).to_string(), "((_1 + 1) > 5)");
    }
}
