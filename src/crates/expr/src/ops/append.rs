//! Stream-style output for the placeholder lambda DSL.
//!
//! `hold(&mut sink) << _1` builds a single-argument lambda that appends its
//! argument to `sink`, the way `std::cout << _1` reads in a lambda library.
//! Any integer-valued tree may stand on the right: `hold(&mut out) << _1 * 2`.

use std::fmt;
use std::ops::Shl;

use crate::expr::{Expr, IntoExpr};
use crate::leaf::RefHolder;
use crate::node::{Int, Node, Unary, UnaryMut};
use crate::sink::Sink;

/// Node that appends the right child's result to the sink on the left.
#[derive(Debug)]
pub struct Append<L, R> {
    target: L,
    value: R,
}

impl<L, R> Append<L, R> {
    pub fn new(target: L, value: R) -> Self {
        Self { target, value }
    }

    pub fn value(&self) -> &R {
        &self.value
    }
}

impl<L: Node, R: Node> Node for Append<L, R> {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.target.describe(f)?;
        f.write_str(" << ")?;
        self.value.describe(f)
    }

    fn name(&self) -> &'static str {
        "Append"
    }
}

impl<S, R> UnaryMut for Append<RefHolder<'_, S>, R>
where
    S: Sink + ?Sized,
    R: Unary<Output = Int>,
{
    type Output = ();

    fn eval_mut(&mut self, arg: Int) {
        let value = self.value.eval1(arg);
        self.target.resolve(arg).append(value);
    }
}

impl<'a, S, R> Shl<R> for Expr<RefHolder<'a, S>>
where
    S: Sink + ?Sized,
    R: IntoExpr,
{
    type Output = Expr<Append<RefHolder<'a, S>, R::Target>>;

    fn shl(self, rhs: R) -> Self::Output {
        Expr(Append::new(self.0, rhs.into_expr().0))
    }
}
