//! Leaf nodes: literal constants and borrowed external values.

use std::fmt;

use crate::expr::Expr;
use crate::node::{Binary, Int, Node, Unary};

/// Node that ignores its arguments and yields a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constant {
    value: Int,
}

impl Constant {
    pub fn new(value: Int) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Int {
        self.value
    }
}

impl Node for Constant {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }

    fn name(&self) -> &'static str {
        "Constant"
    }
}

impl Unary for Constant {
    type Output = Int;

    fn eval1(&self, _arg: Int) -> Int {
        self.value
    }
}

impl Binary for Constant {
    type Output = Int;

    fn eval2(&self, _first: Int, _second: Int) -> Int {
        self.value
    }
}

/// Lift a literal into the expression system.
pub fn constant(value: Int) -> Expr<Constant> {
    Expr(Constant::new(value))
}

/// Non-owning handle to an external mutable value, such as an output sink.
///
/// The holder presents the borrowed value through the node interface so it
/// can sit on the left of `<<`. It is not an evaluating node by itself: the
/// borrow is only reachable through [`RefHolder::resolve`].
pub struct RefHolder<'a, S: ?Sized> {
    held: &'a mut S,
}

impl<'a, S: ?Sized> RefHolder<'a, S> {
    pub fn new(held: &'a mut S) -> Self {
        Self { held }
    }

    /// Return the held value, whatever the argument.
    pub fn resolve(&mut self, _arg: Int) -> &mut S {
        &mut *self.held
    }
}

impl<S: ?Sized> Node for RefHolder<'_, S> {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sink")
    }

    fn name(&self) -> &'static str {
        "RefHolder"
    }
}

impl<S: ?Sized> fmt::Debug for RefHolder<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefHolder")
            .field("type", &std::any::type_name::<S>())
            .finish()
    }
}

/// Borrow an external value for use on the left of `<<`.
///
/// ```ignore
/// let mut out = Vec::new();
/// for_each(&values, hold(&mut out) << _1);
/// ```
pub fn hold<S: ?Sized>(held: &mut S) -> Expr<RefHolder<'_, S>> {
    Expr(RefHolder::new(held))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_ignores_arguments() {
        let c = constant(-12);
        for arg in [-3, 0, 5, Int::MAX] {
            assert_eq!(c.eval1(arg), -12);
            assert_eq!(c.eval2(arg, arg.wrapping_add(1)), -12);
        }
    }

    #[test]
    fn holder_resolves_to_the_borrowed_value() {
        let mut values = vec![1, 2];
        {
            let mut holder = RefHolder::new(&mut values);
            holder.resolve(99).push(3);
            holder.resolve(-1).push(4);
        }
        assert_eq!(values, vec![1, 2, 3, 4]);
    }
}
