//! Arithmetic negation for the placeholder lambda DSL.

use std::fmt;
use std::ops::Neg;

use crate::expr::Expr;
use crate::node::{Binary, Int, Node, Unary};

/// Node that negates its input.
///
/// Available in whichever arities the input supports. Negating `i32::MIN`
/// wraps to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Negate<N> {
    input: N,
}

impl<N> Negate<N> {
    pub fn new(input: N) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &N {
        &self.input
    }
}

impl<N: Node> Node for Negate<N> {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("-")?;
        self.input.describe(f)
    }

    fn name(&self) -> &'static str {
        "Negate"
    }
}

impl<N: Unary<Output = Int>> Unary for Negate<N> {
    type Output = Int;

    fn eval1(&self, arg: Int) -> Int {
        self.input.eval1(arg).wrapping_neg()
    }
}

impl<N: Binary<Output = Int>> Binary for Negate<N> {
    type Output = Int;

    fn eval2(&self, first: Int, second: Int) -> Int {
        self.input.eval2(first, second).wrapping_neg()
    }
}

impl<N: Node> Neg for Expr<N> {
    type Output = Expr<Negate<N>>;

    fn neg(self) -> Self::Output {
        Expr(Negate::new(self.0))
    }
}

#[cfg(test)]
mod tests {
    use crate::placeholder::{_1, _2};
    use crate::{Binary, Unary};

    #[test]
    fn negates_in_both_arities() {
        assert_eq!((-_1).eval1(4), -4);
        assert_eq!((-_2).eval2(4, 9), -9);
        assert_eq!((-_1).eval1(i32::MIN), i32::MIN);
    }

    #[test]
    fn negated_placeholder_flips_a_comparator() {
        let descending = (-_1).lt(-_2);
        assert!(descending.eval2(9, 4));
        assert!(!descending.eval2(4, 9));
        assert_eq!(descending.to_string(), "(-_1 < -_2)");
    }
}
