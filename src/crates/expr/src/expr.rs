//! Typed expression handles for the placeholder lambda DSL.
//!
//! This module defines `Expr<N>`, the handle every factory returns. The type
//! parameter `N` is the concrete node, so the static type of an `Expr` spells
//! out the whole expression tree.

use std::fmt;

use crate::leaf::Constant;
use crate::node::{Binary, DynBinary, DynUnary, Int, Node, Unary, UnaryMut, WriteBack};

/// A typed handle to the root of an expression tree.
///
/// `Expr<N>` is the primary type users interact with when building lambdas.
/// Operators are implemented on `Expr` rather than on the nodes themselves,
/// and an `Expr` forwards exactly the invocation traits its node implements.
///
/// # Cloning
///
/// `Expr` is `Copy` whenever its node is. Trees holding a sink by reference
/// are move-only.
///
/// # Example
///
/// ```ignore
/// let add: Expr<Minus<Plus<Constant, First>, Constant>> = 3 + _1 - 1;
/// let less: Expr<Less<First, Second>> = _1.lt(_2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Expr<N>(pub(crate) N);

impl<N: Node> Expr<N> {
    /// Wrap a node in an expression handle.
    pub fn new(node: N) -> Self {
        Self(node)
    }

    /// Borrow the concrete node.
    pub fn node(&self) -> &N {
        &self.0
    }

    /// Mutably borrow the concrete node.
    pub fn node_mut(&mut self) -> &mut N {
        &mut self.0
    }

    /// Unwrap into the concrete node.
    pub fn into_node(self) -> N {
        self.0
    }
}

impl<N> AsRef<N> for Expr<N> {
    fn as_ref(&self) -> &N {
        &self.0
    }
}

impl<N> AsMut<N> for Expr<N> {
    fn as_mut(&mut self) -> &mut N {
        &mut self.0
    }
}

impl<N: 'static> Expr<N> {
    /// Erase the tree's type so single-argument lambdas of different shapes
    /// can be stored or selected at run time.
    pub fn into_dyn_unary(self) -> Expr<DynUnary<N::Output>>
    where
        N: Unary,
    {
        Expr(Box::new(self.0))
    }

    /// Erase the tree's type so comparators of different shapes can be
    /// selected at run time.
    pub fn into_dyn_binary(self) -> Expr<DynBinary<N::Output>>
    where
        N: Binary,
    {
        Expr(Box::new(self.0))
    }
}

/// Conversion of an operand into an expression.
///
/// Implemented for `Expr<N>` (identity) and for `Int` literals, which become
/// `Constant` leaves. Factories accept `impl IntoExpr` so literals and trees
/// can be mixed freely.
pub trait IntoExpr {
    type Target: Node;

    fn into_expr(self) -> Expr<Self::Target>;
}

impl<N: Node> IntoExpr for Expr<N> {
    type Target = N;

    fn into_expr(self) -> Expr<N> {
        self
    }
}

impl IntoExpr for Int {
    type Target = Constant;

    fn into_expr(self) -> Expr<Constant> {
        Expr(Constant::new(self))
    }
}

impl From<Int> for Expr<Constant> {
    fn from(value: Int) -> Self {
        value.into_expr()
    }
}

impl<N: Node> Node for Expr<N> {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe(f)
    }

    fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl<N: Unary> Unary for Expr<N> {
    type Output = N::Output;

    fn eval1(&self, arg: Int) -> N::Output {
        self.0.eval1(arg)
    }
}

impl<N: Binary> Binary for Expr<N> {
    type Output = N::Output;

    fn eval2(&self, first: Int, second: Int) -> N::Output {
        self.0.eval2(first, second)
    }
}

impl<N: UnaryMut> UnaryMut for Expr<N> {
    type Output = N::Output;

    fn eval_mut(&mut self, arg: Int) -> N::Output {
        self.0.eval_mut(arg)
    }
}

impl<N: WriteBack> WriteBack for Expr<N> {
    fn write_back(&self, slot: &mut Int) -> Int {
        self.0.write_back(slot)
    }
}

impl<N: Node> fmt::Display for Expr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe(f)
    }
}

impl<N: Node> fmt::Debug for Expr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expr")
            .field("node", &self.0.name())
            .field("tree", &format_args!("{}", self))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::placeholder::{_1, _2};
    use crate::{Binary, Expr, IntoExpr, Node, Unary};

    #[test]
    fn literal_becomes_constant_leaf() {
        let seven = 7_i32.into_expr();
        assert_eq!(seven.eval1(0), 7);
        assert_eq!(seven.eval2(1, 2), 7);
        assert_eq!(seven.to_string(), "7");
    }

    #[test]
    fn display_renders_the_whole_tree() {
        let add = 3 + _1 - 1;
        assert_eq!(add.to_string(), "((3 + _1) - 1)");
        assert_eq!(_2.lt(_1).to_string(), "(_2 < _1)");
    }

    #[test]
    fn debug_names_the_root() {
        let rendered = format!("{:?}", _1.lt(_2));
        assert!(rendered.contains("Less"));
        assert!(rendered.contains("(_1 < _2)"));
    }

    #[test]
    fn erased_comparators_share_a_type() {
        let comparators: Vec<Expr<_>> = vec![
            _1.lt(_2).into_dyn_binary(),
            _2.lt(_1).into_dyn_binary(),
        ];
        assert!(comparators[0].eval2(1, 2));
        assert!(!comparators[1].eval2(1, 2));
        assert_eq!(comparators[1].to_string(), "(_2 < _1)");
    }

    #[test]
    fn erased_unary_keeps_behaviour() {
        let shifted = (3 + _1 - 1).into_dyn_unary();
        assert_eq!(shifted.eval1(5), 7);
        assert_eq!(shifted.name(), "Minus");
    }

    #[test]
    fn node_accessors_return_the_concrete_node() {
        let mut fill = _1.assign(4);
        assert_eq!(fill.node().value(), 4);
        fill.node_mut().set(9);
        assert_eq!(fill.into_node().value(), 9);
    }
}
