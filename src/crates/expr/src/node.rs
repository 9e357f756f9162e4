//! Node traits for the placeholder lambda DSL.
//!
//! This module defines the core `Node` trait every expression node implements,
//! along with one trait per invocation shape. A node only implements the shapes
//! it supports, so invoking a tree with the wrong arity is a compile error
//! rather than a runtime failure.

use std::fmt;

/// Integer type flowing through every expression.
pub type Int = i32;

/// Core trait for expression nodes.
///
/// Any struct can become an expression node by implementing this trait and at
/// least one of [`Unary`], [`Binary`], [`UnaryMut`] or [`WriteBack`].
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Copy)]
/// pub struct Square<N>(N);
///
/// impl<N: Node> Node for Square<N> {
///     fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "sq({})", render(&self.0))
///     }
/// }
///
/// impl<N: Unary<Output = Int>> Unary for Square<N> {
///     type Output = Int;
///
///     fn eval1(&self, arg: Int) -> Int {
///         let v = self.0.eval1(arg);
///         v.wrapping_mul(v)
///     }
/// }
/// ```
pub trait Node {
    /// Write a human-readable rendering of this node and its children.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Optional: provide a short name for debugging.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Invocation with a single argument.
pub trait Unary: Node {
    type Output;

    fn eval1(&self, arg: Int) -> Self::Output;
}

/// Invocation with two arguments, e.g. as a comparator.
pub trait Binary: Node {
    type Output;

    fn eval2(&self, first: Int, second: Int) -> Self::Output;
}

/// Single-argument invocation that mutates state captured by the node,
/// such as an output sink held by reference.
pub trait UnaryMut: Node {
    type Output;

    fn eval_mut(&mut self, arg: Int) -> Self::Output;
}

/// Invocation with a caller-supplied mutable slot.
///
/// The node writes its captured value into `slot` and returns it.
pub trait WriteBack: Node {
    fn write_back(&self, slot: &mut Int) -> Int;
}

/// Display adapter returned by [`render`].
pub struct Rendered<'a, N: ?Sized>(&'a N);

impl<N: Node + ?Sized> fmt::Display for Rendered<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe(f)
    }
}

/// Render any node, e.g. for log lines: `debug!("sorting with {}", render(&cmp))`.
pub fn render<N: Node + ?Sized>(node: &N) -> Rendered<'_, N> {
    Rendered(node)
}

// Borrowed and boxed nodes behave like the node they point to.

impl<N: Node + ?Sized> Node for &N {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).describe(f)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<N: Node + ?Sized> Node for &mut N {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).describe(f)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<N: Node + ?Sized> Node for Box<N> {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).describe(f)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<N: Unary + ?Sized> Unary for &N {
    type Output = N::Output;

    fn eval1(&self, arg: Int) -> N::Output {
        (**self).eval1(arg)
    }
}

impl<N: Unary + ?Sized> Unary for Box<N> {
    type Output = N::Output;

    fn eval1(&self, arg: Int) -> N::Output {
        (**self).eval1(arg)
    }
}

impl<N: Binary + ?Sized> Binary for &N {
    type Output = N::Output;

    fn eval2(&self, first: Int, second: Int) -> N::Output {
        (**self).eval2(first, second)
    }
}

impl<N: Binary + ?Sized> Binary for Box<N> {
    type Output = N::Output;

    fn eval2(&self, first: Int, second: Int) -> N::Output {
        (**self).eval2(first, second)
    }
}

impl<N: UnaryMut + ?Sized> UnaryMut for &mut N {
    type Output = N::Output;

    fn eval_mut(&mut self, arg: Int) -> N::Output {
        (**self).eval_mut(arg)
    }
}

impl<N: WriteBack + ?Sized> WriteBack for &N {
    fn write_back(&self, slot: &mut Int) -> Int {
        (**self).write_back(slot)
    }
}

/// A type-erased single-argument expression.
pub type DynUnary<T> = Box<dyn Unary<Output = T>>;

/// A type-erased two-argument expression.
pub type DynBinary<T> = Box<dyn Binary<Output = T>>;
