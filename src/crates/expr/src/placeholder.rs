//! Positional placeholders and the assign-and-capture node.
//!
//! `_1` and `_2` stand for the first and second argument of the lambda they
//! appear in. They carry no state, so both are plain constants:
//!
//! ```text
//! _1.lt(_2)       // |a, b| a < b
//! 3 + _1 - 1      // |a| 3 + a - 1
//! _1.assign(100)  // |slot: &mut Int| *slot = 100
//! ```
//!
//! # Write-back
//!
//! `_1.assign(v)` does not write anything. It captures `v` in an [`Assign`]
//! node, and each later [`WriteBack::write_back`] call (e.g. once per element
//! during a traversal) stores the captured value into the slot it is given.
//! Reading and writing are separate traits, so a read-only use of the
//! placeholder can never be mistaken for a write.

use std::fmt;

use crate::expr::Expr;
use crate::node::{Binary, Int, Node, Unary, WriteBack};

/// First positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct First;

/// Second positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Second;

/// Placeholder for the first argument.
pub const _1: Expr<First> = Expr(First);

/// Placeholder for the second argument.
pub const _2: Expr<Second> = Expr(Second);

impl Node for First {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("_1")
    }

    fn name(&self) -> &'static str {
        "First"
    }
}

impl Unary for First {
    type Output = Int;

    fn eval1(&self, arg: Int) -> Int {
        arg
    }
}

impl Binary for First {
    type Output = Int;

    fn eval2(&self, first: Int, _second: Int) -> Int {
        first
    }
}

impl Node for Second {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("_2")
    }

    fn name(&self) -> &'static str {
        "Second"
    }
}

// With a single argument there is no second position; the argument is used.
impl Unary for Second {
    type Output = Int;

    fn eval1(&self, arg: Int) -> Int {
        arg
    }
}

impl Binary for Second {
    type Output = Int;

    fn eval2(&self, _first: Int, second: Int) -> Int {
        second
    }
}

/// First-argument placeholder with a captured value for write-back.
///
/// Reads behave exactly like `_1`. Writes go through [`WriteBack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Assign {
    value: Int,
}

impl Assign {
    pub fn new(value: Int) -> Self {
        Self { value }
    }

    /// Replace the captured value.
    pub fn set(&mut self, value: Int) -> &mut Self {
        self.value = value;
        self
    }

    pub fn value(&self) -> Int {
        self.value
    }
}

impl Node for Assign {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_1 = {}", self.value)
    }

    fn name(&self) -> &'static str {
        "Assign"
    }
}

impl Unary for Assign {
    type Output = Int;

    fn eval1(&self, arg: Int) -> Int {
        First.eval1(arg)
    }
}

impl Binary for Assign {
    type Output = Int;

    fn eval2(&self, first: Int, second: Int) -> Int {
        First.eval2(first, second)
    }
}

impl WriteBack for Assign {
    fn write_back(&self, slot: &mut Int) -> Int {
        *slot = self.value;
        *slot
    }
}

impl Expr<First> {
    /// Capture `value` for later write-back: the `_1 = value` lambda.
    pub fn assign(self, value: Int) -> Expr<Assign> {
        Expr(Assign::new(value))
    }
}

impl Expr<Assign> {
    /// Replace the captured value, returning the expression for chaining.
    pub fn set(&mut self, value: Int) -> &mut Self {
        self.0.set(value);
        self
    }
}
