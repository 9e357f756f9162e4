//! Built-in operations for the placeholder lambda DSL.
//!
//! This module provides the operator nodes and the factories that build them:
//! - Arithmetic: `+`, `-`, `*`, unary `-`
//! - Comparison: `lt`, `gt`
//! - Output: `<<` into a held sink

pub mod append;
pub mod arith;
pub mod negate;
pub mod relational;

// Re-export commonly used items
pub use append::Append;
pub use arith::{Minus, Plus, Times};
pub use negate::Negate;
pub use relational::{Greater, Less, greater, less};
