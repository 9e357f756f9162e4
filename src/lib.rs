//! Placeholder lambdas for sequence algorithms.
//!
//! Facade over the workspace crates: [`expr`] builds the lambdas,
//! [`algorithms`] runs them over slices, and [`demo`] wires both into the
//! sort/print/fill/shift scenario run by the `lambda-demo` binary.

pub mod demo;

pub use lambda_algorithms as algorithms;
pub use lambda_expr as expr;

pub use demo::{DemoConfig, DemoReport, SortOrder};
