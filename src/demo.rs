//! The demonstration scenario: sort, print, fill and shift a sequence, each
//! step driven by a placeholder lambda.

use std::io::Write;

use anyhow::{Context, Result, ensure};
use log::info;

use lambda_algorithms::{for_each, for_each_mut, sort, transform};
use lambda_expr::{_1, _2, Int, WriteSink, hold};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Inputs for [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub values: Vec<Int>,
    pub order: SortOrder,
    /// Value written back into the leading elements after sorting.
    pub fill_value: Int,
    /// How many leading elements receive `fill_value`.
    pub fill_len: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            values: vec![7, 1, 2, 3, 4, 5],
            order: SortOrder::Ascending,
            fill_value: 100,
            fill_len: 5,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.fill_len <= self.values.len(),
            "fill_len {} exceeds the {} configured values",
            self.fill_len,
            self.values.len()
        );
        Ok(())
    }
}

/// Intermediate sequences produced by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub sorted: Vec<Int>,
    pub filled: Vec<Int>,
    pub shifted: Vec<Int>,
}

/// Run the scenario, printing the sorted and shifted sequences to `out`,
/// one space-terminated line each.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<DemoReport> {
    config.validate()?;

    let mut values = config.values.clone();
    let less = match config.order {
        SortOrder::Ascending => _1.lt(_2).into_dyn_binary(),
        SortOrder::Descending => _2.lt(_1).into_dyn_binary(),
    };
    info!("sorting {} values with {}", values.len(), less);
    sort(&mut values, &less);
    let sorted = values.clone();

    print_line(out, &values).context("failed to print sorted values")?;

    let fill = _1.assign(config.fill_value);
    info!("filling {} values with {}", config.fill_len, fill);
    for_each_mut(&mut values[..config.fill_len], fill);
    let filled = values.clone();

    let shift = 3 + _1 - 1;
    info!("shifting with {}", shift);
    let mut shifted = Vec::with_capacity(values.len());
    transform(&values, &mut shifted, shift);

    print_line(out, &shifted).context("failed to print shifted values")?;

    Ok(DemoReport {
        sorted,
        filled,
        shifted,
    })
}

fn print_line<W: Write>(out: &mut W, values: &[Int]) -> std::io::Result<()> {
    let mut stream = WriteSink::new(&mut *out).with_separator(" ");
    for_each(values, hold(&mut stream) << _1);
    let out = stream.finish()?;
    writeln!(out)
}
