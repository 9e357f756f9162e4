//! Sequence algorithms that take placeholder lambdas as functors.
//!
//! Each algorithm is generic over the invocation trait it needs, so passing a
//! tree of the wrong arity (say, an arithmetic tree as a comparator) fails to
//! compile.
//!
//! ```ignore
//! let mut values = vec![7, 1, 2, 3, 4, 5];
//! sort(&mut values, _1.lt(_2));
//! for_each_mut(&mut values[..5], _1.assign(100));
//!
//! let mut shifted = Vec::new();
//! transform(&values, &mut shifted, 3 + _1 - 1);
//! ```

use std::cmp::Ordering;

use log::{debug, trace};

use lambda_expr::{Binary, Int, Sink, Unary, UnaryMut, WriteBack, render};

mod tests;

/// Turn a strict less-than into a total ordering for the standard sorts.
fn ordering<C: Binary<Output = bool>>(less: &C, a: Int, b: Int) -> Ordering {
    if less.eval2(a, b) {
        Ordering::Less
    } else if less.eval2(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Sort `values` in place using `less` as a strict weak ordering.
///
/// The sort is stable: elements `less` considers equal keep their order.
pub fn sort<C>(values: &mut [Int], less: C)
where
    C: Binary<Output = bool>,
{
    debug!("sort: {} values by {}", values.len(), render(&less));
    values.sort_by(|&a, &b| ordering(&less, a, b));
}

/// Check whether `values` is already ordered by `less`.
pub fn is_sorted<C>(values: &[Int], less: C) -> bool
where
    C: Binary<Output = bool>,
{
    values.windows(2).all(|pair| !less.eval2(pair[1], pair[0]))
}

/// Invoke `f` on every element, in order, and hand `f` back.
pub fn for_each<F>(values: &[Int], mut f: F) -> F
where
    F: UnaryMut,
{
    debug!("for_each: {} values with {}", values.len(), render(&f));
    for &value in values {
        trace!("for_each: visiting {}", value);
        f.eval_mut(value);
    }
    f
}

/// Let `f` write into every element slot, in order, and hand `f` back.
pub fn for_each_mut<F>(values: &mut [Int], f: F) -> F
where
    F: WriteBack,
{
    debug!("for_each_mut: {} slots with {}", values.len(), render(&f));
    for slot in values.iter_mut() {
        let before = *slot;
        let after = f.write_back(slot);
        trace!("for_each_mut: {} -> {}", before, after);
    }
    f
}

/// Append `f(value)` to `out` for every element. Returns the count appended.
pub fn transform<F, S>(values: &[Int], out: &mut S, f: F) -> usize
where
    F: Unary<Output = Int>,
    S: Sink + ?Sized,
{
    debug!("transform: {} values with {}", values.len(), render(&f));
    for &value in values {
        let mapped = f.eval1(value);
        trace!("transform: {} -> {}", value, mapped);
        out.append(mapped);
    }
    values.len()
}

/// Count the elements satisfying `predicate`.
pub fn count_if<P>(values: &[Int], predicate: P) -> usize
where
    P: Unary<Output = bool>,
{
    let count = values.iter().filter(|&&v| predicate.eval1(v)).count();
    debug!("count_if: {} of {} match {}", count, values.len(), render(&predicate));
    count
}

/// Position of the first element satisfying `predicate`.
pub fn find_if<P>(values: &[Int], predicate: P) -> Option<usize>
where
    P: Unary<Output = bool>,
{
    values.iter().position(|&v| predicate.eval1(v))
}
