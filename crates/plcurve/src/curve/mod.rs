//! Piecewise-linear curves over a weakly increasing independent coordinate.
//!
//! Purpose
//! - Exact-arithmetic algebra on ordered point sequences: collinear reduction,
//!   splitting, truncation to an interval, and summation with constant
//!   extrapolation.
//! - Points are opaque; operations read X and Y through an `Axes` selector passed
//!   per call. Synthesized output carries `Xy` only.
//!
//! Invariants
//! - Every operation takes `&Monotone<P>` and returns a fresh `Monotone`; inputs are
//!   never modified or retained.
//! - A zero-width interpolation span yields NaN, which propagates through sums.
//!
//! Code cross-refs: `Monotone`, `Axes`, `Xy`, `interpolate`, `merge2`

mod interp;
mod monotone;
pub mod rand;
mod reduce;
mod split;
mod sum;
mod truncate;
mod types;

pub use interp::{interpolate, value_at};
pub use monotone::{is_monotone, sort_ascending, Monotone};
pub use reduce::reduce;
pub use split::{join, split};
pub use sum::{merge2, sum};
pub use truncate::truncate;
pub use types::{Axes, CurvePoint, Natural, Swapped, Xy};

#[cfg(test)]
mod props;
