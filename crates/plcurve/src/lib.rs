//! Piecewise-linear curve algebra.
//!
//! Curves are ordered point sequences whose independent coordinate X is weakly
//! increasing. Typical use: aggregate per-entity supply/demand or cost/quantity
//! curves into one curve, and slice or restrict curve domains.
//!
//! Entry points
//! - Gate: `is_monotone`, `sort_ascending`, `Monotone::new`.
//! - Operations: `reduce`, `split`/`join`, `truncate`, `merge2`/`sum`, `value_at`.
//! - Sampling: `curve::rand::draw_curve`.

pub mod curve;
mod error;

pub use curve::{
    interpolate, is_monotone, join, merge2, reduce, sort_ascending, split, sum, truncate,
    value_at, Axes, CurvePoint, Monotone, Natural, Swapped, Xy,
};
pub use error::CurveError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::curve::rand::{draw_curve, CurveCfg, PointCount, ReplayToken};
    pub use crate::curve::{
        interpolate, is_monotone, join, merge2, reduce, sort_ascending, split, sum, truncate,
        value_at, Axes, CurvePoint, Monotone, Natural, Swapped, Xy,
    };
    pub use crate::CurveError;
    pub use nalgebra::{Point2, Vector2 as Vec2};
}
