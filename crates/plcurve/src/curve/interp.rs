//! Two-point linear interpolation and curve evaluation.
//!
//! Infinite sentinels flow through the same arithmetic as finite X:
//! - left operand at X = -inf: constant extrapolation of its Y;
//! - right operand at X = +inf: `(x_at - a.x) / inf == 0`, so Y stays `a.y`.
//! A zero-width span yields NaN Y and is never caught.

use super::monotone::Monotone;
use super::types::{Axes, Xy};

/// Line through `a` and `b`, evaluated at `x_at`.
#[inline]
pub(crate) fn lerp(a: Xy, b: Xy, x_at: f64) -> Xy {
    let dx = b.x - a.x;
    let y = if dx == 0.0 {
        f64::NAN
    } else if a.x == f64::NEG_INFINITY {
        a.y
    } else {
        a.y + ((x_at - a.x) / dx) * (b.y - a.y)
    };
    Xy::new(x_at, y)
}

/// Interpolate (or extrapolate) the line through `a` and `b` at `x_at`.
///
/// Returns a NaN Y when `a` and `b` share the same X.
#[inline]
pub fn interpolate<P, A: Axes<P>>(a: &P, b: &P, axes: &A, x_at: f64) -> Xy {
    lerp(axes.xy(a), axes.xy(b), x_at)
}

/// Value of the curve at `x`, extrapolated as a constant beyond either end.
///
/// At a vertical step the last point sharing that X wins. `None` for an empty curve.
pub fn value_at<P, A: Axes<P>>(curve: &Monotone<P>, axes: &A, x: f64) -> Option<f64> {
    let pts = curve.points();
    let i = pts.partition_point(|p| axes.x(p) <= x);
    let left = i.checked_sub(1).and_then(|k| pts.get(k));
    let y = match (left, pts.get(i)) {
        (None, None) => return None,
        (None, Some(first)) => axes.y(first),
        (Some(last), None) => axes.y(last),
        (Some(a), Some(b)) => interpolate(a, b, axes, x).y,
    };
    Some(y)
}
