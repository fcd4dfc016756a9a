//! Restrict a curve to a closed X interval.

use super::interp::lerp;
use super::monotone::Monotone;
use super::types::{Axes, Xy};

/// Keep the points with `min <= X <= max`, adding interpolated endpoints at `min`
/// and `max` where the curve continues past them.
///
/// No endpoint is synthesized on a side the curve never reaches: the result then
/// simply ends at the curve's own last point inside the interval. Coordinates are
/// not translated.
pub fn truncate<P, A: Axes<P>>(
    curve: &Monotone<P>,
    axes: &A,
    min: f64,
    max: f64,
) -> Monotone<Xy> {
    let pts = curve.points();
    let lo = pts.partition_point(|p| axes.x(p) < min);
    let hi = lo + pts[lo..].partition_point(|p| axes.x(p) <= max);
    let below = lo.checked_sub(1).map(|k| axes.xy(&pts[k]));
    let above = pts.get(hi).map(|p| axes.xy(p));
    let inside = &pts[lo..hi];

    let mut out = Vec::with_capacity(inside.len() + 2);
    if let Some(left) = below {
        let right = inside.first().map(|p| axes.xy(p)).or(above);
        if let Some(right) = right.filter(|r| r.x > min) {
            out.push(lerp(left, right, min));
        }
    }
    out.extend(inside.iter().map(|p| axes.xy(p)));
    if let Some(right) = above {
        let left = out.last().copied().or(below);
        if let Some(left) = left.filter(|l| l.x < max) {
            out.push(lerp(left, right, max));
        }
    }
    Monotone(out)
}
