//! Split a curve at one X into two origin-relative halves, and the inverse join.

use super::interp::lerp;
use super::monotone::Monotone;
use super::types::{Axes, Xy};

/// Partition `curve` at `x0` into `(lhs, rhs)`, each translated so `x0` becomes 0.
///
/// - Points exactly at `x0`: the first of them closes `lhs`, the last opens `rhs`.
/// - Otherwise, if points exist on both sides, one interpolated boundary point at
///   X = 0 closes `lhs` and opens `rhs`.
/// - If `x0` lies outside the curve's domain, one half holds every point and the
///   other is empty; nothing is extrapolated.
pub fn split<P, A: Axes<P>>(
    curve: &Monotone<P>,
    axes: &A,
    x0: f64,
) -> (Monotone<Xy>, Monotone<Xy>) {
    let pts = curve.points();
    let lo = pts.partition_point(|p| axes.x(p) < x0);
    let hi = pts.partition_point(|p| axes.x(p) <= x0);
    let shift = |p: &P| {
        let q = axes.xy(p);
        Xy::new(q.x - x0, q.y)
    };

    let boundary = if lo < hi {
        Some((shift(&pts[lo]), shift(&pts[hi - 1])))
    } else if lo > 0 && hi < pts.len() {
        let b = lerp(shift(&pts[lo - 1]), shift(&pts[hi]), 0.0);
        Some((b, b))
    } else {
        None
    };

    let mut lhs = Vec::with_capacity(lo + 1);
    let mut rhs = Vec::with_capacity(pts.len() - hi + 1);
    lhs.extend(pts[..lo].iter().map(&shift));
    if let Some((close, open)) = boundary {
        lhs.push(close);
        rhs.push(open);
    }
    rhs.extend(pts[hi..].iter().map(&shift));
    (Monotone(lhs), Monotone(rhs))
}

/// Undo `split`: translate both halves back by `x0` and concatenate, dropping the
/// shared boundary point when `rhs` opens with exactly the point `lhs` closes with.
///
/// Halves from `split` always line up. For other inputs nothing is checked: if
/// `rhs` starts left of where `lhs` ends, the result is the plain concatenation
/// and is not monotone.
pub fn join(lhs: &Monotone<Xy>, rhs: &Monotone<Xy>, x0: f64) -> Monotone<Xy> {
    let skip = match (lhs.last(), rhs.first()) {
        (Some(a), Some(b)) if a == b => 1,
        _ => 0,
    };
    Monotone(
        lhs.iter()
            .chain(rhs.iter().skip(skip))
            .map(|p| Xy::new(p.x + x0, p.y))
            .collect(),
    )
}
