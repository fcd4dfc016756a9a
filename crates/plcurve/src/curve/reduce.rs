//! Exact collinear-point removal.

use super::monotone::Monotone;
use super::types::{Axes, Xy};

/// `b` lies exactly on the line through `a` and `c` (cross-product identity).
///
/// Coincident points satisfy this trivially.
#[inline]
pub(crate) fn collinear(a: Xy, b: Xy, c: Xy) -> bool {
    (c.x - a.x) * (b.y - a.y) == (b.x - a.x) * (c.y - a.y)
}

/// Drop interior points that lie exactly on the line through their neighbours.
///
/// First and last points are always kept, and the output is a subsequence of the
/// input, so extra fields of `P` survive. The left neighbour of each candidate
/// is the last point kept so far: of a run of repeated points exactly one stays.
/// Passes repeat until none drops a point, so `reduce` is idempotent.
pub fn reduce<P: Clone, A: Axes<P>>(curve: &Monotone<P>, axes: &A) -> Monotone<P> {
    let pts = curve.points();
    if pts.len() <= 2 {
        return curve.clone();
    }
    let xy: Vec<Xy> = pts.iter().map(|p| axes.xy(p)).collect();
    let mut keep: Vec<usize> = (0..pts.len()).collect();
    loop {
        let next = reduce_pass(&xy, &keep);
        if next.len() == keep.len() {
            break;
        }
        keep = next;
    }
    Monotone(keep.into_iter().map(|i| pts[i].clone()).collect())
}

/// One left-to-right pass over the indices in `keep` (at least two).
fn reduce_pass(xy: &[Xy], keep: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(keep.len());
    out.push(keep[0]);
    let mut anchor = xy[keep[0]];
    for pair in keep[1..].windows(2) {
        let p = xy[pair[0]];
        if !collinear(anchor, p, xy[pair[1]]) {
            out.push(pair[0]);
            anchor = p;
        }
    }
    out.push(keep[keep.len() - 1]);
    out
}
