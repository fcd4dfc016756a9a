//! Pointwise sum of curves under constant extrapolation.
//!
//! Purpose
//! - Aggregate per-entity curves (e.g. supply at each price) into one curve whose
//!   value at any X is the sum of every source's value there, each source held
//!   constant beyond its own first/last breakpoint.
//!
//! Model
//! - `merge2` walks two breakpoint streams with one cursor each. Every step emits
//!   one breakpoint at the smaller pending X: the curve(s) owning that X
//!   contribute their Y and advance, the other contributes its interpolated Y.
//! - Cursors start at a virtual breakpoint at X = -inf carrying the first Y and
//!   end at X = +inf carrying the last Y, so extrapolation is plain `lerp`.
//! - `sum` folds `merge2` over the inputs pairwise, halving the live set per round.
//!
//! Code cross-refs: `interp::lerp`, `monotone::Monotone`

use std::cmp::Ordering;

use super::interp::lerp;
use super::monotone::Monotone;
use super::types::{Axes, Natural, Xy};

/// Merge cursor over one source curve.
struct Cursor<'a, P, A> {
    points: &'a [P],
    axes: &'a A,
    idx: usize,
    /// Last breakpoint passed (or the -inf sentinel).
    prev: Xy,
    /// Next breakpoint pending (or the +inf sentinel).
    next: Xy,
}

impl<'a, P, A: Axes<P>> Cursor<'a, P, A> {
    fn new(points: &'a [P], axes: &'a A) -> Self {
        let first_y = points.first().map_or(0.0, |p| axes.y(p));
        let mut c = Self {
            points,
            axes,
            idx: 0,
            prev: Xy::new(f64::NEG_INFINITY, first_y),
            next: Xy::default(),
        };
        c.next = c.pull();
        c
    }

    #[inline]
    fn pull(&self) -> Xy {
        match self.points.get(self.idx) {
            Some(p) => self.axes.xy(p),
            None => Xy::new(f64::INFINITY, self.prev.y),
        }
    }

    #[inline]
    fn exhausted(&self) -> bool {
        self.idx >= self.points.len()
    }

    /// Y contributed at `x`: the pending breakpoint's own Y (advancing past it)
    /// when it sits at `x`, else the value interpolated between `prev` and `next`.
    ///
    /// Anything not strictly right of `x` is consumed, NaN included, so every
    /// merge step advances at least one cursor.
    fn take(&mut self, x: f64) -> f64 {
        if self.exhausted() || self.next.x.partial_cmp(&x) == Some(Ordering::Greater) {
            return lerp(self.prev, self.next, x).y;
        }
        let y = self.next.y;
        self.prev = self.next;
        self.idx += 1;
        self.next = self.pull();
        y
    }
}

fn merge_with<P, A: Axes<P>>(a: &[P], b: &[P], axes: &A) -> Vec<Xy> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut ca = Cursor::new(a, axes);
    let mut cb = Cursor::new(b, axes);
    while !ca.exhausted() || !cb.exhausted() {
        let x = ca.next.x.min(cb.next.x);
        let y = ca.take(x) + cb.take(x);
        out.push(Xy::new(x, y));
    }
    tracing::trace!(lhs = a.len(), rhs = b.len(), out = out.len(), "merge2");
    out
}

/// Sum of two curves, each extended by constant extrapolation.
///
/// Emits at most `a.len() + b.len()` breakpoints; X values shared by both
/// inputs produce one breakpoint. Commutative: `merge2(a, b) == merge2(b, a)`.
pub fn merge2<P, A: Axes<P>>(a: &Monotone<P>, b: &Monotone<P>, axes: &A) -> Monotone<Xy> {
    Monotone(merge_with(a.points(), b.points(), axes))
}

/// Sum of all `curves`, each extended by constant extrapolation.
///
/// Pairwise halving fold: round `r` merges `live[k]` with `live[k + gap]`,
/// `gap = ceil(len / 2)`, until one curve remains. An empty input gives an empty
/// curve; a single input is returned projected to `Xy`.
pub fn sum<P, A: Axes<P>>(curves: &[Monotone<P>], axes: &A) -> Monotone<Xy> {
    tracing::debug!(curves = curves.len(), "sum");
    let mut live: Vec<Vec<Xy>> = curves
        .iter()
        .map(|c| c.iter().map(|p| axes.xy(p)).collect())
        .collect();
    let mut round = 0usize;
    while live.len() > 1 {
        let gap = live.len().div_ceil(2);
        let tail = live.split_off(gap);
        live = live
            .into_iter()
            .enumerate()
            .map(|(k, lhs)| match tail.get(k) {
                Some(rhs) => merge_with(&lhs, rhs, &Natural),
                None => lhs,
            })
            .collect();
        round += 1;
        tracing::debug!(round, live = live.len(), "sum fold round");
    }
    Monotone(live.pop().unwrap_or_default())
}
