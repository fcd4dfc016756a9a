//! Monotonicity gate: predicate, stable sort, and the `Monotone` wrapper.
//!
//! Every other curve operation takes `&Monotone<P>`; the only ways to get one are
//! the checked constructor, `sort_ascending`, `Monotone::assume`, or the output
//! of another operation.

use std::ops::Deref;

use super::types::{Axes, Xy};
use crate::error::CurveError;

/// A point sequence whose X is weakly increasing under the selector it was built with.
///
/// Carries nothing beyond the points. The selector is not stored, so the claim
/// only holds for the axes used at construction; pass the same axes downstream.
#[derive(Clone, Debug, PartialEq)]
pub struct Monotone<P>(pub(crate) Vec<P>);

impl<P> Monotone<P> {
    /// Check weak monotonicity of X and wrap.
    pub fn new<A: Axes<P>>(points: Vec<P>, axes: &A) -> Result<Self, CurveError> {
        match first_decrease(&points, axes) {
            None => Ok(Self(points)),
            Some(index) => Err(CurveError::NotMonotone {
                index,
                prev: axes.x(&points[index - 1]),
                next: axes.x(&points[index]),
            }),
        }
    }

    /// Wrap without checking. The caller asserts monotonicity; operations on a
    /// violating sequence return unspecified (but non-panicking) output.
    #[inline]
    pub fn assume(points: Vec<P>) -> Self {
        Self(points)
    }

    #[inline]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn points(&self) -> &[P] {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> Vec<P> {
        self.0
    }

    /// First and last X, or `None` for an empty curve.
    pub fn domain<A: Axes<P>>(&self, axes: &A) -> Option<(f64, f64)> {
        Some((axes.x(self.0.first()?), axes.x(self.0.last()?)))
    }

    /// Drop every field but X and Y.
    pub fn project<A: Axes<P>>(&self, axes: &A) -> Monotone<Xy> {
        Monotone(self.0.iter().map(|p| axes.xy(p)).collect())
    }
}

impl<P> Default for Monotone<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> Deref for Monotone<P> {
    type Target = [P];
    #[inline]
    fn deref(&self) -> &[P] {
        &self.0
    }
}

impl<P> AsRef<[P]> for Monotone<P> {
    #[inline]
    fn as_ref(&self) -> &[P] {
        &self.0
    }
}

impl<P> From<Monotone<P>> for Vec<P> {
    #[inline]
    fn from(m: Monotone<P>) -> Self {
        m.0
    }
}

impl<'a, P> IntoIterator for &'a Monotone<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// True iff X never strictly decreases between neighbours. Empty and single-point
/// sequences are monotone.
pub fn is_monotone<P, A: Axes<P>>(points: &[P], axes: &A) -> bool {
    first_decrease(points, axes).is_none()
}

/// Index of the first point whose X is below its predecessor's.
pub(crate) fn first_decrease<P, A: Axes<P>>(points: &[P], axes: &A) -> Option<usize> {
    let mut prev = f64::NEG_INFINITY;
    for (i, p) in points.iter().enumerate() {
        let x = axes.x(p);
        if x < prev {
            return Some(i);
        }
        prev = x;
    }
    None
}

/// Stable sort by ascending X into a new sequence; the input is left untouched.
///
/// Ties keep their input order. NaN X values end up at the extremes, so the
/// result is only guaranteed monotone for finite input.
pub fn sort_ascending<P: Clone, A: Axes<P>>(points: &[P], axes: &A) -> Monotone<P> {
    let mut out = points.to_vec();
    // `+ 0.0` folds -0.0 into +0.0 so signed zeros tie under `total_cmp`.
    out.sort_by(|a, b| (axes.x(a) + 0.0).total_cmp(&(axes.x(b) + 0.0)));
    Monotone(out)
}
