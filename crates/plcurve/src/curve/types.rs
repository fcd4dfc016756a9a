//! Point access for curves.
//!
//! - `Xy`: the bare (X, Y) record synthesized by split, truncate and sum.
//! - `CurvePoint`: intrinsic coordinates for simple point types.
//! - `Axes`: caller-chosen field selector passed explicitly to every operation.
//!
//! Code cross-refs: `monotone::Monotone`, `interp::lerp`

use nalgebra::{Point2, Vector2};

/// Bare curve point: independent coordinate `x`, dependent coordinate `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

impl Xy {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Xy {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Xy> for (f64, f64) {
    #[inline]
    fn from(p: Xy) -> Self {
        (p.x, p.y)
    }
}

/// A point type with intrinsic independent/dependent coordinates.
pub trait CurvePoint {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl CurvePoint for Xy {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl CurvePoint for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl CurvePoint for Vector2<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl CurvePoint for Point2<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self.coords[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self.coords[1]
    }
}

/// Field selector: which numeric fields of `P` act as X and Y.
///
/// Operations only ever read points through a selector, so one point type can be
/// viewed along different axes in different calls (e.g. price/quantity swapped).
/// A pair of closures `(get_x, get_y)` is itself a selector.
pub trait Axes<P: ?Sized> {
    fn x(&self, p: &P) -> f64;
    fn y(&self, p: &P) -> f64;

    /// Project onto a bare `Xy`, dropping every other field.
    #[inline]
    fn xy(&self, p: &P) -> Xy {
        Xy::new(self.x(p), self.y(p))
    }
}

/// Reads `CurvePoint::x` as X and `CurvePoint::y` as Y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<P: CurvePoint> Axes<P> for Natural {
    #[inline]
    fn x(&self, p: &P) -> f64 {
        p.x()
    }
    #[inline]
    fn y(&self, p: &P) -> f64 {
        p.y()
    }
}

/// Reads `CurvePoint::y` as X and `CurvePoint::x` as Y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Swapped;

impl<P: CurvePoint> Axes<P> for Swapped {
    #[inline]
    fn x(&self, p: &P) -> f64 {
        p.y()
    }
    #[inline]
    fn y(&self, p: &P) -> f64 {
        p.x()
    }
}

impl<P: ?Sized, FX, FY> Axes<P> for (FX, FY)
where
    FX: Fn(&P) -> f64,
    FY: Fn(&P) -> f64,
{
    #[inline]
    fn x(&self, p: &P) -> f64 {
        (self.0)(p)
    }
    #[inline]
    fn y(&self, p: &P) -> f64 {
        (self.1)(p)
    }
}
