// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D polynomial curve segments.

use core::ops::{Add, Mul, Neg, Sub};

use crate::{Compose, Interval, Offset, Poly, Rect, Scale, Segment, Vec2};

/// A parametric curve whose coordinates are polynomials.
///
/// This is the 2D counterpart of [`Poly`]: each coordinate is a scalar
/// segment over the same local parameter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolyCurve {
    /// The x coordinate as a function of the parameter.
    pub x: Poly,
    /// The y coordinate as a function of the parameter.
    pub y: Poly,
}

impl PolyCurve {
    /// Create a new curve from its coordinate functions.
    #[inline]
    pub fn new(x: Poly, y: Poly) -> PolyCurve {
        PolyCurve { x, y }
    }

    /// The straight line from `p0` at 0 to `p1` at 1.
    pub fn line(p0: impl Into<Vec2>, p1: impl Into<Vec2>) -> PolyCurve {
        let p0 = p0.into();
        let p1 = p1.into();
        PolyCurve::new(Poly::linear(p0.x, p1.x), Poly::linear(p0.y, p1.y))
    }

    /// The quadratic Bézier curve with the given control points.
    pub fn quad(p0: impl Into<Vec2>, p1: impl Into<Vec2>, p2: impl Into<Vec2>) -> PolyCurve {
        let (p0, p1, p2) = (p0.into(), p1.into(), p2.into());
        // B(t) = p0 + 2 (p1 - p0) t + (p0 - 2 p1 + p2) t^2
        let c1 = (p1 - p0) * 2.0;
        let c2 = p0 - p1 * 2.0 + p2;
        PolyCurve::new(
            Poly::new([p0.x, c1.x, c2.x]),
            Poly::new([p0.y, c1.y, c2.y]),
        )
    }

    /// The dot product with another curve, as a scalar polynomial.
    pub fn dot(&self, other: &PolyCurve) -> Poly {
        &(&self.x * &other.x) + &(&self.y * &other.y)
    }

    /// The cross product with another curve, as a scalar polynomial.
    pub fn cross(&self, other: &PolyCurve) -> Poly {
        &(&self.x * &other.y) - &(&self.y * &other.x)
    }
}

impl Segment for PolyCurve {
    type Output = Vec2;
    type Bounds = Rect;

    fn constant(value: Vec2) -> PolyCurve {
        PolyCurve::new(Poly::constant(value.x), Poly::constant(value.y))
    }

    #[inline]
    fn eval(&self, t: f64) -> Vec2 {
        Vec2::new(self.x.eval(t), self.y.eval(t))
    }

    fn portion(&self, from: f64, to: f64) -> PolyCurve {
        PolyCurve::new(self.x.portion(from, to), self.y.portion(from, to))
    }

    fn bounds_fast(&self) -> Rect {
        Rect::from_intervals(self.x.bounds_fast(), self.y.bounds_fast())
    }

    fn bounds_exact(&self) -> Rect {
        Rect::from_intervals(self.x.bounds_exact(), self.y.bounds_exact())
    }

    fn bounds_local(&self, range: Interval) -> Rect {
        Rect::from_intervals(self.x.bounds_local(range), self.y.bounds_local(range))
    }

    fn derivative(&self) -> PolyCurve {
        PolyCurve::new(self.x.deriv(), self.y.deriv())
    }

    fn integral(&self) -> PolyCurve {
        PolyCurve::new(self.x.antideriv(), self.y.antideriv())
    }
}

impl Offset for PolyCurve {
    fn offset(&self, value: Vec2) -> PolyCurve {
        PolyCurve::new(self.x.offset(value.x), self.y.offset(value.y))
    }
}

impl Scale for PolyCurve {
    fn scale(&self, factor: f64) -> PolyCurve {
        PolyCurve::new(self.x.scale(factor), self.y.scale(factor))
    }
}

impl Compose<Poly> for PolyCurve {
    fn compose(&self, g: &Poly) -> PolyCurve {
        PolyCurve::new(self.x.compose(g), self.y.compose(g))
    }
}

impl Add for PolyCurve {
    type Output = PolyCurve;

    fn add(self, rhs: PolyCurve) -> PolyCurve {
        PolyCurve::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PolyCurve {
    type Output = PolyCurve;

    fn sub(self, rhs: PolyCurve) -> PolyCurve {
        PolyCurve::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for PolyCurve {
    type Output = PolyCurve;

    fn neg(self) -> PolyCurve {
        PolyCurve::new(-self.x, -self.y)
    }
}

/// A scalar function scaling a curve pointwise.
impl Mul<PolyCurve> for Poly {
    type Output = PolyCurve;

    fn mul(self, rhs: PolyCurve) -> PolyCurve {
        PolyCurve::new(&self * &rhs.x, &self * &rhs.y)
    }
}
