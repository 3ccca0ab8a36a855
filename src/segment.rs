// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits for the elementary functions that make up a piecewise function.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use smallvec::SmallVec;

use crate::{Hull, Interval};

/// The roots of a segment, in local `[0, 1]` coordinates.
pub type Roots = SmallVec<[f64; 4]>;

/// An elementary function defined over the local parameter range `[0, 1]`.
///
/// A [`Piecewise`](crate::Piecewise) function is a sequence of segments,
/// each stretched over one interval of the global domain. Segments may
/// also be evaluated outside `[0, 1]`, which is how a piecewise function
/// extrapolates beyond its domain.
///
/// The output is a value in a real vector space: it can be added,
/// subtracted, negated and scaled. Scalar (`f64`) and
/// [`Vec2`](crate::Vec2) outputs are the common cases.
pub trait Segment: Clone + Default {
    /// The value produced by evaluation.
    type Output: Copy
        + fmt::Debug
        + Add<Output = Self::Output>
        + Sub<Output = Self::Output>
        + Neg<Output = Self::Output>
        + Mul<f64, Output = Self::Output>;

    /// The bounds of a set of output values.
    type Bounds: Hull<Self::Output>;

    /// The segment that evaluates to `value` everywhere.
    fn constant(value: Self::Output) -> Self;

    /// Evaluate the segment at local parameter `t`.
    fn eval(&self, t: f64) -> Self::Output;

    /// The value at the start of the segment.
    #[inline]
    fn start(&self) -> Self::Output {
        self.eval(0.0)
    }

    /// The value at the end of the segment.
    #[inline]
    fn end(&self) -> Self::Output {
        self.eval(1.0)
    }

    /// The restriction of this segment to the local range `[from, to]`,
    /// reparametrized so that it is again defined over `[0, 1]`.
    ///
    /// The range may extend outside `[0, 1]` (extrapolation), and
    /// `from > to` yields a reversed segment.
    fn portion(&self, from: f64, to: f64) -> Self;

    /// Cheap bounds on the values over `[0, 1]`.
    ///
    /// These are allowed to be loose, but must contain every value.
    fn bounds_fast(&self) -> Self::Bounds;

    /// Tight bounds on the values over `[0, 1]`.
    fn bounds_exact(&self) -> Self::Bounds;

    /// Tight bounds on the values over a local sub-range.
    fn bounds_local(&self, range: Interval) -> Self::Bounds {
        self.portion(range.min, range.max).bounds_exact()
    }

    /// The derivative with respect to the local parameter.
    #[must_use]
    fn derivative(&self) -> Self;

    /// An antiderivative with respect to the local parameter.
    ///
    /// The constant of integration is unspecified; callers that need a
    /// particular value at the start offset the result.
    #[must_use]
    fn integral(&self) -> Self;
}

/// A scalar segment that can find its zeros.
pub trait SegmentRoots: Segment<Output = f64> {
    /// The parameter values in `[0, 1]` where the segment is zero,
    /// in increasing order.
    fn roots(&self) -> Roots;
}

/// A segment that can be shifted by a constant output value.
pub trait Offset: Segment {
    /// The segment `self + value`.
    #[must_use]
    fn offset(&self, value: Self::Output) -> Self;
}

/// A segment that can be multiplied by a scalar.
pub trait Scale: Segment {
    /// The segment `self * factor`.
    #[must_use]
    fn scale(&self, factor: f64) -> Self;
}

/// A scalar segment that can serve as the inner function of a
/// composition.
///
/// Composition needs to split the inner function wherever it crosses one
/// of the cut values of the outer function, which requires finding roots
/// against arbitrary levels, and needs its value range to rule out
/// crossings quickly.
pub trait Elementary: SegmentRoots + Segment<Bounds = Interval> + Offset + Scale {
    /// Is this function identically zero?
    fn is_zero(&self) -> bool;

    /// The parameter values in `[0, 1]` where the function equals `level`.
    fn roots_at_level(&self, level: f64) -> Roots {
        self.offset(-level).roots()
    }
}

/// A segment that can be composed with an elementary function.
pub trait Compose<E: Elementary>: Segment {
    /// The segment `t -> self(g(t))`.
    ///
    /// `g` maps `[0, 1]` into this segment's local coordinates.
    #[must_use]
    fn compose(&self, g: &E) -> Self;
}
