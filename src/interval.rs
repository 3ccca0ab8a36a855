// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A closed interval of real numbers, and bounds that can be merged.

use core::fmt;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A closed interval `[min, max]` on the real line.
///
/// Intervals are used both for parameter domains and for the value
/// bounds of scalar functions.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Interval {
    /// The lower end.
    pub min: f64,
    /// The upper end.
    pub max: f64,
}

/// Bounds of a function's output values that can be merged.
///
/// This is the type returned by the bounds queries of a segment; it is
/// [`Interval`] for scalar outputs and [`Rect`](crate::Rect) for
/// vector outputs.
pub trait Hull<V>: Copy + fmt::Debug {
    /// The bounds of a single value.
    fn from_value(value: V) -> Self;

    /// The smallest bounds containing both `self` and `other`.
    #[must_use]
    fn union(self, other: Self) -> Self;
}

impl Interval {
    /// The interval `[0, 1]`, the local domain of every segment.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Create a new interval spanning both values, in either order.
    #[inline]
    pub fn new(a: f64, b: f64) -> Interval {
        if a <= b {
            Interval { min: a, max: b }
        } else {
            Interval { min: b, max: a }
        }
    }

    /// The interval containing the single value `v`.
    #[inline]
    pub const fn from_value(v: f64) -> Interval {
        Interval { min: v, max: v }
    }

    /// The distance between the ends.
    #[inline]
    pub fn extent(self) -> f64 {
        self.max - self.min
    }

    /// The midpoint.
    #[inline]
    pub fn middle(self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Is this interval empty?
    ///
    /// A degenerate interval (`min == max`) covers no domain and is
    /// considered empty, as is one containing NaN.
    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.min < self.max)
    }

    /// Does this interval contain `t`?
    #[inline]
    pub fn contains(self, t: f64) -> bool {
        self.min <= t && t <= self.max
    }

    /// The largest absolute value of any point in the interval.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.min.abs().max(self.max.abs())
    }

    /// The smallest interval containing both intervals.
    #[inline]
    #[must_use]
    pub fn union(self, other: Interval) -> Interval {
        Interval {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Extend the interval so that it contains `t`.
    #[inline]
    #[must_use]
    pub fn union_value(self, t: f64) -> Interval {
        Interval {
            min: self.min.min(t),
            max: self.max.max(t),
        }
    }
}

impl Hull<f64> for Interval {
    #[inline]
    fn from_value(value: f64) -> Interval {
        Interval::from_value(value)
    }

    #[inline]
    fn union(self, other: Interval) -> Interval {
        Interval::union(self, other)
    }
}

impl From<(f64, f64)> for Interval {
    #[inline]
    fn from((a, b): (f64, f64)) -> Interval {
        Interval::new(a, b)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        fmt::Display::fmt(&self.min, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.max, f)?;
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_ends() {
        assert_eq!(Interval::new(3.0, -1.0), Interval { min: -1.0, max: 3.0 });
        assert_eq!(Interval::new(3.0, -1.0).extent(), 4.0);
    }

    #[test]
    fn empty() {
        assert!(Interval::from_value(2.0).is_empty());
        assert!(Interval::new(0.0, f64::NAN).is_empty());
        assert!(!Interval::UNIT.is_empty());
    }

    #[test]
    fn union() {
        let i = Interval::new(0.0, 1.0).union(Interval::new(2.0, 3.0));
        assert_eq!(i, Interval::new(0.0, 3.0));
        assert_eq!(i.union_value(-1.0), Interval::new(-1.0, 3.0));
        assert_eq!(Interval::new(-4.0, 1.0).magnitude(), 4.0);
    }

    #[test]
    fn display() {
        let s = format!("{:.1}", Interval::new(0.5, 1.0));
        assert_eq!(s, "[0.5, 1.0]");
    }
}
