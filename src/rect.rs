// Copyright 2019 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle, used as the bounds of 2D segments.

use crate::{Hull, Interval, Vec2};

/// An axis-aligned rectangle.
///
/// This is the bounds type of segments with [`Vec2`] output.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Rect {
    /// The minimum x coordinate.
    pub x0: f64,
    /// The minimum y coordinate.
    pub y0: f64,
    /// The maximum x coordinate.
    pub x1: f64,
    /// The maximum y coordinate.
    pub y1: f64,
}

impl Rect {
    /// A new rectangle from minimum and maximum coordinates.
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Vec2>, p1: impl Into<Vec2>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect::new(p0.x.min(p1.x), p0.y.min(p1.y), p0.x.max(p1.x), p0.y.max(p1.y))
    }

    /// The rectangle spanned by an interval on each axis.
    #[inline]
    pub fn from_intervals(x: Interval, y: Interval) -> Rect {
        Rect::new(x.min, y.min, x.max, y.max)
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The extent of the rectangle along the x axis.
    #[inline]
    pub fn x_interval(&self) -> Interval {
        Interval::new(self.x0, self.x1)
    }

    /// The extent of the rectangle along the y axis.
    #[inline]
    pub fn y_interval(&self) -> Interval {
        Interval::new(self.y0, self.y1)
    }

    /// Does the rectangle contain the point? Edges are included.
    #[inline]
    pub fn contains(&self, pt: Vec2) -> bool {
        pt.x >= self.x0 && pt.x <= self.x1 && pt.y >= self.y0 && pt.y <= self.y1
    }

    /// The smallest rectangle enclosing two rectangles.
    ///
    /// Results are valid only if width and height are non-negative.
    #[inline]
    pub fn union(&self, other: Rect) -> Rect {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Compute the union with one point.
    #[inline]
    pub fn union_pt(&self, pt: Vec2) -> Rect {
        Rect::new(
            self.x0.min(pt.x),
            self.y0.min(pt.y),
            self.x1.max(pt.x),
            self.y1.max(pt.y),
        )
    }
}

impl Hull<Vec2> for Rect {
    #[inline]
    fn from_value(value: Vec2) -> Rect {
        Rect::new(value.x, value.y, value.x, value.y)
    }

    #[inline]
    fn union(self, other: Rect) -> Rect {
        Rect::union(&self, other)
    }
}

impl From<((f64, f64), (f64, f64))> for Rect {
    fn from(points: ((f64, f64), (f64, f64))) -> Rect {
        Rect::from_points(points.0, points.1)
    }
}
