// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds of piecewise functions.

use crate::{Hull, Interval, Piecewise, Segment};

impl<T: Segment> Piecewise<T> {
    /// Cheap bounds on the values over the whole domain.
    ///
    /// This is the union of each segment's fast bound, so it may be loose.
    /// Returns `None` for the empty function.
    pub fn bounds_fast(&self) -> Option<T::Bounds> {
        self.segs
            .iter()
            .map(Segment::bounds_fast)
            .reduce(Hull::union)
    }

    /// Tight bounds on the values over the whole domain.
    ///
    /// Returns `None` for the empty function.
    pub fn bounds_exact(&self) -> Option<T::Bounds> {
        self.segs
            .iter()
            .map(Segment::bounds_exact)
            .reduce(Hull::union)
    }

    /// Tight bounds on the values over the global range `range`.
    ///
    /// Parts of the range outside the domain are covered by extrapolation.
    /// A degenerate range gives the bounds of the single value there.
    /// Returns `None` for the empty function.
    pub fn bounds_local(&self, range: Interval) -> Option<T::Bounds> {
        if self.is_empty() {
            return None;
        }
        if range.is_empty() {
            return Some(T::Bounds::from_value(self.value_at(range.min)));
        }
        let fi = self.seg_n(range.min);
        let ti = self.seg_n_in(range.max, fi, self.len());
        let ft = self.seg_t_in(range.min, fi);
        let tt = self.seg_t_in(range.max, ti);
        if fi == ti {
            return Some(self.segs[fi].bounds_local(Interval::new(ft, tt)));
        }
        let mut bounds = self.segs[fi].bounds_local(Interval::new(ft, 1.0));
        for seg in &self.segs[fi + 1..ti] {
            bounds = bounds.union(seg.bounds_exact());
        }
        // A range ending exactly on a cut doesn't touch the next segment.
        if tt != 0.0 {
            bounds = bounds.union(self.segs[ti].bounds_local(Interval::new(0.0, tt)));
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Interval, Piecewise, Poly, PolyCurve, Rect};

    fn near(a: Interval, b: Interval) -> bool {
        (a.min - b.min).abs() < 1e-12 && (a.max - b.max).abs() < 1e-12
    }

    fn tent() -> Piecewise<Poly> {
        Piecewise::from_parts(
            alloc::vec![0.0, 0.5, 1.0],
            alloc::vec![Poly::linear(0.0, 1.0), Poly::linear(1.0, 0.0)],
        )
    }

    #[test]
    fn empty() {
        let f = Piecewise::<Poly>::new();
        assert_eq!(f.bounds_fast(), None);
        assert_eq!(f.bounds_exact(), None);
        assert_eq!(f.bounds_local(Interval::UNIT), None);
    }

    #[test]
    fn whole_domain() {
        let f = tent();
        assert!(near(f.bounds_exact().unwrap(), Interval::new(0.0, 1.0)));
        assert!(near(f.bounds_fast().unwrap(), Interval::new(0.0, 1.0)));
    }

    #[test]
    fn fast_contains_exact() {
        // A parabola peaking at 1/4 over [0, 1], followed by a line.
        let f = Piecewise::from_parts(
            alloc::vec![0.0, 1.0, 2.0],
            alloc::vec![Poly::new([0.0, 1.0, -1.0]), Poly::linear(0.0, -1.0)],
        );
        let exact = f.bounds_exact().unwrap();
        let fast = f.bounds_fast().unwrap();
        assert!(near(exact, Interval::new(-1.0, 0.25)));
        assert!(fast.min <= exact.min && fast.max >= exact.max);
    }

    #[test]
    fn local() {
        let f = tent();
        let b = f.bounds_local(Interval::new(0.25, 0.75)).unwrap();
        assert!(near(b, Interval::new(0.5, 1.0)));
        let b = f.bounds_local(Interval::new(0.1, 0.2)).unwrap();
        assert!(near(b, Interval::new(0.2, 0.4)));
        // Ends exactly on the interior cut.
        let b = f.bounds_local(Interval::new(0.0, 0.5)).unwrap();
        assert!(near(b, Interval::new(0.0, 1.0)));
        let b = f.bounds_local(Interval::from_value(0.75)).unwrap();
        assert!(near(b, Interval::from_value(0.5)));
    }

    #[test]
    fn local_spanning_interior_segments() {
        let f = Piecewise::from_parts(
            alloc::vec![0.0, 1.0, 2.0, 3.0],
            alloc::vec![
                Poly::linear(0.0, 1.0),
                Poly::linear(1.0, 5.0),
                Poly::linear(5.0, 2.0),
            ],
        );
        let b = f.bounds_local(Interval::new(0.5, 2.5)).unwrap();
        assert!(near(b, Interval::new(0.5, 5.0)));
    }

    #[test]
    fn curve() {
        let mut f = Piecewise::from_segment(PolyCurve::line((0.0, 0.0), (1.0, 2.0)));
        f.continuous_concat(&Piecewise::from_segment(PolyCurve::line(
            (0.0, 0.0),
            (1.0, -3.0),
        )));
        let b = f.bounds_exact().unwrap();
        assert_eq!(b, Rect::new(0.0, -1.0, 2.0, 2.0));
        let b = f.bounds_local(Interval::new(0.5, 1.5)).unwrap();
        assert_eq!(b, Rect::new(0.5, 0.5, 1.5, 2.0));
    }
}
