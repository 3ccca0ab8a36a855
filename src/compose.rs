// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of piecewise functions.

use alloc::vec::Vec;
use core::fmt;

use crate::{Compose, Elementary, Piecewise, Segment};

/// An error which can be returned when composing functions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum ComposeError {
    /// The inner function was found to jump over one of the outer
    /// function's cuts without a crossing being found.
    ///
    /// This happens when root finding misses a crossing, typically because
    /// the inner function only grazes a cut value.
    MissedCrossing {
        /// The earlier of the two times.
        from: f64,
        /// The later of the two times.
        to: f64,
        /// The outer segment active at `from`.
        from_seg: usize,
        /// The outer segment active after `to`.
        to_seg: usize,
    },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::MissedCrossing {
                from,
                to,
                from_seg,
                to_seg,
            } => write!(
                f,
                "Missed a cut crossing between t = {from} (segment {from_seg}) and t = {to} (segment {to_seg})"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ComposeError {}

/// The number of levels at or below `v`.
///
/// With the interior cuts of a function as levels, this is the index of the
/// segment owning `v`.
#[inline]
fn band(levels: &[f64], v: f64) -> usize {
    levels.partition_point(|&l| l <= v)
}

/// The times in `[0, 1]` where `g` crosses any of `levels`.
///
/// The result is sorted, starts with `0` and ends with `1`. Each time is
/// paired with the number of levels below `g` immediately after it, which
/// is the index of the active segment when `levels` are the interior cuts
/// of an outer function. The entry at `1` is paired with the count at `1`
/// itself.
///
/// `levels` must be sorted in increasing order.
pub fn compose_pullback<E: Elementary>(levels: &[f64], g: &E) -> Vec<(f64, usize)> {
    let mut times = alloc::vec![0.0, 1.0];
    for &level in levels {
        times.extend(
            g.roots_at_level(level)
                .into_iter()
                .filter(|t| (0.0..=1.0).contains(t)),
        );
    }
    times.sort_by(f64::total_cmp);
    times.dedup();

    let mut result = Vec::with_capacity(times.len());
    for (k, &t) in times.iter().enumerate() {
        // g doesn't cross a level between adjacent times, so probing the
        // middle of the following interval gives the band of all of it.
        let probe = match times.get(k + 1) {
            Some(&next) => 0.5 * (t + next),
            None => t,
        };
        result.push((t, band(levels, g.eval(probe))));
    }
    result
}

impl<T: Segment> Piecewise<T> {
    /// Segment `i` composed with `g`, where `g` is in global coordinates.
    fn compose_remapped<E>(&self, i: usize, g: &E) -> T
    where
        E: Elementary,
        T: Compose<E>,
    {
        let t0 = self.cuts[i];
        let width = self.cuts[i + 1] - t0;
        self.segs[i].compose(&g.offset(-t0).scale(width.recip()))
    }

    /// The function `t -> self(g(t))` over `[0, 1]`.
    ///
    /// The values of `g` are global times of `self`. The result is cut
    /// wherever `g` crosses one of the interior cuts of `self`. Values of `g`
    /// outside the domain extrapolate the first or last segment.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::MissedCrossing`] if `g` was found to cross a
    /// cut without root finding reporting it. No partial result is
    /// produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurbo_piecewise::{Piecewise, Poly};
    ///
    /// let f = Piecewise::from_parts(
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![Poly::linear(0.0, 1.0), Poly::linear(1.0, 3.0)],
    /// );
    /// // g runs over the domain of f twice as fast.
    /// let h = f.compose(&Poly::linear(0.0, 2.0)).unwrap();
    /// assert_eq!(h.cuts(), &[0.0, 0.5, 1.0]);
    /// assert!((h.value_at(0.75) - 2.0).abs() < 1e-12);
    /// ```
    pub fn compose<E>(&self, g: &E) -> Result<Piecewise<T>, ComposeError>
    where
        E: Elementary,
        T: Compose<E>,
    {
        if self.is_empty() {
            return Ok(Piecewise::new());
        }
        if g.is_zero() {
            return Ok(Piecewise::constant(self.value_at(0.0)));
        }
        let n = self.len();
        if n == 1 {
            return Ok(Piecewise::from_segment(self.compose_remapped(0, g)));
        }
        let bounds = g.bounds_fast();
        if bounds.max < self.cuts[0] || bounds.min > self.cuts[n] {
            let i = if bounds.max < self.cuts[1] { 0 } else { n - 1 };
            return Ok(Piecewise::from_segment(self.compose_remapped(i, g)));
        }

        let levels = &self.cuts[1..n];
        let pullback = compose_pullback(levels, g);
        let mut prev = (0.0, band(levels, g.start()));
        for &(t, seg) in &pullback {
            if prev.1.abs_diff(seg) > 1 {
                return Err(ComposeError::MissedCrossing {
                    from: prev.0,
                    to: t,
                    from_seg: prev.1,
                    to_seg: seg,
                });
            }
            prev = (t, seg);
        }

        let mut result = Piecewise::new();
        result.push_cut(0.0);
        for w in pullback.windows(2) {
            let ((t0, seg), (t1, _)) = (w[0], w[1]);
            result.push(self.compose_remapped(seg, &g.portion(t0, t1)), t1);
        }
        Ok(result)
    }

    /// The function `t -> self(g(t))` for a piecewise inner function.
    ///
    /// Each segment of `g` is composed separately with [`Piecewise::compose`],
    /// and the results are placed over the domain of that segment. The
    /// result has the domain of `g`.
    ///
    /// # Errors
    ///
    /// Returns the first error from composing a segment.
    pub fn compose_piecewise<E>(&self, g: &Piecewise<E>) -> Result<Piecewise<T>, ComposeError>
    where
        E: Elementary,
        T: Compose<E>,
    {
        let mut result = Piecewise::new();
        for (dom, seg) in g.iter() {
            let mut piece = self.compose(seg)?;
            piece.set_domain(dom);
            result.concat(&piece);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Interval, Offset, Poly, PolyCurve, Roots, Scale, SegmentRoots, Vec2};

    fn staircase() -> Piecewise<Poly> {
        Piecewise::from_parts(
            alloc::vec![0.0, 1.0, 2.0, 3.0],
            alloc::vec![
                Poly::new([1.0, 2.0, -1.0]),
                Poly::linear(2.0, -1.0),
                Poly::new([0.5, 0.0, 0.0, 1.5]),
            ],
        )
    }

    fn assert_near(a: &Piecewise<Poly>, b: &Piecewise<Poly>) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.cuts().iter().zip(b.cuts()) {
            assert!((x - y).abs() < 1e-9, "cuts differ: {x} vs {y}");
        }
        for (p, q) in a.segs().iter().zip(b.segs()) {
            let len = p.coeffs().len().max(q.coeffs().len());
            for i in 0..len {
                assert!((p.coeff(i) - q.coeff(i)).abs() < 1e-9, "{p:?} vs {q:?}");
            }
        }
    }

    #[test]
    fn identity() {
        let f = staircase();
        let id = Piecewise::from_parts(alloc::vec![0.0, 3.0], alloc::vec![Poly::linear(0.0, 3.0)]);
        let h = f.compose_piecewise(&id).unwrap();
        assert_near(&h, &f);
    }

    #[test]
    fn piecewise_inner() {
        let f = staircase();
        let g = Piecewise::from_parts(
            alloc::vec![-1.0, 0.5, 4.0],
            alloc::vec![Poly::new([0.0, 2.5, -1.0]), Poly::linear(1.5, 3.5)],
        );
        let h = f.compose_piecewise(&g).unwrap();
        assert!(h.invariants());
        assert_eq!(h.domain(), Some(Interval::new(-1.0, 4.0)));
        // Each segment of g crosses one interior cut of f.
        assert_eq!(h.len(), 4);
        assert!(h.cuts().contains(&0.5));
        for k in 0..=37 {
            let t = -1.0 + 5.0 * k as f64 / 37.0;
            let expected = f.value_at(g.value_at(t));
            assert!((h.value_at(t) - expected).abs() < 1e-9, "h({t})");
        }
    }

    #[test]
    fn pullback() {
        let pb = compose_pullback(&[1.0, 2.0], &Poly::linear(0.0, 3.0));
        assert_eq!(pb.len(), 4);
        let segs: Vec<usize> = pb.iter().map(|&(_, i)| i).collect();
        assert_eq!(segs, alloc::vec![0, 1, 2, 2]);
        assert!((pb[1].0 - 1.0 / 3.0).abs() < 1e-12);
        assert!((pb[2].0 - 2.0 / 3.0).abs() < 1e-12);

        // Going down and back up.
        let pb = compose_pullback(&[1.0], &Poly::new([2.0, -6.0, 6.0]));
        let segs: Vec<usize> = pb.iter().map(|&(_, i)| i).collect();
        assert_eq!(segs, alloc::vec![1, 0, 1, 1]);
    }

    #[test]
    fn pointwise() {
        let f = staircase();
        let g = Poly::new([0.2, 4.0, -2.0]);
        let h = f.compose(&g).unwrap();
        assert!(h.invariants());
        assert_eq!(h.domain(), Some(Interval::UNIT));
        for k in 0..=20 {
            let t = k as f64 / 20.0;
            assert!((h.value_at(t) - f.value_at(g.eval(t))).abs() < 1e-9);
        }
    }

    #[test]
    fn fast_paths() {
        let f = staircase();
        assert!(Piecewise::<Poly>::new()
            .compose(&Poly::linear(0.0, 1.0))
            .unwrap()
            .is_empty());

        let h = f.compose(&Poly::default()).unwrap();
        assert_eq!(h.len(), 1);
        assert_eq!(h.value_at(0.5), f.value_at(0.0));

        // Entirely past the end of the domain: extrapolate the last segment.
        let h = f.compose(&Poly::linear(4.0, 5.0)).unwrap();
        assert_eq!(h.len(), 1);
        assert!((h.value_at(0.5) - f.value_at(4.5)).abs() < 1e-9);
        // And before the start.
        let h = f.compose(&Poly::linear(-2.0, -1.0)).unwrap();
        assert!((h.value_at(0.5) - f.value_at(-1.5)).abs() < 1e-9);

        let one = Piecewise::from_segment(Poly::new([0.0, 0.0, 1.0]));
        let h = one.compose(&Poly::linear(1.0, 0.0)).unwrap();
        assert!((h.value_at(0.25) - 0.5625).abs() < 1e-12);
    }

    #[test]
    fn curve() {
        let mut f = Piecewise::from_segment(PolyCurve::line((0.0, 0.0), (1.0, 1.0)));
        f.continuous_concat(&Piecewise::from_segment(PolyCurve::line(
            (0.0, 0.0),
            (1.0, -1.0),
        )));
        // Run backwards over the whole curve.
        let h = f.compose(&Poly::linear(2.0, 0.0)).unwrap();
        assert_eq!(h.len(), 2);
        let p = h.value_at(0.25);
        assert!((p - Vec2::new(1.5, 0.5)).hypot() < 1e-12);
    }

    /// An elementary function that never finds its roots.
    #[derive(Clone, Debug, Default)]
    struct Blind(Poly);

    impl Segment for Blind {
        type Output = f64;
        type Bounds = Interval;

        fn constant(value: f64) -> Self {
            Blind(Poly::constant(value))
        }

        fn eval(&self, t: f64) -> f64 {
            self.0.eval(t)
        }

        fn portion(&self, from: f64, to: f64) -> Self {
            Blind(self.0.portion(from, to))
        }

        fn bounds_fast(&self) -> Interval {
            self.0.bounds_fast()
        }

        fn bounds_exact(&self) -> Interval {
            self.0.bounds_exact()
        }

        fn derivative(&self) -> Self {
            Blind(self.0.deriv())
        }

        fn integral(&self) -> Self {
            Blind(self.0.antideriv())
        }
    }

    impl SegmentRoots for Blind {
        fn roots(&self) -> Roots {
            Roots::new()
        }
    }

    impl Offset for Blind {
        fn offset(&self, value: f64) -> Self {
            Blind(self.0.offset(value))
        }
    }

    impl Scale for Blind {
        fn scale(&self, factor: f64) -> Self {
            Blind(self.0.scale(factor))
        }
    }

    impl Elementary for Blind {
        fn is_zero(&self) -> bool {
            self.0.is_zero()
        }
    }

    impl Compose<Blind> for Poly {
        fn compose(&self, g: &Blind) -> Poly {
            Poly::compose(self, &g.0)
        }
    }

    #[test]
    fn missed_crossing() {
        let f = Piecewise::from_parts(
            alloc::vec![0.0, 1.0, 2.0, 3.0, 4.0],
            alloc::vec![Poly::linear(0.0, 1.0); 4],
        );
        // Over [0, 1], g sweeps from segment 0 to segment 3 with no crossings.
        let err = f.compose(&Blind(Poly::linear(0.0, 4.0))).unwrap_err();
        assert!(matches!(
            err,
            ComposeError::MissedCrossing {
                from_seg: 0,
                to_seg: 2,
                ..
            }
        ));
        assert!(err.to_string().starts_with("Missed a cut crossing"));

        // Nothing is missed when no cut is crossed.
        let h = f.compose(&Blind(Poly::linear(1.25, 1.75))).unwrap();
        assert_eq!(h.len(), 1);
    }
}
