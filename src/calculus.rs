// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derivatives, integrals and roots of piecewise functions.

use alloc::vec::Vec;

use crate::{Offset, Piecewise, Scale, SegmentRoots};

impl<T: Offset + Scale> Piecewise<T> {
    /// An antiderivative with respect to global time.
    ///
    /// The result is continuous across cuts, and its value at the start of
    /// the domain is the value of this function there.
    #[must_use]
    pub fn integral(&self) -> Piecewise<T> {
        let Some(mut c) = self.start_value() else {
            return Piecewise::new();
        };
        let mut result = Piecewise {
            cuts: self.cuts.clone(),
            segs: Vec::with_capacity(self.len()),
        };
        for (dom, seg) in self.iter() {
            // Chain rule for the map from local to global time.
            let s = seg.integral().scale(dom.extent());
            let s = s.offset(c - s.start());
            c = s.end();
            result.segs.push(s);
        }
        result
    }
}

impl<T: Scale> Piecewise<T> {
    /// The derivative with respect to global time.
    #[must_use]
    pub fn derivative(&self) -> Piecewise<T> {
        Piecewise {
            cuts: self.cuts.clone(),
            segs: self
                .iter()
                .map(|(dom, seg)| seg.derivative().scale(dom.extent().recip()))
                .collect(),
        }
    }
}

impl<T: SegmentRoots> Piecewise<T> {
    /// The global times where the function is zero.
    ///
    /// The roots of each segment are reported in segment order. A root on a
    /// cut may be reported by both segments meeting there.
    pub fn roots(&self) -> Vec<f64> {
        let mut result = Vec::new();
        for (dom, seg) in self.iter() {
            result.extend(seg.roots().into_iter().map(|r| r * dom.extent() + dom.min));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{Piecewise, Poly, PolyCurve, Segment, Vec2};

    fn wave() -> Piecewise<Poly> {
        Piecewise::from_parts(
            alloc::vec![-1.0, 0.2, 0.45, 2.0],
            alloc::vec![
                Poly::new([1.0, -3.0, 2.0]),
                Poly::new([0.5, 0.5, 0.5, -1.0]),
                Poly::linear(2.0, -2.0),
            ],
        )
    }

    #[test]
    fn derivative_of_integral() {
        let f = wave();
        let d = f.integral().derivative();
        assert_eq!(d.cuts(), f.cuts());
        for k in 0..=30 {
            let t = -1.0 + 3.0 * k as f64 / 30.0;
            assert!((d.value_at(t) - f.value_at(t)).abs() < 1e-12);
        }
    }

    #[test]
    fn integral_is_continuous() {
        let f = wave();
        let i = f.integral();
        assert_eq!(i.value_at(-1.0), f.value_at(-1.0));
        for k in 1..f.len() {
            let (left, right) = (&i[k - 1], &i[k]);
            assert!((left.end() - right.start()).abs() < 1e-12);
        }
        // The integral of a constant grows linearly in global time.
        let c = Piecewise::from_parts(
            alloc::vec![0.0, 2.0, 3.0],
            alloc::vec![Poly::constant(1.0); 2],
        );
        let i = c.integral();
        assert!((i.value_at(3.0) - 4.0).abs() < 1e-12);
        assert!(Piecewise::<Poly>::new().integral().is_empty());
    }

    #[test]
    fn integral_of_derivative() {
        let f = wave();
        let g = f.derivative().integral();
        assert_eq!(g.cuts(), f.cuts());
        // Equal up to a constant on each segment.
        for k in 0..f.len() {
            let offset = g[k].start() - f[k].start();
            for j in 0..=4 {
                let t = j as f64 / 4.0;
                assert!((g[k].eval(t) - f[k].eval(t) - offset).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn curve_derivative() {
        let f = Piecewise::from_parts(
            alloc::vec![0.0, 2.0],
            alloc::vec![PolyCurve::line((0.0, 0.0), (4.0, 2.0))],
        );
        assert_eq!(f.derivative().value_at(1.0), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn roots() {
        let f = wave();
        let roots = f.roots();
        // The first segment is (1 - s)(1 - 2s), the last is 2 - 4s.
        let expected = [-0.4, 0.2, 1.225];
        assert_eq!(roots.len(), expected.len());
        for (r, e) in roots.iter().zip(expected) {
            assert!((r - e).abs() < 1e-9, "{roots:?}");
        }

        let tent = Piecewise::from_parts(
            alloc::vec![0.0, 0.5, 1.0],
            alloc::vec![Poly::linear(-1.0, 1.0), Poly::linear(1.0, -1.0)],
        );
        let roots = tent.roots();
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - 0.25).abs() < 1e-12);
        assert!((roots[1] - 0.75).abs() < 1e-12);
        for r in roots {
            assert!(tent.value_at(r).abs() < 1e-12);
        }
        assert!(Piecewise::<Poly>::new().roots().is_empty());
    }
}
