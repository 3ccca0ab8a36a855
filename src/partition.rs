// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Refining and restricting piecewise functions.
//!
//! Binary operations on piecewise functions first [partition] both operands
//! so they share the same cuts, after which they can be combined segment by
//! segment.
//!
//! [partition]: Piecewise::partition

use alloc::vec::Vec;

use crate::{Piecewise, Segment};

impl<T: Segment> Piecewise<T> {
    /// The restriction of segment `i` to the global range `[from, to]`.
    ///
    /// The range is normally inside the segment's domain; outside of it,
    /// the segment is extrapolated.
    pub fn elem_portion(&self, i: usize, from: f64, to: f64) -> T {
        let c0 = self.cuts[i];
        let rwidth = (self.cuts[i + 1] - c0).recip();
        self.segs[i].portion((from - c0) * rwidth, (to - c0) * rwidth)
    }

    /// Refine the function so that its cuts include every value in `c`.
    ///
    /// Values inside a segment split it. Values before or after the domain
    /// extend it by extrapolating the first or last segment. Values equal to
    /// an existing cut change nothing.
    ///
    /// Partitioning the empty function gives default segments between the
    /// distinct values of `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is not sorted in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurbo_piecewise::{Piecewise, Poly};
    ///
    /// let mut f = Piecewise::new();
    /// f.push_cut(0.0);
    /// f.push(Poly::linear(0.0, 1.0), 0.5);
    /// f.push(Poly::linear(1.0, 0.0), 1.0);
    ///
    /// let g = f.partition(&[0.25, 0.75]);
    /// assert_eq!(g.cuts(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn partition(&self, c: &[f64]) -> Piecewise<T> {
        assert!(
            c.windows(2).all(|w| w[0] <= w[1]),
            "partition values must be sorted"
        );
        if c.is_empty() {
            return self.clone();
        }
        let cuts = merge_cuts(&self.cuts, c);
        if cuts.len() < 2 {
            return Piecewise::new();
        }
        if self.is_empty() {
            let segs = alloc::vec![T::default(); cuts.len() - 1];
            return Piecewise { cuts, segs };
        }
        let n = self.len();
        let mut segs = Vec::with_capacity(cuts.len() - 1);
        let mut i = 0;
        for w in cuts.windows(2) {
            let (from, to) = (w[0], w[1]);
            // Every original cut is in `cuts`, so `[from, to]` never
            // straddles one and lies within (or beyond the ends of) segment `i`.
            i = self.seg_n_in(from, i, n);
            if from == self.cuts[i] && to == self.cuts[i + 1] {
                segs.push(self.segs[i].clone());
            } else {
                segs.push(self.elem_portion(i, from, to));
            }
        }
        Piecewise { cuts, segs }
    }

    /// The restriction of the function to the range between `from` and `to`.
    ///
    /// The arguments may be given in either order. Parts of the range outside
    /// the domain are extrapolated. An empty function or an empty range gives
    /// the empty function.
    pub fn portion(&self, from: f64, to: f64) -> Piecewise<T> {
        if self.is_empty() || from == to {
            return Piecewise::new();
        }
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        let n = self.len();
        let fi = self.seg_n(from);
        let ti = self.seg_n_in(to, fi, n);

        let mut ret = Piecewise::new();
        ret.push_cut(from);
        if fi == ti {
            ret.push(self.elem_portion(fi, from, to), to);
            return ret;
        }
        let first_end = self.cuts[fi + 1];
        ret.push(self.elem_portion(fi, from, first_end), first_end);
        for i in fi + 1..ti {
            ret.push(self.segs[i].clone(), self.cuts[i + 1]);
        }
        // When `to` is exactly a cut, segment `ti` starts there and adds nothing.
        if to > self.cuts[ti] {
            ret.push(self.elem_portion(ti, self.cuts[ti], to), to);
        }
        debug_assert!(ret.invariants(), "portion produced an invalid function");
        ret
    }

    /// Remove segments narrower than `tol`.
    ///
    /// The segment following a removed one is stretched backwards over the
    /// gap, reparametrizing it, so the result may be discontinuous there.
    /// Short segments at the end are dropped, which shrinks the domain.
    pub fn remove_short_cuts(&self, tol: f64) -> Piecewise<T> {
        if self.is_empty() {
            return Piecewise::new();
        }
        let mut ret = Piecewise::new();
        ret.push_cut(self.cuts[0]);
        for (i, seg) in self.segs.iter().enumerate() {
            if self.cuts[i + 1] - self.cuts[i] >= tol {
                ret.push(seg.clone(), self.cuts[i + 1]);
            }
        }
        if ret.is_empty() {
            return Piecewise::new();
        }
        ret
    }

    /// Remove segments narrower than `tol`, extending the following segment
    /// backwards to cover the gap.
    ///
    /// The kept segment is extrapolated rather than stretched, so a continuous
    /// function stays continuous. Short segments at the end are dropped,
    /// which shrinks the domain.
    pub fn remove_short_cuts_extending(&self, tol: f64) -> Piecewise<T> {
        if self.is_empty() {
            return Piecewise::new();
        }
        let mut ret = Piecewise::new();
        let mut last = self.cuts[0];
        ret.push_cut(last);
        for i in 0..self.len() {
            let to = self.cuts[i + 1];
            if to - self.cuts[i] >= tol {
                ret.push(self.elem_portion(i, last, to), to);
                last = to;
            }
        }
        if ret.is_empty() {
            return Piecewise::new();
        }
        ret
    }
}

/// Merge two sorted sequences, keeping only strictly increasing values.
fn merge_cuts(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut merged: Vec<f64> = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let x = if j == b.len() || (i < a.len() && a[i] <= b[j]) {
            i += 1;
            a[i - 1]
        } else {
            j += 1;
            b[j - 1]
        };
        if merged.last().map_or(true, |&last| x > last) {
            merged.push(x);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{Piecewise, Poly};

    fn tent() -> Piecewise<Poly> {
        Piecewise::from_parts(
            alloc::vec![0.0, 0.5, 1.0],
            alloc::vec![Poly::linear(0.0, 1.0), Poly::linear(1.0, 0.0)],
        )
    }

    /// A piecewise cubic with irregular cuts.
    fn wiggle() -> Piecewise<Poly> {
        Piecewise::from_parts(
            alloc::vec![-1.0, 0.3, 0.7, 2.0],
            alloc::vec![
                Poly::new([1.0, -2.0, 0.5, 3.0]),
                Poly::new([0.0, 1.0, 1.0]),
                Poly::new([2.0, 0.0, -1.0, 0.25]),
            ],
        )
    }

    #[test]
    fn partition_scenario() {
        let f = tent();
        let g = f.partition(&[0.25, 0.75]);
        assert_eq!(g.cuts(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(g.len(), 4);
        assert!(g.invariants());
        for t in [0.0, 0.1, 0.25, 0.4, 0.5, 0.6, 0.75, 0.9, 1.0] {
            assert!((g.value_at(t) - f.value_at(t)).abs() < 1e-12);
        }
    }

    #[test]
    fn partition_by_own_cuts() {
        let f = wiggle();
        assert_eq!(f.partition(f.cuts()), f);
        assert_eq!(f.partition(&[]), f);
        assert_eq!(f.partition(&[0.3, 0.3, 0.7]), f);
    }

    #[test]
    fn partition_mutual() {
        let a = wiggle();
        let b = tent();
        let ab = a.partition(b.cuts());
        let ba = b.partition(a.cuts());
        assert_eq!(ab.cuts(), ba.cuts());
        assert_eq!(ab.len(), ba.len());
        assert!(ab.invariants() && ba.invariants());
    }

    #[test]
    fn partition_extrapolates() {
        let f = Piecewise::from_segment(Poly::linear(0.0, 1.0));
        let g = f.partition(&[-1.0, -0.5, 2.0]);
        assert_eq!(g.cuts(), &[-1.0, -0.5, 0.0, 1.0, 2.0]);
        assert!((g.value_at(-0.75) + 0.75).abs() < 1e-12);
        assert!((g.value_at(1.5) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn partition_empty() {
        let f = Piecewise::<Poly>::new();
        let g = f.partition(&[0.0, 1.0, 1.0, 2.0]);
        assert_eq!(g.cuts(), &[0.0, 1.0, 2.0]);
        assert_eq!(g.segs(), &[Poly::default(), Poly::default()]);
        assert!(f.partition(&[3.0]).is_empty());
    }

    #[test]
    #[should_panic(expected = "must be sorted")]
    fn partition_unsorted() {
        let _ = tent().partition(&[0.75, 0.25]);
    }

    #[test]
    fn portion_matches_original() {
        let f = wiggle();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = rng.random_range(-1.0..2.0);
            let b = rng.random_range(-1.0..2.0);
            let p = f.portion(a, b);
            assert!(p.invariants());
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            for k in 0..=8 {
                let t = lo + (hi - lo) * (k as f64 / 8.0);
                assert!((p.value_at(t) - f.value_at(t)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn portion_structure() {
        let f = wiggle();
        let p = f.portion(0.0, 1.0);
        assert_eq!(p.cuts(), &[0.0, 0.3, 0.7, 1.0]);
        // Ending exactly on a cut doesn't add an empty segment.
        let p = f.portion(0.7, -0.5);
        assert_eq!(p.cuts(), &[-0.5, 0.3, 0.7]);
        let p = f.portion(0.4, 0.6);
        assert_eq!(p.cuts(), &[0.4, 0.6]);
        let p = f.portion(1.5, 3.0);
        assert_eq!(p.cuts(), &[1.5, 3.0]);
        assert!(f.portion(0.5, 0.5).is_empty());
        assert!(Piecewise::<Poly>::new().portion(0.0, 1.0).is_empty());
    }

    /// The identity function, cut at `cuts`.
    fn ramp(cuts: &[f64]) -> Piecewise<Poly> {
        let segs: Vec<Poly> = cuts.windows(2).map(|w| Poly::linear(w[0], w[1])).collect();
        Piecewise::from_parts(cuts.to_vec(), segs)
    }

    #[test]
    fn remove_short_cuts() {
        let f = ramp(&[0.0, 1.0, 1.001, 2.0, 2.0005]);
        let g = f.remove_short_cuts(0.01);
        assert_eq!(g.cuts(), &[0.0, 1.0, 2.0]);
        assert!(g.invariants());
        // The segment after the gap is stretched over it.
        assert!((g.value_at(1.0) - 1.001).abs() < 1e-12);
        assert!((g.value_at(1.5) - 1.5005).abs() < 1e-12);
    }

    #[test]
    fn remove_short_cuts_extending() {
        let f = ramp(&[0.0, 1.0, 1.001, 2.0, 2.0005]);
        let g = f.remove_short_cuts_extending(0.01);
        assert_eq!(g.cuts(), &[0.0, 1.0, 2.0]);
        assert!(g.invariants());
        for t in [0.5, 1.0, 1.0005, 1.5, 2.0] {
            assert!((g.value_at(t) - t).abs() < 1e-12);
        }
        assert!(f.remove_short_cuts_extending(10.0).is_empty());
        assert!(f.remove_short_cuts(10.0).is_empty());
    }
}
