// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise functions.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::{Interval, Offset, Segment};

/// A function over a real domain, made of segments joined end to end.
///
/// The function is described by an increasing sequence of cuts and one
/// segment fewer: `segs[i]` is defined over the local parameter range
/// `[0, 1]` and is stretched over the global range `[cuts[i], cuts[i + 1]]`.
/// The function with no segments and no cuts is the empty function.
///
/// Outside of its domain, the function extrapolates its first or last
/// segment.
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
/// assert_eq!(f.value_at(0.25), 0.5);
/// assert_eq!(f.value_at(0.5), 1.0);
/// assert_eq!(f.roots(), vec![0.0, 1.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Piecewise<T> {
    pub(crate) cuts: Vec<f64>,
    pub(crate) segs: Vec<T>,
}

impl<T> Default for Piecewise<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Piecewise<T> {
    /// The empty function.
    #[inline]
    pub const fn new() -> Self {
        Piecewise {
            cuts: Vec::new(),
            segs: Vec::new(),
        }
    }

    /// A function with a single segment over the domain `[0, 1]`.
    pub fn from_segment(seg: T) -> Self {
        Piecewise {
            cuts: alloc::vec![0.0, 1.0],
            segs: alloc::vec![seg],
        }
    }

    /// Create a function from its cuts and segments.
    ///
    /// # Panics
    ///
    /// Panics if there is not exactly one more cut than segments (unless
    /// both are empty), or if the cuts are not strictly increasing.
    pub fn from_parts(cuts: Vec<f64>, segs: Vec<T>) -> Self {
        let pw = Piecewise { cuts, segs };
        assert!(
            pw.invariants(),
            "cuts must be strictly increasing, with one more cut than segments"
        );
        pw
    }

    /// Split the function into its cuts and segments.
    pub fn into_parts(self) -> (Vec<f64>, Vec<T>) {
        (self.cuts, self.segs)
    }

    /// The cuts, in increasing order.
    #[inline]
    pub fn cuts(&self) -> &[f64] {
        &self.cuts
    }

    /// The segments, in domain order.
    #[inline]
    pub fn segs(&self) -> &[T] {
        &self.segs
    }

    /// The number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segs.len()
    }

    /// Does the function have no segments?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// The domain, or `None` for the empty function.
    pub fn domain(&self) -> Option<Interval> {
        match (self.cuts.first(), self.cuts.last()) {
            (Some(&first), Some(&last)) if !self.segs.is_empty() => {
                Some(Interval::new(first, last))
            }
            _ => None,
        }
    }

    /// Iterate over the segments, along with their global domains.
    pub fn iter(&self) -> impl Iterator<Item = (Interval, &T)> + '_ {
        self.cuts
            .windows(2)
            .zip(&self.segs)
            .map(|(w, seg)| (Interval::new(w[0], w[1]), seg))
    }

    /// Append a segment that ends at `to`.
    ///
    /// The segment starts at the current last cut.
    ///
    /// # Panics
    ///
    /// Panics if there is no starting cut, or if `to` is not greater than
    /// the last cut.
    pub fn push(&mut self, seg: T, to: f64) {
        assert!(
            self.cuts.len() == self.segs.len() + 1,
            "push needs a starting cut"
        );
        self.push_seg(seg);
        self.push_cut(to);
    }

    /// Append a cut.
    ///
    /// This is a building block for [`Piecewise::push`]; callers using it
    /// directly are responsible for keeping one more cut than segments.
    ///
    /// # Panics
    ///
    /// Panics if `c` is not greater than the last cut.
    pub fn push_cut(&mut self, c: f64) {
        if let Some(&last) = self.cuts.last() {
            assert!(c > last, "cut {c} must be greater than the previous cut {last}");
        }
        self.cuts.push(c);
    }

    /// Append a segment without a cut.
    ///
    /// This is a building block for [`Piecewise::push`].
    #[inline]
    pub fn push_seg(&mut self, seg: T) {
        self.segs.push(seg);
    }

    /// The index of the segment owning the global time `t`.
    ///
    /// Times before the domain map to the first segment and times after it
    /// to the last. A time equal to an interior cut belongs to the segment
    /// that starts at that cut.
    ///
    /// # Panics
    ///
    /// Panics if the function is empty.
    #[inline]
    pub fn seg_n(&self, t: f64) -> usize {
        self.seg_n_in(t, 0, self.len())
    }

    /// Like [`Piecewise::seg_n`], but only searching segments `low..high`.
    ///
    /// This speeds up the search when the range containing `t` is already
    /// known.
    ///
    /// # Panics
    ///
    /// Panics if the function is empty.
    pub fn seg_n_in(&self, t: f64, low: usize, high: usize) -> usize {
        let n = self.len();
        assert!(n > 0, "segment lookup in an empty piecewise function");
        if t < self.cuts[0] {
            return 0;
        }
        if t >= self.cuts[n] {
            return n - 1;
        }
        let high = high.min(n);
        if low >= high {
            return low.min(n - 1);
        }
        // The owning segment is the one before the first cut greater than `t`.
        low + self.cuts[low + 1..=high].partition_point(|&c| c <= t)
    }

    /// The local time within the segment owning the global time `t`.
    #[inline]
    pub fn seg_t(&self, t: f64) -> f64 {
        self.seg_t_in(t, self.seg_n(t))
    }

    /// The local time of global time `t` relative to segment `i`.
    ///
    /// The result is outside `[0, 1]` if `t` is outside the segment.
    #[inline]
    pub fn seg_t_in(&self, t: f64, i: usize) -> f64 {
        (t - self.cuts[i]) / (self.cuts[i + 1] - self.cuts[i])
    }

    /// The global time of local time `t` within segment `i`.
    #[inline]
    pub fn map_to_domain(&self, t: f64, i: usize) -> f64 {
        (1.0 - t) * self.cuts[i] + t * self.cuts[i + 1]
    }

    /// Shift the domain by `o`.
    pub fn offset_domain(&mut self, o: f64) {
        if o != 0.0 {
            for c in &mut self.cuts {
                *c += o;
            }
        }
    }

    /// Scale the domain by `s`.
    ///
    /// A factor of zero leaves the empty function.
    ///
    /// # Panics
    ///
    /// Panics if `s` is negative, which would reverse the order of the cuts.
    pub fn scale_domain(&mut self, s: f64) {
        assert!(s >= 0.0, "domain scale factor {s} must not be negative");
        if s == 0.0 {
            self.cuts.clear();
            self.segs.clear();
            return;
        }
        for c in &mut self.cuts {
            *c *= s;
        }
    }

    /// Map the domain affinely onto `dom`.
    ///
    /// An empty `dom` leaves the empty function. The empty function is not
    /// changed.
    pub fn set_domain(&mut self, dom: Interval) {
        if self.is_empty() {
            return;
        }
        if dom.is_empty() {
            self.cuts.clear();
            self.segs.clear();
            return;
        }
        let cf = self.cuts[0];
        let cl = self.cuts[self.cuts.len() - 1];
        let s = dom.extent() / (cl - cf);
        for c in &mut self.cuts {
            *c = (*c - cf) * s + dom.min;
        }
    }

    /// Does this function satisfy its structural invariants?
    ///
    /// These are: one more cut than segments (or no cuts and no segments),
    /// and strictly increasing cuts.
    pub fn invariants(&self) -> bool {
        if !(self.segs.len() + 1 == self.cuts.len() || (self.segs.is_empty() && self.cuts.is_empty()))
        {
            return false;
        }
        self.cuts.windows(2).all(|w| w[0] < w[1])
    }
}

impl<T: Clone> Piecewise<T> {
    /// Append `other`, shifted in time to start where this function ends.
    ///
    /// The values are not adjusted, so the result may jump at the join. See
    /// [`Piecewise::continuous_concat`].
    pub fn concat(&mut self, other: &Piecewise<T>) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.clone_from(other);
            return;
        }
        self.segs.extend_from_slice(&other.segs);
        let t = self.cuts[self.cuts.len() - 1] - other.cuts[0];
        for &c in &other.cuts[1..] {
            self.push_cut(c + t);
        }
    }
}

impl<T: Segment> Piecewise<T> {
    /// A function with the constant value `value` over the domain `[0, 1]`.
    pub fn constant(value: T::Output) -> Self {
        Self::from_segment(T::constant(value))
    }

    /// Evaluate the function at global time `t`.
    ///
    /// # Panics
    ///
    /// Panics if the function is empty.
    pub fn value_at(&self, t: f64) -> T::Output {
        let n = self.seg_n(t);
        self.segs[n].eval(self.seg_t_in(t, n))
    }

    /// The value at the start of the domain, if any.
    pub fn start_value(&self) -> Option<T::Output> {
        self.segs.first().map(Segment::start)
    }

    /// The value at the end of the domain, if any.
    pub fn end_value(&self) -> Option<T::Output> {
        self.segs.last().map(Segment::end)
    }
}

impl<T: Offset> Piecewise<T> {
    /// Append `other`, shifted in time to start where this function ends and
    /// offset in value to start at this function's end value.
    ///
    /// If this function is empty, `other` is copied unchanged.
    pub fn continuous_concat(&mut self, other: &Piecewise<T>) {
        let (Some(end), Some(start)) = (self.end_value(), other.start_value()) else {
            self.concat(other);
            return;
        };
        let y = end - start;
        let t = self.cuts[self.cuts.len() - 1] - other.cuts[0];
        for (i, seg) in other.segs.iter().enumerate() {
            self.push(seg.offset(y), other.cuts[i + 1] + t);
        }
    }
}

impl<T> From<T> for Piecewise<T> {
    fn from(seg: T) -> Self {
        Self::from_segment(seg)
    }
}

impl<T> Index<usize> for Piecewise<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.segs[i]
    }
}

impl<T> IndexMut<usize> for Piecewise<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.segs[i]
    }
}
