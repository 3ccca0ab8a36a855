// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polynomial segments.

use alloc::vec::Vec;
use core::ops::{Add, Mul, Neg, Sub};

use smallvec::SmallVec;

use crate::common::{different_signs, solve_yuksel, DEFAULT_ROOT_ACCURACY};
use crate::{Compose, Elementary, Interval, Offset, Roots, Scale, Segment, SegmentRoots};

/// A polynomial in the power basis, used as a scalar segment.
///
/// As a [`Segment`], the polynomial's natural parameter is the local
/// parameter of the segment, so it is normally evaluated over `[0, 1]`.
///
/// The degree is dynamic: products and compositions grow it, and there
/// is no automatic truncation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Poly {
    /// Coefficients in increasing order of degree.
    ///
    /// For example, `coeffs[0]` is the constant term. An empty vector is
    /// the zero polynomial.
    coeffs: Vec<f64>,
}

impl Poly {
    /// Constructs a new polynomial from coefficients.
    ///
    /// The first coefficient provided will be the constant term, the second will
    /// be the linear term, and so on.
    pub fn new(coeffs: impl IntoIterator<Item = f64>) -> Poly {
        Poly {
            coeffs: coeffs.into_iter().collect(),
        }
    }

    /// The polynomial that is `value` everywhere.
    pub fn constant(value: f64) -> Poly {
        Poly {
            coeffs: alloc::vec![value],
        }
    }

    /// The linear function going from `v0` at 0 to `v1` at 1.
    pub fn linear(v0: f64, v1: f64) -> Poly {
        Poly {
            coeffs: alloc::vec![v0, v1 - v0],
        }
    }

    /// The coefficients of this polynomial.
    ///
    /// In the returned slice, the coefficient of `x^i` is at index `i`.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// The coefficient of `x^i`, which is zero past the stored coefficients.
    #[inline]
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// The degree of this polynomial.
    ///
    /// Unlike the number of stored coefficients, this ignores trailing
    /// zero coefficients. The zero polynomial has degree zero.
    pub fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|&c| c != 0.0)
            .unwrap_or(0)
    }

    /// Is every coefficient zero?
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Are all the coefficients finite?
    pub fn is_finite(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_finite())
    }

    /// Evaluates this polynomial at a point.
    pub fn eval(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        for c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    /// Returns the polynomial that's the derivative of this polynomial.
    pub fn deriv(&self) -> Poly {
        let mut coeffs = Vec::with_capacity(self.coeffs.len().saturating_sub(1));
        for (i, c) in self.coeffs.iter().enumerate().skip(1) {
            coeffs.push(c * (i as f64));
        }
        Poly { coeffs }
    }

    /// Returns the antiderivative that is zero at zero.
    pub fn antideriv(&self) -> Poly {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(0.0);
        for (i, c) in self.coeffs.iter().enumerate() {
            coeffs.push(c / (i + 1) as f64);
        }
        Poly { coeffs }
    }

    /// The polynomial `x -> self(g(x))`.
    pub fn compose(&self, g: &Poly) -> Poly {
        let mut acc = Poly::default();
        for &c in self.coeffs.iter().rev() {
            acc = &acc * g;
            acc.add_constant(c);
        }
        acc
    }

    /// The polynomial `x -> self(a + b x)`.
    pub fn compose_affine(&self, a: f64, b: f64) -> Poly {
        self.compose(&Poly::new([a, b]))
    }

    /// The coefficients in the Bernstein basis of the same degree, over `[0, 1]`.
    ///
    /// By the convex hull property, the values of the polynomial on
    /// `[0, 1]` lie between the smallest and largest of these.
    pub fn bernstein_coeffs(&self) -> Vec<f64> {
        let n = self.coeffs.len().saturating_sub(1);
        // binomial[i] = C(n, i)
        let mut binomial = Vec::with_capacity(n + 1);
        let mut b = 1.0;
        for i in 0..=n {
            binomial.push(b);
            b = b * (n - i) as f64 / (i + 1) as f64;
        }
        let mut result = Vec::with_capacity(n + 1);
        // C(k, i) is built up incrementally for each k.
        for k in 0..=n {
            let mut sum = 0.0;
            let mut ck = 1.0;
            for i in 0..=k {
                sum += ck / binomial[i] * self.coeff(i);
                ck = ck * (k - i) as f64 / (i + 1) as f64;
            }
            result.push(sum);
        }
        result
    }

    /// The exact range of values taken on `[lower, upper]`.
    pub fn bounds_between(&self, lower: f64, upper: f64) -> Interval {
        let mut bounds = Interval::new(self.eval(lower), self.eval(upper));
        for t in self
            .deriv()
            .roots_between(lower, upper, DEFAULT_ROOT_ACCURACY)
        {
            bounds = bounds.union_value(self.eval(t));
        }
        bounds
    }

    /// Finds all the roots in an interval, in increasing order.
    ///
    /// This finds the critical points (recursively, as the roots of the
    /// derivative) to split the interval into monotonic brackets, then
    /// runs Yuksel's bracketed Newton iteration on every bracket whose
    /// ends have different signs. Exact zeros at the ends of a bracket
    /// are reported directly, so a root at `lower` or `upper`, or a
    /// double root landing exactly on a critical point, is found too.
    ///
    /// Roots without a sign change that do not evaluate exactly to zero
    /// are missed. The zero polynomial reports no roots.
    pub fn roots_between(&self, lower: f64, upper: f64, x_error: f64) -> Roots {
        let mut out = SmallVec::new();
        if self.is_zero() || !self.is_finite() {
            return out;
        }
        let degree = self.degree();
        if degree == 0 {
            return out;
        }
        if degree == 1 {
            let root = -self.coeffs[0] / self.coeffs[1];
            if root >= lower && root <= upper {
                out.push(root);
            }
            return out;
        }

        let deriv = self.deriv();
        let mut ends = deriv.roots_between(lower, upper, x_error);
        ends.push(upper);

        let mut last = lower;
        let mut last_val = self.eval(last);
        if last_val == 0.0 {
            out.push(last);
        }
        // `ends` holds the critical points, in increasing order, followed by
        // the upper end of the interval: these delimit the monotonic brackets.
        for x in ends {
            if x > last && x <= upper {
                let val = self.eval(x);
                if val == 0.0 {
                    out.push(x);
                } else if last_val != 0.0 && different_signs(last_val, val) {
                    out.push(solve_yuksel(
                        |x| self.eval(x),
                        |x| deriv.eval(x),
                        last,
                        x,
                        last_val,
                        val,
                        x_error,
                    ));
                }
                last = x;
                last_val = val;
            }
        }
        out
    }

    /// Approximate `self / other` by a polynomial with `degree + 1` terms.
    ///
    /// This is the power series of the quotient expanded about `0.5`, the
    /// middle of the segment, and truncated. It converges on `[0, 1]`
    /// when `other` has no complex zero within distance `0.5` of the
    /// middle; otherwise the caller has to subdivide. The result is not
    /// finite if `other` is zero at `0.5`.
    pub fn divide(&self, other: &Poly, degree: usize) -> Poly {
        let a = self.compose_affine(0.5, 1.0);
        let b = other.compose_affine(0.5, 1.0);
        let b0 = b.coeff(0);
        let mut q: Vec<f64> = Vec::with_capacity(degree + 1);
        for n in 0..=degree {
            let mut acc = a.coeff(n);
            for i in 1..=n {
                acc -= b.coeff(i) * q[n - i];
            }
            q.push(acc / b0);
        }
        Poly { coeffs: q }.compose_affine(-0.5, 1.0)
    }

    fn add_constant(&mut self, c: f64) {
        match self.coeffs.first_mut() {
            Some(c0) => *c0 += c,
            None => self.coeffs.push(c),
        }
    }

    fn zip_with(&self, other: &Poly, f: impl Fn(f64, f64) -> f64) -> Poly {
        let len = self.coeffs.len().max(other.coeffs.len());
        Poly {
            coeffs: (0..len).map(|i| f(self.coeff(i), other.coeff(i))).collect(),
        }
    }
}

impl Segment for Poly {
    type Output = f64;
    type Bounds = Interval;

    #[inline]
    fn constant(value: f64) -> Poly {
        Poly::constant(value)
    }

    #[inline]
    fn eval(&self, t: f64) -> f64 {
        Poly::eval(self, t)
    }

    #[inline]
    fn start(&self) -> f64 {
        self.coeff(0)
    }

    #[inline]
    fn end(&self) -> f64 {
        self.coeffs.iter().sum()
    }

    fn portion(&self, from: f64, to: f64) -> Poly {
        self.compose_affine(from, to - from)
    }

    fn bounds_fast(&self) -> Interval {
        let bernstein = self.bernstein_coeffs();
        let Some(&first) = bernstein.first() else {
            return Interval::from_value(0.0);
        };
        bernstein
            .iter()
            .fold(Interval::from_value(first), |acc, &c| acc.union_value(c))
    }

    fn bounds_exact(&self) -> Interval {
        self.bounds_between(0.0, 1.0)
    }

    fn bounds_local(&self, range: Interval) -> Interval {
        self.bounds_between(range.min, range.max)
    }

    fn derivative(&self) -> Poly {
        self.deriv()
    }

    fn integral(&self) -> Poly {
        self.antideriv()
    }
}

impl SegmentRoots for Poly {
    fn roots(&self) -> Roots {
        self.roots_between(0.0, 1.0, DEFAULT_ROOT_ACCURACY)
    }
}

impl Offset for Poly {
    fn offset(&self, value: f64) -> Poly {
        let mut result = self.clone();
        result.add_constant(value);
        result
    }
}

impl Scale for Poly {
    fn scale(&self, factor: f64) -> Poly {
        Poly {
            coeffs: self.coeffs.iter().map(|c| c * factor).collect(),
        }
    }
}

impl Elementary for Poly {
    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}

impl Compose<Poly> for Poly {
    fn compose(&self, g: &Poly) -> Poly {
        Poly::compose(self, g)
    }
}

impl<'a> Mul<&'a Poly> for &'a Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        if self.coeffs.is_empty() || rhs.coeffs.is_empty() {
            return Poly::default();
        }
        let mut coeffs = alloc::vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, c) in self.coeffs.iter().enumerate() {
            for (j, d) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += c * d;
            }
        }
        Poly { coeffs }
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        &self * &rhs
    }
}

impl Mul<f64> for Poly {
    type Output = Poly;

    fn mul(self, rhs: f64) -> Poly {
        self.scale(rhs)
    }
}

impl<'a> Add<&'a Poly> for &'a Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly {
        &self + &rhs
    }
}

impl<'a> Sub<&'a Poly> for &'a Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        &self - &rhs
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        self.scale(-1.0)
    }
}
