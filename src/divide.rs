// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Approximate division of piecewise polynomials.
//!
//! There is no exact quotient of two polynomials in general. These
//! functions approximate it by a piecewise polynomial, subdividing until a
//! truncated power series is accurate enough on every piece. Wherever the
//! denominator gets within `zero` of zero, the quotient is clamped to
//! `a / ±zero` so the result stays bounded.

use crate::{Interval, Piecewise, Poly, Scale, Segment};

/// The threshold below which a denominator is treated as zero, if no
/// better value is known.
pub const DEFAULT_ZERO: f64 = 1e-3;

/// Subdivisions of a single segment stop at this depth.
const MAX_DEPTH: u32 = 32;

/// The residual is computed with rounding error up to about this many ulps
/// of the operands, so smaller tolerances are raised to it.
const RESIDUAL_ULPS: f64 = 64.0;

/// Approximate `a / b`.
///
/// On every piece, the residual `a - b * q` is bounded by `tol` in absolute
/// value, and `q` has at most `degree + 1` coefficients. Where `|b|` is
/// smaller than `zero`, the quotient is `a / zero` with the sign of `b`.
///
/// A `tol` below the rounding error of computing the residual is raised to
/// that error, so even `tol = 0.0` terminates after a few subdivisions.
///
/// # Examples
///
/// ```
/// use kurbo_piecewise::{divide, Piecewise, Poly, DEFAULT_ZERO};
///
/// let a = Piecewise::constant(1.0);
/// let b = Piecewise::from_segment(Poly::linear(1.0, 2.0));
/// let q = divide(&a, &b, 1e-9, 12, DEFAULT_ZERO);
/// assert!((q.value_at(0.5) - 1.0 / 1.5).abs() < 1e-8);
/// ```
pub fn divide(
    a: &Piecewise<Poly>,
    b: &Piecewise<Poly>,
    tol: f64,
    degree: usize,
    zero: f64,
) -> Piecewise<Poly> {
    let pa = a.partition(b.cuts());
    let pb = b.partition(a.cuts());
    let mut result = Piecewise::new();
    for ((dom, sa), sb) in pa.iter().zip(pb.segs()) {
        let mut piece = divide_segments(sa, sb, tol, degree, zero);
        piece.set_domain(dom);
        result.concat(&piece);
    }
    result
}

/// Approximate `a / b` for a single polynomial denominator over `[0, 1]`.
///
/// See [`divide`].
pub fn divide_by_segment(
    a: &Piecewise<Poly>,
    b: &Poly,
    tol: f64,
    degree: usize,
    zero: f64,
) -> Piecewise<Poly> {
    divide(a, &Piecewise::from_segment(b.clone()), tol, degree, zero)
}

/// Approximate `a / b` for a single polynomial numerator over `[0, 1]`.
///
/// See [`divide`].
pub fn divide_segment_by(
    a: &Poly,
    b: &Piecewise<Poly>,
    tol: f64,
    degree: usize,
    zero: f64,
) -> Piecewise<Poly> {
    divide(&Piecewise::from_segment(a.clone()), b, tol, degree, zero)
}

/// Approximate `a / b` over `[0, 1]`.
///
/// See [`divide`].
pub fn divide_segments(a: &Poly, b: &Poly, tol: f64, degree: usize, zero: f64) -> Piecewise<Poly> {
    divide_rec(a, b, tol, degree, zero, 0)
}

fn divide_rec(a: &Poly, b: &Poly, tol: f64, degree: usize, zero: f64, depth: u32) -> Piecewise<Poly> {
    let bounds = b.bounds_fast();
    if bounds.min > -zero && bounds.max < zero {
        return Piecewise::from_segment(truncated_quotient(a, b, zero));
    }
    if bounds.min > 0.0 || bounds.max < 0.0 {
        let q = a.divide(b, degree);
        let residual = a - &(b * &q);
        let scale = a.bounds_fast().magnitude() + bounds.magnitude() * q.bounds_fast().magnitude();
        let tol = tol.max(RESIDUAL_ULPS * f64::EPSILON * scale);
        if depth >= MAX_DEPTH || residual.bounds_fast().magnitude() <= tol {
            return Piecewise::from_segment(q);
        }
    } else if depth >= MAX_DEPTH {
        // b may vanish here, so the series can't be trusted.
        return Piecewise::from_segment(truncated_quotient(a, b, zero));
    }

    let mut c0 = divide_rec(
        &a.portion(0.0, 0.5),
        &b.portion(0.0, 0.5),
        tol,
        degree,
        zero,
        depth + 1,
    );
    let mut c1 = divide_rec(
        &a.portion(0.5, 1.0),
        &b.portion(0.5, 1.0),
        tol,
        degree,
        zero,
        depth + 1,
    );
    c0.set_domain(Interval::new(0.0, 0.5));
    c1.set_domain(Interval::new(0.5, 1.0));
    c0.concat(&c1);
    c0
}

/// `a` divided by `zero`, with the sign of `b` in the middle.
fn truncated_quotient(a: &Poly, b: &Poly, zero: f64) -> Poly {
    let denom = if b.eval(0.5) < 0.0 { -zero } else { zero };
    a.scale(denom.recip())
}
