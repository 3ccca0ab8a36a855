// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arithmetic on piecewise functions.
//!
//! Scalar operations apply segment by segment. Operations between two
//! piecewise functions first partition both operands by each other's cuts,
//! then combine corresponding segments.
//!
//! There is no division of two piecewise functions; see
//! [`divide`](crate::divide) for an approximation with polynomial segments.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Offset, Piecewise, Scale, Segment, Vec2};

impl<T: Offset> Piecewise<T> {
    /// The function shifted in value by `v`.
    ///
    /// The empty function stays empty.
    pub fn offset(&self, v: T::Output) -> Piecewise<T> {
        Piecewise {
            cuts: self.cuts.clone(),
            segs: self.segs.iter().map(|seg| seg.offset(v)).collect(),
        }
    }

    /// Shift in place by `v`.
    ///
    /// An empty function becomes the constant `v` over `[0, 1]`.
    fn offset_in_place(&mut self, v: T::Output) {
        if self.is_empty() {
            self.cuts.clear();
            self.push_cut(0.0);
            self.push(T::constant(v), 1.0);
            return;
        }
        for seg in &mut self.segs {
            *seg = seg.offset(v);
        }
    }
}

impl<T: Scale> Piecewise<T> {
    /// The function multiplied in value by `s`.
    pub fn scale(&self, s: f64) -> Piecewise<T> {
        Piecewise {
            cuts: self.cuts.clone(),
            segs: self.segs.iter().map(|seg| seg.scale(s)).collect(),
        }
    }

    fn scale_in_place(&mut self, s: f64) {
        for seg in &mut self.segs {
            *seg = seg.scale(s);
        }
    }
}

/// Combine two functions segment by segment, after partitioning them to
/// common cuts.
fn zip_with<A: Segment, B: Segment, C>(
    a: &Piecewise<A>,
    b: &Piecewise<B>,
    op: impl Fn(A, B) -> C,
) -> Piecewise<C> {
    let pa = a.partition(&b.cuts);
    let pb = b.partition(&a.cuts);
    debug_assert_eq!(
        pa.len(),
        pb.len(),
        "mutual partition gave different segment counts"
    );
    Piecewise {
        cuts: pa.cuts,
        segs: pa
            .segs
            .into_iter()
            .zip(pb.segs)
            .map(|(x, y)| op(x, y))
            .collect(),
    }
}

impl<T: Scale> Neg for Piecewise<T> {
    type Output = Piecewise<T>;

    #[inline]
    fn neg(mut self) -> Piecewise<T> {
        self.scale_in_place(-1.0);
        self
    }
}

impl<T: Scale> Neg for &Piecewise<T> {
    type Output = Piecewise<T>;

    #[inline]
    fn neg(self) -> Piecewise<T> {
        self.scale(-1.0)
    }
}

impl<T: Scale> Mul<f64> for Piecewise<T> {
    type Output = Piecewise<T>;

    #[inline]
    fn mul(mut self, s: f64) -> Piecewise<T> {
        self.scale_in_place(s);
        self
    }
}

impl<T: Scale> Mul<f64> for &Piecewise<T> {
    type Output = Piecewise<T>;

    #[inline]
    fn mul(self, s: f64) -> Piecewise<T> {
        self.scale(s)
    }
}

impl<T: Scale> Mul<Piecewise<T>> for f64 {
    type Output = Piecewise<T>;

    #[inline]
    fn mul(self, pw: Piecewise<T>) -> Piecewise<T> {
        pw * self
    }
}

impl<T: Scale> MulAssign<f64> for Piecewise<T> {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        self.scale_in_place(s);
    }
}

impl<T: Scale> Div<f64> for Piecewise<T> {
    type Output = Piecewise<T>;

    /// Note: division by a scalar is implemented by multiplying by the
    /// reciprocal.
    #[inline]
    fn div(mut self, s: f64) -> Piecewise<T> {
        self.scale_in_place(s.recip());
        self
    }
}

impl<T: Scale> Div<f64> for &Piecewise<T> {
    type Output = Piecewise<T>;

    #[inline]
    fn div(self, s: f64) -> Piecewise<T> {
        self.scale(s.recip())
    }
}

impl<T: Scale> DivAssign<f64> for Piecewise<T> {
    #[inline]
    fn div_assign(&mut self, s: f64) {
        self.scale_in_place(s.recip());
    }
}

// Offsets by an output value are implemented for each concrete output type,
// since a blanket `Add<T::Output>` would overlap with `Add<Piecewise<T>>`.
macro_rules! impl_offset_ops {
    ($out:ty) => {
        impl<T: Offset<Output = $out>> Add<$out> for Piecewise<T> {
            type Output = Piecewise<T>;

            #[inline]
            fn add(self, v: $out) -> Piecewise<T> {
                self.offset(v)
            }
        }

        impl<T: Offset<Output = $out>> Add<$out> for &Piecewise<T> {
            type Output = Piecewise<T>;

            #[inline]
            fn add(self, v: $out) -> Piecewise<T> {
                self.offset(v)
            }
        }

        impl<T: Offset<Output = $out>> Sub<$out> for Piecewise<T> {
            type Output = Piecewise<T>;

            #[inline]
            fn sub(self, v: $out) -> Piecewise<T> {
                self.offset(-v)
            }
        }

        impl<T: Offset<Output = $out>> Sub<$out> for &Piecewise<T> {
            type Output = Piecewise<T>;

            #[inline]
            fn sub(self, v: $out) -> Piecewise<T> {
                self.offset(-v)
            }
        }

        impl<T: Offset<Output = $out>> AddAssign<$out> for Piecewise<T> {
            #[inline]
            fn add_assign(&mut self, v: $out) {
                self.offset_in_place(v);
            }
        }

        impl<T: Offset<Output = $out>> SubAssign<$out> for Piecewise<T> {
            #[inline]
            fn sub_assign(&mut self, v: $out) {
                self.offset_in_place(-v);
            }
        }
    };
}

impl_offset_ops!(f64);
impl_offset_ops!(Vec2);

impl<T: Segment + Add<Output = T>> Add for &Piecewise<T> {
    type Output = Piecewise<T>;

    fn add(self, rhs: &Piecewise<T>) -> Piecewise<T> {
        zip_with(self, rhs, |a, b| a + b)
    }
}

impl<T: Segment + Add<Output = T>> Add for Piecewise<T> {
    type Output = Piecewise<T>;

    #[inline]
    fn add(self, rhs: Piecewise<T>) -> Piecewise<T> {
        &self + &rhs
    }
}

impl<T: Segment + Add<Output = T>> AddAssign<&Piecewise<T>> for Piecewise<T> {
    #[inline]
    fn add_assign(&mut self, rhs: &Piecewise<T>) {
        *self = &*self + rhs;
    }
}

impl<T: Segment + Add<Output = T>> AddAssign for Piecewise<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Piecewise<T>) {
        *self = &*self + &rhs;
    }
}

impl<T: Segment + Sub<Output = T>> Sub for &Piecewise<T> {
    type Output = Piecewise<T>;

    fn sub(self, rhs: &Piecewise<T>) -> Piecewise<T> {
        zip_with(self, rhs, |a, b| a - b)
    }
}

impl<T: Segment + Sub<Output = T>> Sub for Piecewise<T> {
    type Output = Piecewise<T>;

    #[inline]
    fn sub(self, rhs: Piecewise<T>) -> Piecewise<T> {
        &self - &rhs
    }
}

impl<T: Segment + Sub<Output = T>> SubAssign<&Piecewise<T>> for Piecewise<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: &Piecewise<T>) {
        *self = &*self - rhs;
    }
}

impl<T: Segment + Sub<Output = T>> SubAssign for Piecewise<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Piecewise<T>) {
        *self = &*self - &rhs;
    }
}

/// The pointwise product.
///
/// The left operand's segments multiply the right operand's, so a scalar
/// function can scale a curve.
impl<T1, T2> Mul<&Piecewise<T2>> for &Piecewise<T1>
where
    T1: Segment + Mul<T2, Output = T2>,
    T2: Segment,
{
    type Output = Piecewise<T2>;

    fn mul(self, rhs: &Piecewise<T2>) -> Piecewise<T2> {
        zip_with(self, rhs, |a, b| a * b)
    }
}

impl<T1, T2> Mul<Piecewise<T2>> for Piecewise<T1>
where
    T1: Segment + Mul<T2, Output = T2>,
    T2: Segment,
{
    type Output = Piecewise<T2>;

    #[inline]
    fn mul(self, rhs: Piecewise<T2>) -> Piecewise<T2> {
        &self * &rhs
    }
}

impl<T: Segment + Mul<Output = T>> MulAssign<&Piecewise<T>> for Piecewise<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: &Piecewise<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Segment + Mul<Output = T>> MulAssign for Piecewise<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Piecewise<T>) {
        *self = &*self * &rhs;
    }
}
