// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

/// Accuracy used by segment root-finding when no explicit accuracy is given.
pub const DEFAULT_ROOT_ACCURACY: f64 = 1e-12;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("kurbo_piecewise requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn sqrt(self) -> Self => sqrt;
}

#[inline]
pub(crate) fn different_signs(x: f64, y: f64) -> bool {
    (x < 0.0) != (y < 0.0)
}

/// Find a root of `f` in a bracketing interval, using Yuksel's robust
/// variant of Newton's method.
///
/// `val_lower` and `val_upper` are the values of `f` at the ends of the
/// bracket and must have different signs. Newton steps that would leave
/// the bracket are replaced by bisection, so the result always stays
/// inside `[lower, upper]`.
pub(crate) fn solve_yuksel(
    f: impl Fn(f64) -> f64,
    deriv: impl Fn(f64) -> f64,
    mut lower: f64,
    mut upper: f64,
    val_lower: f64,
    val_upper: f64,
    x_error: f64,
) -> f64 {
    if !val_lower.is_finite() || !val_upper.is_finite() {
        return f64::NAN;
    }
    debug_assert!(
        different_signs(val_lower, val_upper),
        "root bracket [{lower}, {upper}] does not change sign"
    );

    let mut x = lower + (upper - lower) / 2.0;
    let mut step = (upper - lower) / 2.0;

    if step.abs() <= x_error {
        return x;
    }

    while step.abs() > x_error && x.is_finite() {
        let deriv_x = deriv(x);
        let val_x = f(x);
        if val_x == 0.0 {
            return x;
        }

        if different_signs(val_lower, val_x) {
            upper = x;
        } else {
            lower = x;
        }

        let mut new_x = x - val_x / deriv_x;

        if !(new_x > lower && new_x < upper) {
            new_x = lower + (upper - lower) / 2.0;

            if new_x == upper || new_x == lower {
                // The bracket has shrunk to adjacent floats.
                return new_x;
            }
        }
        step = new_x - x;
        x = new_x;
    }
    x
}
