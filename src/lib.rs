// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise functions over a real domain.
//!
//! A [`Piecewise`] function is a sequence of elementary [`Segment`]s joined
//! end to end, each stretched over one interval of the domain. This crate
//! contains the algebra of such functions: evaluation, domain transforms,
//! bounds, refinement and restriction, arithmetic, composition, calculus and
//! root finding. It is meant as the computational core of 2D curve
//! algorithms, such as curve intersection or region booleans.
//!
//! The algorithms are generic over the segment type, through a small set
//! of capability traits ([`Segment`], [`Offset`], [`Scale`],
//! [`Elementary`], [`Compose`]). Each operation asks only for the
//! capabilities it needs. Two segment types are provided: [`Poly`], a
//! scalar polynomial, and [`PolyCurve`], a 2D polynomial curve.
//!
//! # Examples
//!
//! Arithmetic and calculus on piecewise polynomials:
//!
//! ```
//! use kurbo_piecewise::{Piecewise, Poly};
//!
//! // A tent function over [0, 2].
//! let mut f = Piecewise::new();
//! f.push_cut(0.0);
//! f.push(Poly::linear(0.0, 1.0), 1.0);
//! f.push(Poly::linear(1.0, 0.0), 2.0);
//!
//! // Products partition both sides to common cuts first.
//! let g = Piecewise::from_segment(Poly::linear(0.0, 2.0)) * 2.0;
//! let h = &f * &g;
//! assert_eq!(h.cuts(), &[0.0, 1.0, 2.0]);
//! assert_eq!(h.value_at(0.5), 1.0);
//!
//! // The integral is continuous, and starts at f's starting value.
//! let area = f.integral();
//! assert!((area.value_at(2.0) - 1.0).abs() < 1e-12);
//! ```
//!
//! Composing with an inner function splits the result wherever the inner
//! function crosses a cut:
//!
//! ```
//! use kurbo_piecewise::{Piecewise, Poly, PolyCurve};
//!
//! let mut path = Piecewise::from_segment(PolyCurve::line((0.0, 0.0), (1.0, 0.0)));
//! path.continuous_concat(&Piecewise::from_segment(PolyCurve::line((0.0, 0.0), (0.0, 1.0))));
//!
//! // Traverse the path backwards.
//! let back = path.compose(&Poly::linear(2.0, 0.0)).unwrap();
//! assert_eq!(back.len(), 2);
//! assert_eq!(back.start_value(), path.end_value());
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. However, note that the `libm` crate is not as
//! efficient as the standard library, and that this crate still uses the
//! `alloc` crate regardless.
//!
//! [`libm`]: https://docs.rs/libm

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(clippy::many_single_char_names)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
// Feel free to send a PR that solves one or more of these.
#![allow(
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation,
    clippy::wildcard_imports,
    clippy::shadow_unrelated,
    clippy::unseparated_literal_suffix,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("kurbo_piecewise requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod bounds;
mod calculus;
mod common;
mod compose;
mod divide;
mod interval;
mod ops;
mod partition;
mod piecewise;
mod poly;
mod poly_curve;
mod rect;
mod segment;
mod vec2;

pub use crate::common::DEFAULT_ROOT_ACCURACY;
pub use crate::compose::*;
pub use crate::divide::*;
pub use crate::interval::*;
pub use crate::piecewise::*;
pub use crate::poly::*;
pub use crate::poly_curve::*;
pub use crate::rect::*;
pub use crate::segment::*;
pub use crate::vec2::*;

