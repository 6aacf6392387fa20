//! Inverse sine, cosine, and tangent.
//!
//! ## Purpose
//!
//! This module evaluates the inverse sine from its binomial series and
//! derives the inverse cosine and inverse tangent from it.
//!
//! ## Design notes
//!
//! * **Domain gate**: Inputs beyond [`ARC_DOMAIN`] in magnitude yield NaN.
//!   Inputs exactly at the boundary take a closed-form branch, because the
//!   series converges only inside the open interval.
//! * **Derived functions**: `acos(x) = PI/2 - asin(x)`, and
//!   `atan(x) = acos(1 / sqrt(1 + x^2))`.
//! * **Tolerance clamp**: After computing, `atan` replaces its result with
//!   [`EPS`] for every argument at or below [`EPS`]. All non-positive
//!   arguments, zero included, therefore return the tolerance constant
//!   itself. The clamp is part of this function's contract; callers that
//!   need the negative branch must reconstruct it from the odd symmetry
//!   themselves.
//!
//! ## Key concepts
//!
//! * **Polynomial convergence**: Near the domain boundary the series terms
//!   shrink like `n^(-3/2)`, so convergence degrades smoothly from geometric
//!   to polynomial as `|x|` approaches 1. The term ceiling turns the extreme
//!   of that regime into a bounded, documented accuracy loss instead of an
//!   unbounded loop.
//!
//! ## Invariants
//!
//! * `asin` and everything built on it runs at most [`SERIES_MAX_TERMS`]
//!   series iterations per call.
//! * `asin(1) + acos(1)` is exactly `PI/2`; interior points agree with the
//!   identity to rounding.
//!
//! ## Non-goals
//!
//! * No quadrant logic: there is no two-argument arctangent here.

// External dependencies
use num_traits::float::FloatCore;

// Internal dependencies
use crate::math::sqrt::sqrt;
use crate::primitives::consts::{ARC_DOMAIN, EPS, PI, SERIES_MAX_TERMS};
use crate::primitives::tolerance::is_zero;

// ============================================================================
// Inverse Sine
// ============================================================================

/// Inverse sine of `x`, by binomial series.
///
/// # Formula
///
/// ```text
/// asin(x) = x + x^3/6 + 3x^5/40 + ...
/// ```
///
/// Terms are produced by the running recurrence
/// `term *= x^2 (2n-1)^2 / ((2n)(2n+1))` and summation stops once the term
/// is negligible.
///
/// # Domain
///
/// `|x| > 1` returns NaN. `x = 1` and `x = -1` return `PI/2` and `-PI/2`
/// exactly without entering the series.
///
/// # Accuracy
///
/// Full precision through most of the domain. Within about `4e-5` of the
/// boundary (exclusive of the boundary itself) the series hits the term
/// ceiling before converging and the result undershoots by up to ~1e-3.
#[inline]
pub fn asin<T: FloatCore>(x: T) -> T {
    let bound = T::from(ARC_DOMAIN).unwrap();
    let half_pi = T::from(PI).unwrap() / T::from(2.0).unwrap();

    if x > bound || x < -bound {
        return T::nan();
    }
    if x == bound {
        return half_pi;
    }
    if x == -bound {
        return -half_pi;
    }

    let mut n: u32 = 1;
    let mut result = x;
    let mut term = x;

    while n <= SERIES_MAX_TERMS && !is_zero(term) {
        let odd = T::from(2 * n - 1).unwrap();
        let even = T::from(2 * n).unwrap();
        let next = T::from(2 * n + 1).unwrap();
        term = term * ((x * x * odd * odd) / (even * next));
        result = result + term;
        n += 1;
    }

    result
}

// ============================================================================
// Inverse Cosine and Inverse Tangent
// ============================================================================

/// Inverse cosine of `x`, as `PI/2 - asin(x)`.
///
/// Inherits the inverse sine's domain gate and its near-boundary accuracy
/// note. `acos(1)` is exactly zero and `acos(-1)` is exactly `PI`.
#[inline]
pub fn acos<T: FloatCore>(x: T) -> T {
    let half_pi = T::from(PI).unwrap() / T::from(2.0).unwrap();
    half_pi - asin(x)
}

/// Inverse tangent of `x`, as `acos(1 / sqrt(1 + x^2))`.
///
/// # Tolerance clamp
///
/// Any argument at or below [`EPS`] returns [`EPS`] itself: `atan(0.0)` is
/// `1e-17`, and so is `atan(-5.0)`. The composed formula only produces the
/// first-quadrant angle, and the clamp pins everything at or below the
/// tolerance to the tolerance.
///
/// # Accuracy
///
/// Accurate to rounding for `x` above ~0.01. Between [`EPS`] and ~0.01 the
/// inner `1 / sqrt(1 + x^2)` lands so close to the inverse-sine boundary
/// that the series exhausts its term ceiling; the result carries up to
/// ~1e-3 of absolute error there, which dwarfs such small angles. Above the
/// clamp and below ~1e-8 the squared argument additionally rounds away
/// entirely and the result is zero.
#[inline]
pub fn atan<T: FloatCore>(x: T) -> T {
    let eps = T::from(EPS).unwrap();
    let one = T::one();

    let result = acos(one / sqrt(one + x * x));
    if x <= eps { eps } else { result }
}
