//! Sine, cosine, and tangent.
//!
//! ## Purpose
//!
//! This module evaluates the sine from its Maclaurin series and derives the
//! cosine and tangent from it.
//!
//! ## Design notes
//!
//! * **No argument reduction**: The series is summed at the argument as
//!   given. Accuracy is excellent for small angles and decays as terms grow
//!   before they shrink; see the per-function accuracy notes.
//! * **Phase identity**: `cos(x) = sin(PI/2 - x)`. A useful side effect is
//!   that `cos` of the `f64` representation of PI/2 cancels to exactly zero.
//! * **Quotient tangent**: `tan = sin / cos` with no pole handling; near a
//!   pole the quotient grows without bound or divides by an exact zero,
//!   following IEEE semantics.
//!
//! ## Invariants
//!
//! * The series loop runs at most [`SERIES_MAX_TERMS`] iterations for any
//!   input, NaN included.

// External dependencies
use num_traits::float::FloatCore;

// Internal dependencies
use crate::primitives::consts::{PI, SERIES_MAX_TERMS};
use crate::primitives::tolerance::is_zero;

// ============================================================================
// Sine
// ============================================================================

/// Sine of `x` (radians), by Maclaurin series.
///
/// # Formula
///
/// ```text
/// sin(x) = x - x^3/3! + x^5/5! - ...
/// ```
///
/// Terms are produced by the running recurrence
/// `term *= -x^2 / ((2n+1)(2n))` and summation stops once `term / n` is
/// negligible.
///
/// # Accuracy
///
/// Near full precision for `|x|` up to a few multiples of PI. With no
/// argument reduction, intermediate terms reach `x^n / n!` before shrinking,
/// and their rounding error is what remains in the sum: roughly 1e-4
/// absolute error by `|x| = 30`, and total loss of significance by
/// `|x| = 100`. Past `|x| ≈ 700` the terms overflow and the result is NaN.
///
/// # Examples
///
/// ```
/// use elementary_rs::sin;
///
/// assert!((sin(1.0_f64) - 0.8414709848078965).abs() < 1e-12);
/// ```
#[inline]
pub fn sin<T: FloatCore>(x: T) -> T {
    let mut n: u32 = 1;
    let mut result = x;
    let mut term = x;

    while n <= SERIES_MAX_TERMS && !is_zero(term / T::from(n).unwrap()) {
        let odd = T::from(2 * n + 1).unwrap();
        let even = T::from(2 * n).unwrap();
        term = term * (-(x * x) / (odd * even));
        result = result + term;
        n += 1;
    }

    result
}

// ============================================================================
// Cosine and Tangent
// ============================================================================

/// Cosine of `x` (radians), via the phase identity `sin(PI/2 - x)`.
///
/// Inherits the sine's accuracy envelope, shifted by a quarter turn. The
/// phase subtraction cancels bit-for-bit at `x = PI/2` (the `f64` constant),
/// so the result there is exactly zero.
#[inline]
pub fn cos<T: FloatCore>(x: T) -> T {
    let half_pi = T::from(PI).unwrap() / T::from(2.0).unwrap();
    sin(half_pi - x)
}

/// Tangent of `x` (radians), as `sin(x) / cos(x)`.
///
/// The quotient is not guarded: where the cosine crosses zero the result is
/// huge or infinite, with the sign determined by the operands.
#[inline]
pub fn tan<T: FloatCore>(x: T) -> T {
    sin(x) / cos(x)
}
