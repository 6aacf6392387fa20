//! Rounding toward and away from zero, and floating remainder.
//!
//! ## Purpose
//!
//! This module provides `ceil`, `floor`, and `fmod`, all built on a single
//! primitive: truncation through a 32-bit integer.
//!
//! ## Design notes
//!
//! * Truncation saturates. Arguments beyond `i32` range clamp to
//!   `i32::MIN`/`i32::MAX` and NaN truncates to 0, so all three functions
//!   are only exact for values whose integer part fits in 32 bits.
//! * `fmod` recovers the remainder from the quotient's fractional part,
//!   `(x/y - trunc(x/y)) * y`, rather than by repeated subtraction. The
//!   result carries the sign of `x`, matching the C library convention.

// External dependencies
use num_traits::float::FloatCore;

// ============================================================================
// Truncation
// ============================================================================

/// Integer part of `x`, saturating at the `i32` range.
#[inline]
fn truncate<T: FloatCore>(x: T) -> i32 {
    x.to_f64().unwrap_or(f64::NAN) as i32
}

// ============================================================================
// Rounding
// ============================================================================

/// Smallest integer value not less than `x`.
///
/// Exact for `|x| < 2^31`; beyond that the truncation saturates and the
/// result is the clamped integer. NaN truncates to 0 and is returned as 0.
///
/// # Examples
///
/// ```
/// use elementary_rs::ceil;
///
/// assert_eq!(ceil(2.1_f64), 3.0);
/// assert_eq!(ceil(-2.1_f64), -2.0);
/// ```
#[inline]
pub fn ceil<T: FloatCore>(x: T) -> T {
    let floored = T::from(truncate(x)).unwrap();
    if x - floored != T::zero() && x > T::zero() {
        floored + T::one()
    } else {
        floored
    }
}

/// Largest integer value not greater than `x`.
///
/// Mirror of [`ceil`]: truncation already floors positive values, so only
/// negative non-integers need the correction step.
///
/// # Examples
///
/// ```
/// use elementary_rs::floor;
///
/// assert_eq!(floor(2.9_f64), 2.0);
/// assert_eq!(floor(-2.1_f64), -3.0);
/// ```
#[inline]
pub fn floor<T: FloatCore>(x: T) -> T {
    let ceiled = T::from(truncate(x)).unwrap();
    if x - ceiled != T::zero() && x < T::zero() {
        ceiled - T::one()
    } else {
        ceiled
    }
}

// ============================================================================
// Remainder
// ============================================================================

/// Floating remainder of `x / y`, with the sign of `x`.
///
/// `fmod(x, 0)` divides by zero and returns NaN. Quotients outside `i32`
/// range saturate in the truncation and produce a meaningless remainder.
///
/// # Examples
///
/// ```
/// use elementary_rs::fmod;
///
/// assert_eq!(fmod(5.5_f64, 2.0), 1.5);
/// assert_eq!(fmod(-5.5_f64, 2.0), -1.5);
/// ```
#[inline]
pub fn fmod<T: FloatCore>(x: T, y: T) -> T {
    let div = x / y;
    let whole = T::from(truncate(div)).unwrap();
    (div - whole) * y
}
