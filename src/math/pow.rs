//! Real exponentiation.
//!
//! ## Purpose
//!
//! This module evaluates `base^exponent` through the exp/log identity
//! `base^e = exp(e * ln(base))`, with sign handling layered on top for
//! negative bases.
//!
//! ## Design notes
//!
//! * **Negative exponents** are folded away first: `base^(-e)` becomes
//!   `(1/base)^e`, so the identity below only ever sees a non-negative
//!   exponent.
//! * **Negative bases** are defined only for integer exponents. The check is
//!   numeric: the exponent's fractional part, extracted with [`fmod`] against
//!   1, must be negligible. The magnitude is then `exp(e * ln(-base))` and the
//!   exponent's parity, again via [`fmod`] against 2, decides the sign.
//! * Exponent classification truncates through a 32-bit integer inside
//!   [`fmod`], so integerness and parity are only decided correctly for
//!   exponents within `i32` range. Far outside it the fractional part comes
//!   back garbage and negative bases report NaN.
//!
//! ## Invariants
//!
//! * `pow` adds no iteration of its own; its convergence and accuracy are
//!   exactly those of [`exp`] and [`log`] composed.
//!
//! ## Non-goals
//!
//! * No special-cased integer fast path (repeated squaring); every power
//!   goes through the identity.

// External dependencies
use num_traits::float::FloatCore;

// Internal dependencies
use crate::math::exp::exp;
use crate::math::log::log;
use crate::math::round::fmod;
use crate::primitives::tolerance::is_zero;

// ============================================================================
// Power
// ============================================================================

/// `base` raised to `exponent`.
///
/// # Domain
///
/// * Negative `base` with a fractional `exponent` returns NaN.
/// * Negative `base` with an integer `exponent` returns a signed result,
///   negative when the exponent is odd.
/// * `pow(0, e)` for positive `e` returns 1: `ln(0)` is `-inf`, and the
///   exponential collapses that to `1/exp(inf) = 1` through its reciprocal
///   path rather than to the conventional 0.
///
/// # Accuracy
///
/// Relative error compounds from [`exp`] and [`log`]; expect roughly 1e-9
/// relative for moderate arguments, degrading with the magnitude of
/// `exponent * ln(base)`.
///
/// # Examples
///
/// ```
/// use elementary_rs::pow;
///
/// assert!((pow(2.0_f64, 10.0) - 1024.0).abs() < 1e-3);
/// assert!(pow(-3.0_f64, 2.5).is_nan());
/// assert!((pow(-2.0_f64, 3.0) + 8.0).abs() < 1e-6);
/// ```
pub fn pow<T: FloatCore>(base: T, exponent: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();

    // Fold negative exponents into the base.
    let (base, exponent) = if exponent < zero {
        (one / base, -exponent)
    } else {
        (base, exponent)
    };

    if base < zero {
        if !is_zero(fmod(exponent, one)) {
            return T::nan();
        }

        let magnitude = exp(exponent * log(-base));
        if fmod(exponent, two) != zero {
            -magnitude
        } else {
            magnitude
        }
    } else {
        exp(exponent * log(base))
    }
}
