//! Exponential function.
//!
//! ## Purpose
//!
//! This module evaluates `e^x` from the Maclaurin series, with negative
//! arguments handled by inversion.
//!
//! ## Design notes
//!
//! * **Negative inversion**: For `x < 0` the series is summed at `|x|` and
//!   the reciprocal is returned. Summing the alternating series directly
//!   would cancel catastrophically for large negative arguments.
//! * **Stop rule**: The loop stops once the running term drops to [`EPS`].
//!   This is the tolerance itself, not its square; the terms of this series
//!   shrink super-geometrically once the index passes `x`, so the looser
//!   threshold costs nothing measurable.
//! * **Overflow break**: An infinite term is detected before it is added, so
//!   an overflowing sum exits promptly instead of accumulating NaN.
//!
//! ## Invariants
//!
//! * At most [`EXP_MAX_TERMS`] terms are summed.
//! * The result is positive for every finite argument.

// External dependencies
use num_traits::float::FloatCore;

// Internal dependencies
use crate::primitives::consts::{EPS, EXP_MAX_TERMS};

// ============================================================================
// Exponential
// ============================================================================

/// `e` raised to the power `x`, by Maclaurin series.
///
/// # Formula
///
/// ```text
/// exp(x) = 1 + x + x^2/2! + x^3/3! + ...
/// ```
///
/// # Edge cases
///
/// The loop condition does the domain filtering, and two quirks follow from
/// its shape:
///
/// * `exp(NaN)` returns `1.0`. A NaN term fails the `term > EPS` test on
///   entry, so the sum never starts.
/// * `exp(inf)` and `exp(-inf)` also return `1.0`. The infinite term trips
///   the overflow break before anything is accumulated.
/// * Large finite arguments saturate honestly: `exp(800)` is `+inf` and
///   `exp(-800)` is `0.0`.
#[inline]
pub fn exp<T: FloatCore>(x: T) -> T {
    let eps = T::from(EPS).unwrap();

    let negative = x < T::zero();
    let x = if negative { -x } else { x };

    let mut res = T::one();
    let mut el = x;
    let mut n: u32 = 1;

    while n <= EXP_MAX_TERMS && el > eps {
        if el.is_infinite() {
            break;
        }
        res = res + el;
        n += 1;
        el = el * (x / T::from(n).unwrap());
    }

    if negative { T::one() / res } else { res }
}
