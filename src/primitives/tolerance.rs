//! Negligibility test and absolute values.
//!
//! ## Purpose
//!
//! This module provides the three primitives everything else is built on: the
//! negligibility predicate that terminates every series loop, and the
//! branch-based absolute values for floats and integers.
//!
//! ## Design notes
//!
//! * **Branch form**: Both absolute values are written as a comparison against
//!   zero followed by negation, not as bit manipulation. This keeps the float
//!   variant's signed-zero behavior explicit (see [`fabs`]).
//! * **Threshold**: [`is_zero`] compares against [`NEGLIGIBLE`], the square of
//!   the convergence tolerance. Series loops stop on a negligible *term*,
//!   never on a stabilized sum.
//!
//! ## Invariants
//!
//! * `is_zero(x)` is equivalent to `fabs(x) < NEGLIGIBLE` for every `x`,
//!   including NaN (where it is false).
//! * `abs` never panics; the minimum value of a signed type wraps to itself.

// External dependencies
use num_traits::float::FloatCore;
use num_traits::{PrimInt, WrappingNeg};

// Internal dependencies
use crate::primitives::consts::NEGLIGIBLE;

// ============================================================================
// Negligibility
// ============================================================================

/// Test whether a magnitude is negligible.
///
/// Returns `true` when `|x|` is below [`NEGLIGIBLE`] (about 1e-34). This is
/// the universal stopping test for the series expansions in this crate: a
/// term this small cannot move an accumulator that holds anything of
/// ordinary size.
///
/// NaN is not negligible.
#[inline]
pub fn is_zero<T: FloatCore>(x: T) -> bool {
    fabs(x) < T::from(NEGLIGIBLE).unwrap()
}

// ============================================================================
// Absolute Values
// ============================================================================

/// Absolute value of a float, by branch.
///
/// # Edge cases
///
/// The branch takes the negation path for any non-positive input, so
/// `fabs(0.0)` returns `-0.0` (the sign bit is set). Magnitude comparisons
/// are unaffected since `-0.0 == 0.0`. NaN passes through as NaN.
#[inline]
pub fn fabs<T: FloatCore>(x: T) -> T {
    if x > T::zero() {
        x
    } else {
        -x
    }
}

/// Absolute value of an integer, by branch.
///
/// # Edge cases
///
/// The negation wraps, so `abs(i32::MIN)` returns `i32::MIN` rather than
/// panicking. Callers working at the extreme of a signed range must check
/// for that value themselves.
#[inline]
pub fn abs<T: PrimInt + WrappingNeg>(n: T) -> T {
    if n > T::zero() {
        n
    } else {
        n.wrapping_neg()
    }
}
