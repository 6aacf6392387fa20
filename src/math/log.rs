//! Natural logarithm.
//!
//! ## Purpose
//!
//! This module evaluates `ln(x)` with two regimes: an inverse hyperbolic
//! tangent series below 1, and range reduction by `e` followed by iterative
//! refinement at and above 1.
//!
//! ## Design notes
//!
//! * **Sub-unity series**: With `a = (x-1)/(x+1)`,
//!   `ln(x) = 2 (a + a^3/3 + a^5/5 + ...)`. The sum runs under the hard
//!   ceiling [`LOG_SERIES_MAX_TERMS`] and additionally breaks early once the
//!   running power of `a` is negligible. The early break is bit-neutral: a
//!   skipped term is below one ULP of any accumulator the series can hold.
//!   The ceiling, by contrast, shapes observable behavior near zero and is
//!   kept at its 16-bit value on purpose.
//! * **Reduction + refinement**: For `x >= 1`, divide by `e` until the
//!   mantissa falls into `(1, e]`, counting divisions, then iterate
//!   `p' = p + 2 (x - e^p) / (x + e^p)` from the seed `p = x - 1`.
//! * **Signed stop test**: The refinement continues only while each step
//!   *decreases* the iterate by more than [`EPS`]. The seed `x - 1` bounds
//!   `ln(x)` from above on `[1, e]`, so the iterates descend monotonically to
//!   the root; the first non-decreasing step (including a NaN step) ends the
//!   loop.
//!
//! ## Key concepts
//!
//! * **Ceiling saturation**: Arguments below ~6e-4 exhaust the series
//!   ceiling. The truncation error grows as the argument shrinks: about
//!   1.5e-7 absolute at 1e-4, a few tenths at 1e-5, and complete loss well
//!   below that. At zero the saturated series is discarded for an exact
//!   `-inf`.
//!
//! ## Invariants
//!
//! * Negative arguments return NaN before any iteration runs.
//! * Every loop is bounded: series by [`LOG_SERIES_MAX_TERMS`], reduction by
//!   [`LOG_REDUCE_MAX`], refinement by [`LOG_NEWTON_MAX_ITER`].
//!
//! ## Non-goals
//!
//! * No base-2 or base-10 variants; callers can rescale by the usual
//!   constant factors.

// External dependencies
use num_traits::float::FloatCore;

// Internal dependencies
use crate::math::exp::exp;
use crate::primitives::consts::{E, EPS, LOG_NEWTON_MAX_ITER, LOG_REDUCE_MAX, LOG_SERIES_MAX_TERMS};
use crate::primitives::tolerance::is_zero;

// ============================================================================
// Natural Logarithm
// ============================================================================

/// Natural logarithm of `x`.
///
/// # Domain
///
/// * `x < 0` returns NaN.
/// * `x = 0` (either sign of zero) returns `-inf`, after the sub-unity
///   series saturates its ceiling and is discarded.
/// * NaN fails every range test and falls through to `0.0`.
/// * `+inf` exhausts the reduction ceiling and comes back NaN.
///
/// # Accuracy
///
/// Full precision on `[6e-4, inf)` for finite arguments; below that the
/// series ceiling truncates the sum (see the module notes for the error
/// profile).
///
/// # Examples
///
/// ```
/// use elementary_rs::log;
///
/// assert!((log(10.0_f64) - 2.302585092994046).abs() < 1e-9);
/// assert_eq!(log(1.0_f64), 0.0);
/// ```
pub fn log<T: FloatCore>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();

    if x < zero {
        return T::nan();
    }

    if x < one {
        let alpha = (x - one) / (x + one);
        let mut ans = alpha;
        let mut save = ans * alpha * alpha;

        for i in 2..=LOG_SERIES_MAX_TERMS {
            if is_zero(save) {
                break;
            }
            let denom = T::from(2 * i - 1).unwrap();
            ans = ans + (one / denom) * save;
            save = save * alpha * alpha;
        }

        return if x > zero {
            two * ans
        } else {
            T::neg_infinity()
        };
    }

    if x >= one {
        let e = T::from(E).unwrap();
        let eps = T::from(EPS).unwrap();

        let mut x = x;
        let mut cnt: u32 = 0;
        while x > e && cnt < LOG_REDUCE_MAX {
            x = x / e;
            cnt += 1;
        }

        let mut ans = x - one;
        let mut iters: u32 = 0;
        loop {
            let prev = ans;
            let exp_val = exp(prev);
            ans = prev + two * ((x - exp_val) / (x + exp_val));
            iters += 1;

            let descending = prev - ans > eps;
            if !descending || iters >= LOG_NEWTON_MAX_ITER {
                break;
            }
        }

        return ans + T::from(cnt).unwrap();
    }

    // NaN fails every range test above.
    zero
}
