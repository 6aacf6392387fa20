//! Square root by Newton-Raphson iteration.
//!
//! ## Purpose
//!
//! This module computes the square root from the recurrence
//! `r' = (r + x / r) / 2`, seeded at 1, with no hardware or library
//! assistance.
//!
//! ## Design notes
//!
//! * **Seed**: The iteration always starts at 1. Far from the root it behaves
//!   like repeated halving (or doubling) toward the right magnitude, then
//!   switches to quadratic convergence once close.
//! * **Stop rule**: The loop stops when successive iterates differ by less
//!   than [`EPS`], and returns the iterate from *before* the final update.
//!   The test is absolute, so roots below the tolerance scale cannot be
//!   resolved; see the accuracy note on [`sqrt`].
//! * **Oscillation guard**: Near convergence the update can flip between two
//!   adjacent floats forever; one ULP of a value near 1 is an order of
//!   magnitude above [`EPS`], so the difference test alone cannot break that
//!   cycle. A revisit of the iterate from two steps back ends the loop. This
//!   is also what lets the iteration terminate for `f32`, whose ULP never
//!   gets anywhere near the tolerance.
//!
//! ## Key concepts
//!
//! * **Pre-update return**: Matching the stop rule, the returned value is the
//!   iterate whose successor first satisfied the tolerance.
//!
//! ## Invariants
//!
//! * The loop always terminates within [`SQRT_MAX_ITER`] iterations.
//!
//! ## Non-goals
//!
//! * No domain check. Negative arguments have no real root; the iteration
//!   wanders until a guard trips and the returned value is meaningless.

// External dependencies
use num_traits::float::FloatCore;

// Internal dependencies
use crate::primitives::consts::{EPS, SQRT_MAX_ITER};
use crate::primitives::tolerance::fabs;

// ============================================================================
// Square Root
// ============================================================================

/// Square root of `x` by Newton-Raphson iteration.
///
/// # Formula
///
/// ```text
/// r(0)   = 1
/// r(n+1) = (r(n) + x / r(n)) / 2
/// ```
///
/// # Accuracy
///
/// Converges to full precision whenever the true root clears the stop
/// tolerance. Because that tolerance is absolute, resolution bottoms out
/// near 1.4e-17: the iterate for zero settles at `2^-56` instead of zero,
/// and any argument whose root sits below that floor (under roughly
/// `2e-34`) stalls there too instead of descending further.
///
/// # Edge cases
///
/// * `sqrt(0.0)` returns `2^-56`, approximately `1.4e-17` (see above).
/// * Arguments below roughly `2e-34` are indistinguishable from zero to
///   the stop rule and come back at the floor rather than their true root.
/// * Negative arguments return an unspecified value; there is no domain
///   check.
/// * NaN and infinity propagate a NaN iterate out through the iteration
///   ceiling.
///
/// # Examples
///
/// ```
/// use elementary_rs::sqrt;
///
/// assert!((sqrt(4.0_f64) - 2.0).abs() < 1e-12);
/// assert!((sqrt(2.0_f64) - 1.4142135623730951).abs() < 1e-12);
/// ```
#[inline]
pub fn sqrt<T: FloatCore>(x: T) -> T {
    let eps = T::from(EPS).unwrap();
    let two = T::from(2.0).unwrap();

    let mut result = T::one();
    // Iterate from two steps back; a one-ULP oscillation revisits it.
    let mut older = T::nan();

    for _ in 0..SQRT_MAX_ITER {
        let new_root = (result + x / result) / two;
        if fabs(result - new_root) < eps || new_root == older {
            break;
        }
        older = result;
        result = new_root;
    }

    result
}
