//! # elementary-rs — Elementary Math Functions from First Principles
//!
//! A self-contained implementation of the elementary functions: square root,
//! the trigonometric and inverse trigonometric families, exponential,
//! logarithm, power, rounding, and absolute value. Every value is computed
//! here, from series expansions and Newton-style iteration; nothing is
//! delegated to a platform `libm` or to the standard library's float
//! methods.
//!
//! ## Why compute these yourself?
//!
//! Platform math libraries differ across targets, and some targets have
//! none at all. Computing the elementary functions from their defining
//! series gives:
//!
//! **Key properties:**
//! - Identical results on every target, bit for bit
//! - No dependency on `std`, `libm`, or compiler intrinsics
//! - One generic code path shared by `f32` and `f64`
//! - Bounded iteration everywhere: every loop has a hard ceiling, so no
//!   input can hang a caller
//! - Transparent numerics: each function documents exactly where its
//!   accuracy holds and where it falls off
//!
//! **Typical homes:**
//! - Embedded targets without a C toolchain or libm port
//! - Deterministic simulation and lockstep networking
//! - Reproducible scientific pipelines
//! - Teaching and reference, since each function is a direct transcription
//!   of its textbook series
//!
//! ## Quick Start
//!
//! ```rust
//! use elementary_rs::{consts, pow, sin, sqrt};
//!
//! // Quarter-turn sine, accurate to machine precision.
//! let s = sin(consts::PI / 4.0);
//! assert!((s - 0.7071067811865476_f64).abs() < 1e-12);
//!
//! // Newton square root squares back to its argument.
//! let r = sqrt(2.0_f64);
//! assert!((r * r - 2.0).abs() < 1e-12);
//!
//! // Negative base with a fractional exponent has no real result.
//! assert!(pow(-3.0_f64, 2.5).is_nan());
//! ```
//!
//! Both precisions flow through the same generic functions:
//!
//! ```rust
//! use elementary_rs::exp;
//!
//! let single: f32 = exp(1.0_f32);
//! let double: f64 = exp(1.0_f64);
//! assert!((f64::from(single) - double).abs() < 1e-6);
//! ```
//!
//! ## Function Inventory
//!
//! | Function               | Method                                                  |
//! |------------------------|---------------------------------------------------------|
//! | `sqrt`                 | Newton iteration seeded at 1                            |
//! | `sin`, `cos`, `tan`    | Maclaurin sine series; cosine by phase shift            |
//! | `asin`, `acos`, `atan` | Arcsine Maclaurin series; complements and composition   |
//! | `exp`                  | Maclaurin series, negative arguments by reciprocal      |
//! | `log`                  | artanh series below 1; reduction by `e` plus refinement |
//! | `pow`                  | `exp(e * ln(base))` with sign handling                  |
//! | `ceil`, `floor`, `fmod`| Truncation through a 32-bit integer                     |
//! | `fabs`, `abs`          | Sign test and negation                                  |
//! | `is_zero`              | Negligibility against a squared-epsilon threshold       |
//!
//! ## Accuracy Envelope
//!
//! Series evaluation is honest about where it works. The headline figures,
//! all for `f64`:
//!
//! | Function       | Full precision on          | Degradation outside                           |
//! |----------------|----------------------------|-----------------------------------------------|
//! | `sqrt`         | roots above ~1.4e-17       | stalls near 1.4e-17 below ~2e-34              |
//! | `sin`, `cos`   | roughly `[-10, 10]`        | ~1e-4 absolute near 30, NaN past ~700         |
//! | `asin`, `acos` | `[-1, 1]` minus end caps   | up to ~1e-3 within ~1e-4 of the endpoints     |
//! | `atan`         | above ~0.01                | up to ~1e-3 below; clamps to ~1e-17 below that|
//! | `exp`          | all finite in `f64` range  | overflow to `inf` past ~709                   |
//! | `log`          | `[6e-4, inf)`              | series ceiling truncates below ~6e-4          |
//! | `pow`          | compounds `exp` and `log`  | per its factors                               |
//! | rounding       | integer parts within `i32` | truncation saturates beyond                   |
//!
//! Per-function docs carry the detailed profiles.
//!
//! ## Domain Violations Are Values, Not Panics
//!
//! Out-of-domain inputs come back as sentinel values in the numeric result
//! itself, never as panics or `Result`s. Callers that need strict domains
//! gate their inputs before calling.
//!
//! | Input                               | Result   |
//! |-------------------------------------|----------|
//! | `asin`/`acos` outside `[-1, 1]`     | NaN      |
//! | `log` of a negative                 | NaN      |
//! | `log(0)`                            | `-inf`   |
//! | `pow`, negative base, fractional exp| NaN      |
//! | `fmod(x, 0)`                        | NaN      |
//! | `exp(NaN)`, `exp(±inf)`             | `1.0`    |
//! | `log(NaN)`                          | `0.0`    |
//! | `ceil`/`floor`/`fmod` of NaN        | `0.0`    |
//!
//! The last three rows are consequences of the computation shapes (an empty
//! series sum, a failed range dispatch, truncation of NaN) and are kept
//! stable rather than papered over; each is called out where it arises.
//!
//! ## no_std
//!
//! The crate is unconditionally `#![no_std]`, never allocates, and depends
//! only on `num-traits` (without default features) for the generic float
//! bound. The bound is [`FloatCore`](num_traits::float::FloatCore)
//! specifically: unlike the full `Float` trait, it offers no transcendental
//! methods, so the compiler itself rules out accidental delegation to
//! platform math anywhere in the crate.
//!
//! ## References
//!
//! - Abramowitz, M. & Stegun, I. A. (1964). "Handbook of Mathematical
//!   Functions", chapter 4: elementary transcendental functions.
//! - Hart, J. F. et al. (1968). "Computer Approximations".
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![no_std]
#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - constants and tolerance tests.
//
// Contains the epsilon ladder (`EPS`, `NEGLIGIBLE`), the iteration
// ceilings, and the sign-based absolute values and negligibility test
// everything above builds on.
mod primitives;

// Layer 2: Math - the elementary functions.
//
// Contains square root, the trigonometric and inverse trigonometric
// families, exponential, logarithm, power, and rounding, each computed
// from series or iteration over Layer 1.
mod math;

// ============================================================================
// Public Surface
// ============================================================================

pub use math::arc::{acos, asin, atan};
pub use math::exp::exp;
pub use math::log::log;
pub use math::pow::pow;
pub use math::round::{ceil, floor, fmod};
pub use math::sqrt::sqrt;
pub use math::trig::{cos, sin, tan};
pub use primitives::consts;
pub use primitives::tolerance::{abs, fabs, is_zero};

// ============================================================================
// Prelude
// ============================================================================

/// Convenience prelude.
///
/// This module is intended to be wildcard-imported for access to every
/// function and the constants module:
///
/// ```
/// use elementary_rs::prelude::*;
///
/// assert!((cos(0.0_f64) - 1.0).abs() < 1e-12);
/// ```
pub mod prelude {
    pub use crate::{
        abs, acos, asin, atan, ceil, consts, cos, exp, fabs, floor, fmod, is_zero, log, pow, sin,
        sqrt, tan,
    };
}
