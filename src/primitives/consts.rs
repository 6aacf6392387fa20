//! Fixed numeric configuration shared by every function in the crate.
//!
//! ## Purpose
//!
//! This module centralizes the convergence tolerance, the mathematical
//! constants, and the iteration ceilings. Every series loop and every
//! root-finding loop in the crate reads its stopping rules from here, so the
//! accuracy contract of the whole library is visible in one place.
//!
//! ## Design notes
//!
//! * **Compile-time configuration**: The values are `pub const` so callers can
//!   interpret results (for example the [`EPS`] clamp returned by `atan` for
//!   non-positive arguments), but they are not runtime-tunable.
//! * **Ceilings**: Each iterative loop carries a hard iteration ceiling in
//!   addition to its convergence predicate. The ceilings are sized so that no
//!   finite in-domain input ever reaches them; their job is to guarantee
//!   termination when NaN or infinity poisons a loop that the predicate alone
//!   would never exit.
//!
//! ## Invariants
//!
//! * `NEGLIGIBLE == EPS * EPS`.
//! * All ceilings are nonzero.

/// Convergence tolerance for iterative refinement.
///
/// Newton-Raphson loops stop once successive iterates differ by less than
/// this value, and the exponential series stops once its running term drops
/// to it.
pub const EPS: f64 = 1e-17;

/// Threshold below which a magnitude is treated as zero.
///
/// Equal to `EPS * EPS`. Series loops terminate when their running term (not
/// the accumulated sum) falls below this value.
pub const NEGLIGIBLE: f64 = EPS * EPS;

/// The circle constant, used by the trigonometric phase identities.
pub const PI: f64 = core::f64::consts::PI;

/// Euler's number, the base of the range reduction inside `log`.
pub const E: f64 = core::f64::consts::E;

/// Domain bound for the inverse sine and cosine.
///
/// Inputs with magnitude above this bound yield NaN; inputs exactly at the
/// bound take a closed-form branch because the series does not converge
/// there.
pub const ARC_DOMAIN: f64 = 1.0;

/// Iteration ceiling for the Newton-Raphson square root.
///
/// The iteration is seeded at 1, so for an argument of magnitude `2^k` it
/// first walks halving steps toward the root, roughly `k / 2` of them. The
/// largest finite `f64` needs about 510 such steps plus a handful of
/// quadratic ones; 2048 covers every finite input with room to spare.
pub const SQRT_MAX_ITER: u32 = 2048;

/// Term ceiling for the sine and inverse-sine series.
///
/// The inverse-sine series converges polynomially near the domain boundary,
/// so legitimate inputs can want tens of thousands of terms. One million
/// bounds the loop for NaN and overflowed arguments without cutting off any
/// input that converges in reasonable time.
pub const SERIES_MAX_TERMS: u32 = 1_000_000;

/// Term ceiling for the exponential series.
///
/// Terms start shrinking once the index passes the argument, and arguments
/// past ~710 overflow long before this many terms; real inputs use at most
/// a few hundred.
pub const EXP_MAX_TERMS: u32 = 4096;

/// Term ceiling for the logarithm series on the sub-unity branch.
///
/// This is `i16::MAX`, and unlike the other ceilings it is load-bearing:
/// arguments approaching zero saturate it, which is what produces the
/// documented accuracy falloff below ~6e-4 and the -inf result at zero.
pub const LOG_SERIES_MAX_TERMS: u32 = i16::MAX as u32;

/// Ceiling on divisions by `E` during logarithm range reduction.
///
/// `exp` overflows `f64` near 710, so more than 710 divisions never happen
/// for a finite argument; the ceiling exists to terminate on infinity.
pub const LOG_REDUCE_MAX: u32 = 1024;

/// Iteration ceiling for the logarithm's Newton-style refinement.
///
/// The refinement converges in a handful of steps from its seed; 64 is
/// purely a termination guarantee.
pub const LOG_NEWTON_MAX_ITER: u32 = 64;
