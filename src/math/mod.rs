//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer holds the elementary functions themselves, each computed from
//! first principles on top of Layer 1:
//! - Square root by damped Newton iteration
//! - Trigonometric functions from the sine Maclaurin series
//! - Inverse trigonometric functions from the arcsine series
//! - Exponential and natural logarithm, and the power function composed
//!   from them
//! - Rounding and floating remainder via integer truncation
//!
//! Modules here may call each other (cosine leans on sine, `pow` on
//! `exp`/`log`) but never reach outside the crate for numerics.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Inverse trigonometric functions (asin, acos, atan).
pub mod arc;

/// Natural exponential by Maclaurin series.
pub mod exp;

/// Natural logarithm by series and iterative refinement.
pub mod log;

/// Real exponentiation through the exp/log identity.
pub mod pow;

/// Rounding (ceil, floor) and floating remainder (fmod).
pub mod round;

/// Square root by Newton iteration.
pub mod sqrt;

/// Trigonometric functions (sin, cos, tan).
pub mod trig;
