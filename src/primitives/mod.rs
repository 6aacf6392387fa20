//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the building blocks every function in the crate
//! shares:
//! - The negligibility predicate that terminates series loops
//! - Branch-based absolute values for floats and integers
//! - The fixed constants: tolerance, domain bounds, iteration ceilings
//!
//! These have no knowledge of any particular series or iteration; they are
//! the vocabulary the math layer is written in.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Convergence tolerance, mathematical constants, and iteration ceilings.
pub mod consts;

/// Negligibility test (`is_zero`) and absolute values (`fabs`, `abs`).
pub mod tolerance;
