//! smath_rational — exact rational numbers over bounded-width integers.
//!
//! - `Rational<R>` keeps canonical form on every construction (positive
//!   denominator, coprime parts, zero as `0/1`).
//! - Operators work between two rationals of any representations and between
//!   a rational and any primitive integer, in both operand orders; mixed
//!   operands are combined in `smath_core::CommonType`.
//! - `math` holds `sign`, `abs`, `reciprocal`, `pow` and the float-based
//!   rounding family.
//! - `r(n)` / `ratio!` turn integer constants into rationals.
//!
//! The only failure is `MathError::DivisionByZero`. Arithmetic is exact only
//! within the range of the chosen representation; overflow behaves as it does
//! for the primitive.
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod literal;
pub mod math;
pub mod ops;
pub mod rational;

pub use literal::r;
pub use rational::Rational;
pub use smath_core::{CommonType, Float, Integral, MathError, MathResult, Promote};
