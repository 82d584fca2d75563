//! smath_core — numeric trait layer, scalar helpers and formulas.
//!
//! This crate is **I/O-free** and holds no state. It defines the pieces the
//! rational layer (`smath_rational`) is built on:
//!
//! - Integral / floating-point classification (`Numeric`, `Integral`, `Float`)
//! - Common-type promotion for mixed integer operations (`Promote`, `CommonType`)
//! - Width-based type selection (`GreaterOf`, `LesserOf`)
//! - `sign`, `gcd`, `lcm`, integer `pow`
//! - Small closed-form formulas (clamp, mean, primality, factorial, angles, ...)
//!
//! The single error kind of the workspace lives here as well.

#![forbid(unsafe_code)]

pub mod error;
pub mod formula;
pub mod scalar;
pub mod traits;

pub use error::{MathError, MathResult};
pub use scalar::{gcd, lcm, pow, sign};
pub use traits::{
    are_integral, is_floating_point, is_integral, CommonType, Float, GreaterOf, Integral,
    LesserOf, Numeric, Promote,
};
