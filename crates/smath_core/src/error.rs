//! Error set shared by every fallible operation in the workspace.

use thiserror::Error;

/// The only failure mode of exact arithmetic: a zero where a divisor is needed.
///
/// Raised by constructing a rational with a zero denominator, dividing by a
/// zero rational, taking the reciprocal of zero, or raising zero to a
/// negative power.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
}

pub type MathResult<T> = Result<T, MathError>;
