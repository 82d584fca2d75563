//! Shorthand for integer constants used as rationals.
//!
//! `3 / r(5)` is rational arithmetic (`3/5`), not integer division.

use crate::rational::Rational;

/// `n / 1` over `i64`.
#[inline]
pub const fn r(n: i64) -> Rational<i64> {
    Rational { numer: n, denom: 1 }
}

/// Rational constant from literals: `ratio!(7)`, `ratio!(-3 / 8)` or
/// `ratio!(n, d)` for expressions.
///
/// Panics on a zero denominator; use `Rational::new` for values that are not
/// known to be valid.
#[macro_export]
macro_rules! ratio {
    ($n:literal / $d:literal) => {
        $crate::ratio!($n, $d)
    };
    ($n:expr, $d:expr) => {
        match $crate::Rational::new($n, $d) {
            Ok(q) => q,
            Err(e) => panic!("ratio!: {}", e),
        }
    };
    ($n:expr) => {
        $crate::Rational::from_integer($n)
    };
}
