//! Scalar helpers: `sign`, `gcd`, `lcm`, integer `pow`.
//!
//! Pure functions over primitive numbers. Mixed-type `gcd`/`lcm` work in the
//! promoted `CommonType`.

use crate::traits::{CommonType, Integral, Numeric, Promote};
use num_traits::{One, Zero};

/// −1, 0 or +1 depending on how `x` compares to the zero of its type.
///
/// NaN compares neither above nor below zero and yields 0.
#[inline]
pub fn sign<T: Numeric>(x: T) -> i32 {
    if x > T::zero() {
        1
    } else if x < T::zero() {
        -1
    } else {
        0
    }
}

/// Greatest common divisor, computed in the common type of `a` and `b`.
///
/// A zero operand yields `0` (not the other operand).
#[inline]
pub fn gcd<T, U>(a: T, b: U) -> CommonType<T, U>
where
    T: Promote<U>,
    U: Integral,
{
    gcd_same(a.promote(), T::promote_rhs(b))
}

/// `gcd` for two values of one representation.
///
/// The larger operand is reduced modulo the smaller first; the Euclidean step
/// then runs until the remainder is zero. With negative operands the result
/// carries the sign produced by truncating `%`; callers that need a divisor
/// pass absolute values.
pub fn gcd_same<T: Integral>(a: T, b: T) -> T {
    if a == T::zero() || b == T::zero() {
        return T::zero();
    }
    let (mut b, mut r) = if a >= b { (b, a % b) } else { (a, b % a) };
    while r != T::zero() {
        let next = b % r;
        b = r;
        r = next;
    }
    b
}

/// Least common multiple; `1` when either operand is zero.
#[inline]
pub fn lcm<T, U>(a: T, b: U) -> CommonType<T, U>
where
    T: Promote<U>,
    U: Integral,
{
    let (a, b) = (a.promote(), T::promote_rhs(b));
    if a == <CommonType<T, U>>::zero() || b == <CommonType<T, U>>::zero() {
        return <CommonType<T, U>>::one();
    }
    a * b / gcd_same(a, b)
}

/// `base` raised to a non-negative integer power; `pow(x, 0) == 1`.
///
/// Square-and-multiply; the running square is only advanced while exponent
/// bits remain, so no intermediate exceeds the final result's magnitude.
pub fn pow<T: Numeric>(base: T, exponent: u32) -> T {
    let mut acc = T::one();
    let mut base = base;
    let mut exp = exponent;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base;
        }
        exp >>= 1;
        if exp > 0 {
            base = base * base;
        }
    }
    acc
}
