//! Closed-form scalar formulas (no shared state, no invariants).

use num_traits::AsPrimitive;

use crate::traits::{Float, Integral, Numeric};

#[inline]
pub fn sqr<T: Numeric>(x: T) -> T {
    x * x
}

/// `x` limited to `[min, max]`.
#[inline]
pub fn clamp<T: Numeric>(x: T, min: T, max: T) -> T {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Sum of all values; zero for an empty slice.
pub fn sum<T: Numeric>(xs: &[T]) -> T {
    xs.iter().fold(T::zero(), |acc, &x| acc + x)
}

/// Arithmetic mean in `f64`; `None` for an empty slice.
pub fn mean<T: Numeric>(xs: &[T]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    let total: f64 = xs.iter().map(|&x| AsPrimitive::<f64>::as_(x)).sum();
    Some(total / xs.len() as f64)
}

#[inline]
pub fn is_even<T: Integral>(n: T) -> bool {
    n % (T::one() + T::one()) == T::zero()
}

#[inline]
pub fn is_odd<T: Integral>(n: T) -> bool {
    !is_even(n)
}

/// Trial division by odd divisors up to `sqrt(n)`.
pub fn is_prime<T: Integral>(n: T) -> bool {
    let two = T::one() + T::one();
    if n < two {
        return false;
    }
    if n == two {
        return true;
    }
    if is_even(n) {
        return false;
    }
    let mut div = two + T::one();
    // div <= n / div avoids overflowing div * div
    while div <= n / div {
        if n % div == T::zero() {
            return false;
        }
        div = div + two;
    }
    true
}

/// `n`-th Fibonacci number (`fibonacci(0) == 0`, `fibonacci(1) == 1`).
///
/// Values below 2, negative ones included, are returned unchanged.
pub fn fibonacci<T: Integral>(n: T) -> T {
    if n < T::one() + T::one() {
        return n;
    }
    let (mut a, mut b) = (T::zero(), T::one());
    let mut i = T::zero();
    while i < n {
        let next = a + b;
        a = b;
        b = next;
        i = i + T::one();
    }
    a
}

/// `n!`; values below 2 yield 1.
pub fn factorial<T: Integral>(n: T) -> T {
    let mut acc = T::one();
    let mut k = T::one() + T::one();
    while k <= n {
        acc = acc * k;
        k = k + T::one();
    }
    acc
}

/// Radians → degrees.
#[inline]
pub fn degree<F: Float>(x: F) -> F {
    x * from_u8::<F>(180) / F::PI()
}

/// Degrees → radians.
#[inline]
pub fn radian<F: Float>(x: F) -> F {
    x * F::PI() / from_u8::<F>(180)
}

#[inline]
fn from_u8<F: Float>(v: u8) -> F {
    F::from_ratio(v, 1u8)
}
