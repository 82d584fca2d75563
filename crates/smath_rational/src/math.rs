//! Math functions on rationals.
//!
//! `sign`, `abs`, `reciprocal` and `pow` stay exact. The rounding family goes
//! through the floating-point projection and returns a float.

use smath_core::{scalar, Float, Integral, MathError, MathResult};

use crate::rational::Rational;

/// Sign of the numerator (the denominator is always positive).
#[inline]
pub fn sign<R: Integral>(r: Rational<R>) -> i32 {
    scalar::sign(r.numer)
}

#[inline]
pub fn abs<R: Integral>(r: Rational<R>) -> Rational<R> {
    Rational::from_canonical(r.numer.abs_value(), r.denom)
}

/// `denom / numer`; `DivisionByZero` for a zero rational.
pub fn reciprocal<R: Integral>(r: Rational<R>) -> MathResult<Rational<R>> {
    if r.numer == R::zero() {
        tracing::trace!("reciprocal of zero");
        return Err(MathError::DivisionByZero);
    }
    Ok(Rational::canonical(r.denom, r.numer))
}

/// `r` raised to an integer power.
///
/// `pow(r, 0)` is `1` for every `r`; a negative exponent inverts first and
/// fails like `reciprocal` when `r` is zero.
pub fn pow<R: Integral>(r: Rational<R>, exponent: i32) -> MathResult<Rational<R>> {
    if exponent < 0 {
        return Ok(pow_unsigned(reciprocal(r)?, exponent.unsigned_abs()));
    }
    Ok(pow_unsigned(r, exponent.unsigned_abs()))
}

fn pow_unsigned<R: Integral>(r: Rational<R>, exponent: u32) -> Rational<R> {
    if exponent == 0 {
        return Rational::one();
    }
    Rational::canonical(scalar::pow(r.numer, exponent), scalar::pow(r.denom, exponent))
}

/// Round half away from zero, in `F`.
#[inline]
pub fn round_as<F: Float, R: Integral>(r: Rational<R>) -> F {
    r.to_float::<F>().round()
}

#[inline]
pub fn floor_as<F: Float, R: Integral>(r: Rational<R>) -> F {
    r.to_float::<F>().floor()
}

#[inline]
pub fn ceil_as<F: Float, R: Integral>(r: Rational<R>) -> F {
    r.to_float::<F>().ceil()
}

#[inline]
pub fn trunc_as<F: Float, R: Integral>(r: Rational<R>) -> F {
    r.to_float::<F>().trunc()
}

#[inline]
pub fn round<R: Integral>(r: Rational<R>) -> f64 {
    round_as(r)
}

#[inline]
pub fn floor<R: Integral>(r: Rational<R>) -> f64 {
    floor_as(r)
}

#[inline]
pub fn ceil<R: Integral>(r: Rational<R>) -> f64 {
    ceil_as(r)
}

#[inline]
pub fn trunc<R: Integral>(r: Rational<R>) -> f64 {
    trunc_as(r)
}

/* ------------------------------ Method forms ------------------------------ */

impl<R: Integral> Rational<R> {
    #[inline]
    pub fn sign(self) -> i32 {
        sign(self)
    }

    #[inline]
    pub fn abs(self) -> Self {
        abs(self)
    }

    #[inline]
    pub fn reciprocal(self) -> MathResult<Self> {
        reciprocal(self)
    }

    #[inline]
    pub fn pow(self, exponent: i32) -> MathResult<Self> {
        pow(self, exponent)
    }

    #[inline]
    pub fn round(self) -> f64 {
        round(self)
    }

    #[inline]
    pub fn floor(self) -> f64 {
        floor(self)
    }

    #[inline]
    pub fn ceil(self) -> f64 {
        ceil(self)
    }

    #[inline]
    pub fn trunc(self) -> f64 {
        trunc(self)
    }
}
