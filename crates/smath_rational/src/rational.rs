//! The `Rational<R>` value type and its normalization rule.
//!
//! Every value is kept in canonical form:
//! - `denom > 0` (the sign lives in the numerator);
//! - `gcd(|numer|, denom) == 1`;
//! - zero is stored as `0/1`.
//!
//! Canonical form makes field-wise equality the same as numeric equality, so
//! hashing the two fields agrees with `==`.

use core::fmt;
use core::hash::{Hash, Hasher};

use smath_core::scalar::gcd_same;
use smath_core::{CommonType, Float, Integral, MathError, MathResult, Promote};

/// Exact fraction over the integer representation `R`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rational<R> {
    pub(crate) numer: R,
    pub(crate) denom: R,
}

impl<R: Integral> Rational<R> {
    /// Build `numer / denom` in canonical form.
    ///
    /// Fails with `DivisionByZero` when `denom == 0`.
    pub fn new(numer: R, denom: R) -> MathResult<Self> {
        if denom == R::zero() {
            tracing::trace!(numer = %numer, "rational constructed with zero denominator");
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::canonical(numer, denom))
    }

    /// `n / 1`.
    #[inline]
    pub fn from_integer(n: R) -> Self {
        Self { numer: n, denom: R::one() }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_integer(R::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_integer(R::one())
    }

    /// Normalize a pair whose denominator is known to be non-zero.
    pub(crate) fn canonical(numer: R, denom: R) -> Self {
        debug_assert!(denom != R::zero(), "canonical() requires a non-zero denominator");
        let (mut n, mut d) = (numer, denom);
        if d.is_negative() {
            n = n.negate();
            d = d.negate();
        }
        // gcd(0, d) is 0 by convention, so zero gets its own branch.
        if n == R::zero() {
            return Self::zero();
        }
        let g = gcd_same(n.abs_value(), d);
        Self { numer: n / g, denom: d / g }
    }

    /// Wrap a pair that is already canonical.
    #[inline]
    pub(crate) fn from_canonical(numer: R, denom: R) -> Self {
        Self { numer, denom }
    }

    #[inline]
    pub fn numer(&self) -> R {
        self.numer
    }

    /// Always positive.
    #[inline]
    pub fn denom(&self) -> R {
        self.denom
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer == R::zero()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == R::one()
    }

    /// Same value in the representation mixed operations with `S` use.
    ///
    /// Panics, like an overflowing primitive, when a `u128` part above
    /// `i128::MAX` is promoted for a signed `S`.
    pub fn promote<S>(self) -> Rational<CommonType<R, S>>
    where
        R: Promote<S>,
        S: Integral,
    {
        Rational::canonical(self.numer.promote(), self.denom.promote())
    }

    /// Nearest floating-point value of `numer / denom`. Never fails.
    #[inline]
    pub fn to_float<F: Float>(self) -> F {
        F::from_ratio(self.numer, self.denom)
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_float()
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.to_float()
    }
}

impl<R: Integral> Default for Rational<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Integral> From<R> for Rational<R> {
    fn from(n: R) -> Self {
        Self::from_integer(n)
    }
}

impl<R: Integral> From<Rational<R>> for f32 {
    fn from(r: Rational<R>) -> Self {
        r.to_f32()
    }
}

impl<R: Integral> From<Rational<R>> for f64 {
    fn from(r: Rational<R>) -> Self {
        r.to_f64()
    }
}

impl<R: Integral> Hash for Rational<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numer.hash(state);
        self.denom.hash(state);
    }
}

impl<R: Integral> fmt::Display for Rational<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == R::one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/* ---------------------------------- Serde --------------------------------- */

#[cfg(feature = "serde")]
mod serde_support {
    use super::Rational;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use smath_core::Integral;

    #[derive(Deserialize)]
    struct RawRational<R> {
        numer: R,
        denom: R,
    }

    /// Input is re-normalized; a zero denominator is rejected.
    impl<'de, R> Deserialize<'de> for Rational<R>
    where
        R: Integral + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawRational::<R>::deserialize(deserializer)?;
            Rational::new(raw.numer, raw.denom).map_err(D::Error::custom)
        }
    }
}

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn parts<R: Integral>(r: Rational<R>) -> (R, R) {
        (r.numer(), r.denom())
    }

    #[test]
    fn keeps_already_canonical_pairs() {
        assert_eq!(parts(Rational::new(4, 3).unwrap()), (4, 3));
    }

    #[test]
    fn single_integer_has_unit_denominator() {
        assert_eq!(parts(Rational::from_integer(5)), (5, 1));
        assert_eq!(parts(Rational::from(-8i64)), (-8, 1));
    }

    #[test]
    fn reduces_by_gcd() {
        assert_eq!(parts(Rational::new(2, 4).unwrap()), (1, 2));
        assert_eq!(parts(Rational::new(-12i64, 18).unwrap()), (-2, 3));
        assert_eq!(parts(Rational::new(100u8, 250).unwrap()), (2, 5));
    }

    #[test]
    fn sign_moves_to_numerator() {
        assert_eq!(parts(Rational::new(1, -2).unwrap()), (-1, 2));
        assert_eq!(parts(Rational::new(-1, -2).unwrap()), (1, 2));
        assert_eq!(parts(Rational::new(6i16, -4).unwrap()), (-3, 2));
    }

    #[test]
    fn zero_numerator_forces_unit_denominator() {
        assert_eq!(parts(Rational::new(0, 7).unwrap()), (0, 1));
        assert_eq!(parts(Rational::new(0, -7).unwrap()), (0, 1));
        assert!(Rational::new(0, 3).unwrap().is_zero());
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(Rational::new(1, 0), Err(MathError::DivisionByZero));
        assert_eq!(Rational::new(0u32, 0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn float_projection() {
        let half = Rational::new(1, 2).unwrap();
        assert_eq!(half.to_f32(), 0.5f32);
        assert_eq!(half.to_f64(), 0.5);
        assert_eq!(f64::from(Rational::new(-3i64, 4).unwrap()), -0.75);
        assert_eq!(f32::from(Rational::new(1u8, 8).unwrap()), 0.125);
    }

    #[test]
    fn promote_keeps_value() {
        let r = Rational::new(-3i8, 4).unwrap();
        let wide: Rational<i16> = r.promote::<u8>();
        assert_eq!(parts(wide), (-3, 4));
    }

    #[test]
    fn equal_values_hash_alike() {
        use std::collections::HashSet;

        let set: HashSet<Rational<i32>> = [(1, 2), (2, 4), (-3, -6), (1, 3)]
            .into_iter()
            .map(|(n, d)| Rational::new(n, d).unwrap())
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Rational::new(5, 10).unwrap()));
    }

    #[test]
    fn display() {
        assert_eq!(Rational::new(6, -4).unwrap().to_string(), "-3/2");
        assert_eq!(Rational::from_integer(7u16).to_string(), "7");
        assert_eq!(Rational::<i32>::default().to_string(), "0");
    }
}
