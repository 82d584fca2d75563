//! Comparison and arithmetic operators.
//!
//! Contract:
//! - Two rationals over different representations `R`, `S` are combined in
//!   `CommonType<R, S>`; the result is re-canonicalized.
//! - A primitive integer `n` on either side behaves as `n/1`; every operator is
//!   available in both operand orders and the two orders agree.
//! - Ordering is exact. It uses cross-multiplication `a*d <=> c*b`
//!   (denominators are positive) after reducing by common factors; when the
//!   products still overflow, the continued-fraction expansions are compared
//!   instead, which never leaves the operands' range.
//! - Comparisons never fail on promotion: a `u128` part above `i128::MAX`
//!   against a signed representation is decided by sign, then in `u128`.
//!   Arithmetic on such a pair panics like an overflowing primitive.
//! - `/` by a zero rational panics like primitive integer division;
//!   `checked_div` reports `DivisionByZero` instead.

use core::cmp::Ordering;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::AsPrimitive;
use smath_core::scalar::gcd_same;
use smath_core::{sign, CommonType, Integral, MathError, MathResult, Promote};

use crate::rational::Rational;

/* -------------------------------------------------------------------------- */
/*                      Same-representation kernels                           */
/* -------------------------------------------------------------------------- */

#[inline]
fn add_same<T: Integral>(a: Rational<T>, b: Rational<T>) -> Rational<T> {
    Rational::canonical(a.numer * b.denom + b.numer * a.denom, a.denom * b.denom)
}

#[inline]
fn sub_same<T: Integral>(a: Rational<T>, b: Rational<T>) -> Rational<T> {
    Rational::canonical(a.numer * b.denom - b.numer * a.denom, a.denom * b.denom)
}

#[inline]
fn mul_same<T: Integral>(a: Rational<T>, b: Rational<T>) -> Rational<T> {
    Rational::canonical(a.numer * b.numer, a.denom * b.denom)
}

fn div_same<T: Integral>(a: Rational<T>, b: Rational<T>) -> MathResult<Rational<T>> {
    if b.numer == T::zero() {
        tracing::trace!(dividend = %a, "rational division by zero");
        return Err(MathError::DivisionByZero);
    }
    Ok(Rational::canonical(a.numer * b.denom, a.denom * b.numer))
}

/// Divisor for pre-reduction; `gcd` of a zero operand is 0, which would not divide.
#[inline]
fn reducing_gcd<T: Integral>(a: T, b: T) -> T {
    let g = gcd_same(a.abs_value(), b.abs_value());
    if g == T::zero() {
        T::one()
    } else {
        g
    }
}

/// Exact ordering of two canonical rationals of one representation.
fn cmp_same<T: Integral>(a: &Rational<T>, b: &Rational<T>) -> Ordering {
    if a.denom == b.denom {
        return a.numer.cmp(&b.numer);
    }
    // Scaling both sides by gd/gn keeps the order and shrinks the products.
    let gn = reducing_gcd(a.numer, b.numer);
    let gd = reducing_gcd(a.denom, b.denom);
    let (an, bn) = (a.numer / gn, b.numer / gn);
    let (ad, bd) = (a.denom / gd, b.denom / gd);

    match (an.checked_mul(&bd), bn.checked_mul(&ad)) {
        (Some(l), Some(r)) => l.cmp(&r),
        _ => cmp_continued_fraction(an, ad, bn, bd),
    }
}

/// `floor(n / d)` and the remainder in `[0, d)`; `d > 0`.
#[inline]
fn div_floor<T: Integral>(n: T, d: T) -> (T, T) {
    let (q, r) = (n / d, n % d);
    if r.is_negative() {
        (q - T::one(), r + d)
    } else {
        (q, r)
    }
}

/// Orders `an/ad` against `bn/bd` (`ad, bd > 0`) term by term of their
/// continued fractions. Every intermediate is a quotient or a remainder of the
/// inputs, so nothing overflows.
fn cmp_continued_fraction<T: Integral>(mut an: T, mut ad: T, mut bn: T, mut bd: T) -> Ordering {
    loop {
        let (aq, ar) = div_floor(an, ad);
        let (bq, br) = div_floor(bn, bd);
        if aq != bq {
            return aq.cmp(&bq);
        }
        match (ar == T::zero(), br == T::zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        // ar/ad < br/bd  <=>  bd/br < ad/ar
        (an, ad, bn, bd) = (bd, br, ad, ar);
    }
}

/// Bring two rationals into their common representation.
///
/// Promotion preserves value, so canonical inputs stay canonical. Panics when
/// a part does not fit, see `Promote::promote`.
#[inline]
fn promote_pair<R, S>(
    a: Rational<R>,
    b: Rational<S>,
) -> (Rational<CommonType<R, S>>, Rational<CommonType<R, S>>)
where
    R: Promote<S>,
    S: Integral,
{
    (
        Rational::from_canonical(a.numer.promote(), a.denom.promote()),
        Rational::from_canonical(R::promote_rhs(b.numer), R::promote_rhs(b.denom)),
    )
}

/// `promote_pair` without the panic; `None` when a part does not fit.
#[inline]
fn checked_promote_pair<R, S>(
    a: Rational<R>,
    b: Rational<S>,
) -> Option<(Rational<CommonType<R, S>>, Rational<CommonType<R, S>>)>
where
    R: Promote<S>,
    S: Integral,
{
    Some((
        Rational::from_canonical(a.numer.checked_promote()?, a.denom.checked_promote()?),
        Rational::from_canonical(
            R::checked_promote_rhs(b.numer)?,
            R::checked_promote_rhs(b.denom)?,
        ),
    ))
}

#[inline]
fn widen<R, W>(r: &Rational<R>) -> Rational<W>
where
    R: Integral + AsPrimitive<W>,
    W: Integral,
{
    Rational::from_canonical(AsPrimitive::<W>::as_(r.numer), AsPrimitive::<W>::as_(r.denom))
}

/// Ordering across representations without a common type.
///
/// Signs decide first. Two non-negative values are exact in `u128`, two
/// negative ones (necessarily signed) in `i128`.
fn cmp_wide<R: Integral, S: Integral>(a: &Rational<R>, b: &Rational<S>) -> Ordering {
    let (sa, sb) = (sign(a.numer), sign(b.numer));
    if sa != sb {
        return sa.cmp(&sb);
    }
    if sa >= 0 {
        cmp_same(&widen::<R, u128>(a), &widen::<S, u128>(b))
    } else {
        cmp_same(&widen::<R, i128>(a), &widen::<S, i128>(b))
    }
}

impl<R: Integral> Rational<R> {
    /// `self / rhs`, or `DivisionByZero` when `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> MathResult<Self> {
        div_same(self, rhs)
    }
}

/* -------------------------------------------------------------------------- */
/*                           Rational ⟷ Rational                              */
/* -------------------------------------------------------------------------- */

impl<R, S> PartialEq<Rational<S>> for Rational<R>
where
    R: Promote<S>,
    S: Integral,
{
    #[inline]
    fn eq(&self, other: &Rational<S>) -> bool {
        match checked_promote_pair(*self, *other) {
            Some((a, b)) => a.numer == b.numer && a.denom == b.denom,
            None => cmp_wide(self, other) == Ordering::Equal,
        }
    }
}

impl<R: Promote<R>> Eq for Rational<R> {}

impl<R, S> PartialOrd<Rational<S>> for Rational<R>
where
    R: Promote<S>,
    S: Integral,
{
    #[inline]
    fn partial_cmp(&self, other: &Rational<S>) -> Option<Ordering> {
        Some(match checked_promote_pair(*self, *other) {
            Some((a, b)) => cmp_same(&a, &b),
            None => cmp_wide(self, other),
        })
    }
}

impl<R: Promote<R>> Ord for Rational<R> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_same(self, other)
    }
}

macro_rules! rational_binop {
    ($Op:ident, $op:ident, $kernel:ident) => {
        impl<R, S> $Op<Rational<S>> for Rational<R>
        where
            R: Promote<S>,
            S: Integral,
        {
            type Output = Rational<CommonType<R, S>>;

            #[inline]
            fn $op(self, rhs: Rational<S>) -> Self::Output {
                let (a, b) = promote_pair(self, rhs);
                $kernel(a, b)
            }
        }
    };
}

rational_binop!(Add, add, add_same);
rational_binop!(Sub, sub, sub_same);
rational_binop!(Mul, mul, mul_same);

impl<R, S> Div<Rational<S>> for Rational<R>
where
    R: Promote<S>,
    S: Integral,
{
    type Output = Rational<CommonType<R, S>>;

    /// Panics when `rhs` is zero; see `checked_div`.
    fn div(self, rhs: Rational<S>) -> Self::Output {
        let (a, b) = promote_pair(self, rhs);
        match div_same(a, b) {
            Ok(q) => q,
            Err(e) => panic!("attempt to divide a rational by zero ({e})"),
        }
    }
}

macro_rules! rational_assign {
    ($Op:ident, $op:ident, $kernel:ident) => {
        impl<R: Integral> $Op for Rational<R> {
            #[inline]
            fn $op(&mut self, rhs: Self) {
                *self = $kernel(*self, rhs);
            }
        }
    };
}

rational_assign!(AddAssign, add_assign, add_same);
rational_assign!(SubAssign, sub_assign, sub_same);
rational_assign!(MulAssign, mul_assign, mul_same);

impl<R: Integral> DivAssign for Rational<R> {
    /// Panics when `rhs` is zero.
    fn div_assign(&mut self, rhs: Self) {
        *self = match div_same(*self, rhs) {
            Ok(q) => q,
            Err(e) => panic!("attempt to divide a rational by zero ({e})"),
        };
    }
}

impl<R: Integral + Neg<Output = R>> Neg for Rational<R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Rational::from_canonical(-self.numer, self.denom)
    }
}

impl<R: Integral> Sum for Rational<R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), add_same)
    }
}

impl<R: Integral> Product for Rational<R> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), mul_same)
    }
}

/* -------------------------------------------------------------------------- */
/*                       Rational ⟷ primitive integer                         */
/* -------------------------------------------------------------------------- */

macro_rules! integer_operand {
    (@arith $t:ty: $($Op:ident $op:ident),*) => { $(
        impl<R> $Op<$t> for Rational<R>
        where
            R: Promote<$t>,
        {
            type Output = Rational<CommonType<R, $t>>;

            #[inline]
            fn $op(self, rhs: $t) -> Self::Output {
                $Op::$op(self, Rational::from_integer(rhs))
            }
        }

        impl<R> $Op<Rational<R>> for $t
        where
            $t: Promote<R>,
            R: Integral,
        {
            type Output = Rational<CommonType<$t, R>>;

            #[inline]
            fn $op(self, rhs: Rational<R>) -> Self::Output {
                $Op::$op(Rational::from_integer(self), rhs)
            }
        }
    )* };

    ($($t:ty),*) => { $(
        impl<R> PartialEq<$t> for Rational<R>
        where
            R: Promote<$t>,
        {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                *self == Rational::from_integer(*other)
            }
        }

        impl<R> PartialEq<Rational<R>> for $t
        where
            $t: Promote<R>,
            R: Integral,
        {
            #[inline]
            fn eq(&self, other: &Rational<R>) -> bool {
                Rational::from_integer(*self) == *other
            }
        }

        impl<R> PartialOrd<$t> for Rational<R>
        where
            R: Promote<$t>,
        {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.partial_cmp(&Rational::from_integer(*other))
            }
        }

        impl<R> PartialOrd<Rational<R>> for $t
        where
            $t: Promote<R>,
            R: Integral,
        {
            #[inline]
            fn partial_cmp(&self, other: &Rational<R>) -> Option<Ordering> {
                Rational::from_integer(*self).partial_cmp(other)
            }
        }

        integer_operand!(@arith $t: Add add, Sub sub, Mul mul, Div div);
    )* };
}

integer_operand!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i32, d: i32) -> Rational<i32> {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn rational_comparisons() {
        let (r1, r2, r3) = (q(1, 2), q(2, 4), q(1, 3));
        assert!(r1 == r2);
        assert!(r1 != r3);
        assert!(r1 > r3);
        assert!(r3 < r2);
        assert!(r1 >= r2);
        assert!(r3 <= r2);
        assert!(q(-1, 2) == q(1, -2));
        assert_eq!(r1.cmp(&r3), Ordering::Greater);
    }

    #[test]
    fn integer_comparisons_both_orders() {
        let (r1, r2, r3, r4) = (q(1, 2), q(2, 4), q(1, 3), q(5, 1));
        assert!(r4 == 5);
        assert!(5 == r4);
        assert!(r1 != 3);
        assert!(8 != r2);
        assert!(0 < r1);
        assert!(r2 < 1);
        assert!(8 > r4);
        assert!(r2 > -1);
        assert!(5 <= r4);
        assert!(r3 <= 1);
        assert!(1 >= r3);
        assert!(r1 >= -8);
        assert!(q(-1, 2) <= 0);
        assert!(q(1, -2) <= 0);
    }

    #[test]
    fn rational_arithmetic() {
        let (r1, r2, r3, r4) = (q(1, 2), q(2, 4), q(1, 3), q(5, 1));
        assert!(r1 + r2 == 1);
        assert_eq!(r4 - r1, q(9, 2));
        assert_eq!(r2 * r3, q(1, 6));
        assert_eq!(r1 / r3, q(3, 2));
    }

    #[test]
    fn integer_arithmetic_both_orders() {
        let (r1, r2, r3, r4) = (q(1, 2), q(2, 4), q(1, 3), q(5, 1));
        assert_eq!(r1 + 1, q(3, 2));
        assert_eq!(2 + r2, q(5, 2));
        assert_eq!(r3 - 3, q(-8, 3));
        assert_eq!(2 - r1, q(3, 2));
        assert!(r4 * 2 == 10);
        assert_eq!(6 * r2, r1 * 6);
        assert!(1 / r2 == 2);
        assert_eq!(r3 / 3, q(1, 9));
    }

    #[test]
    fn mixed_representations_compare_and_combine() {
        assert!(Rational::new(1i32, 2).unwrap() == Rational::new(1i64, 2).unwrap());
        assert!(Rational::new(3u64, 2).unwrap() == Rational::new(3i16, 2).unwrap());
        assert!(Rational::new(-1i8, 2).unwrap() < Rational::new(1u8, 3).unwrap());

        let sum: Rational<i64> = Rational::new(1i32, 2).unwrap() + Rational::new(1i64, 3).unwrap();
        assert_eq!((sum.numer(), sum.denom()), (5, 6));

        let diff: Rational<i16> = Rational::new(1u8, 4).unwrap() - Rational::new(1i8, 2).unwrap();
        assert_eq!((diff.numer(), diff.denom()), (-1, 4));
    }

    #[test]
    fn checked_div_reports_zero_divisor() {
        assert_eq!(q(1, 2).checked_div(q(0, 5)), Err(MathError::DivisionByZero));
        assert_eq!(q(1, 2).checked_div(q(1, 4)), Ok(q(2, 1)));
    }

    #[test]
    #[should_panic(expected = "divide a rational by zero")]
    fn div_operator_panics_on_zero() {
        let _ = q(1, 2) / q(0, 1);
    }

    #[test]
    #[should_panic(expected = "divide a rational by zero")]
    fn div_by_integer_zero_panics() {
        let _ = q(1, 2) / 0;
    }

    #[test]
    fn assign_ops_and_neg() {
        let mut x = q(1, 2);
        x += q(1, 3);
        assert_eq!(x, q(5, 6));
        x -= q(1, 6);
        assert_eq!(x, q(2, 3));
        x *= q(3, 4);
        assert_eq!(x, q(1, 2));
        x /= q(1, 4);
        assert_eq!(x, 2);
        assert_eq!(-q(3, 7), q(-3, 7));
        assert_eq!(-q(0, 7), 0);
    }

    #[test]
    fn sum_and_product() {
        let xs = [q(1, 2), q(1, 3), q(1, 6)];
        assert_eq!(xs.iter().copied().sum::<Rational<i32>>(), 1);
        assert_eq!(xs.iter().copied().product::<Rational<i32>>(), q(1, 36));
        assert_eq!(core::iter::empty::<Rational<i32>>().sum::<Rational<i32>>(), 0);
    }

    #[test]
    fn ordering_reduces_before_cross_multiplying() {
        // 1e9 * 6 overflows i32; after dividing both denominators by 3 it fits.
        let a = Rational::new(1_000_000_000, 3).unwrap();
        let b = Rational::new(1_000_000_001, 6).unwrap();
        assert!(a > b);
        assert!(b < a);

        let c = Rational::new(i32::MAX - 1, i32::MAX).unwrap();
        let d = Rational::new(i32::MAX - 3, i32::MAX).unwrap();
        assert!(c > d);
    }

    #[test]
    fn ordering_is_exact_when_products_overflow() {
        let a = Rational::new(i32::MAX - 1, i32::MAX).unwrap();
        let b = Rational::new(i32::MAX - 2, i32::MAX - 1).unwrap();
        assert_eq!(a.cmp(&b), Ordering::Greater);
        assert_eq!(b.cmp(&a), Ordering::Less);
        assert!(a > b && a != b);

        let c = Rational::new(i32::MAX, 2).unwrap();
        let d = Rational::new(i32::MAX - 2, 3).unwrap();
        assert!(c > d);

        // Negative near-equal pair: -(1 - 1/MAX) < -(1 - 1/(MAX-1)).
        let (na, nb) = (-a, -b);
        assert_eq!(na.cmp(&nb), Ordering::Less);
        assert_eq!(na.cmp(&na), Ordering::Equal);
    }

    #[test]
    fn ordering_is_exact_at_u128_limit() {
        let m = u128::MAX;
        let a = Rational::new(m - 1, m).unwrap();
        let b = Rational::new(m - 2, m - 1).unwrap();
        assert_eq!(a.cmp(&b), Ordering::Greater);
        assert!(a != b);

        let big = Rational::new(m, m - 1).unwrap();
        let bigger = Rational::new(m - 1, m - 2).unwrap();
        assert_eq!(big.cmp(&bigger), Ordering::Less);
        assert_eq!(bigger.partial_cmp(&big), Some(Ordering::Greater));
    }

    #[test]
    fn continued_fraction_handles_negative_quotients() {
        assert_eq!(cmp_continued_fraction(-7i8, 2, -10, 3), Ordering::Less);
        assert_eq!(cmp_continued_fraction(-6i8, 4, -3, 2), Ordering::Equal);
        assert_eq!(cmp_continued_fraction(-1i8, 3, 0, 1), Ordering::Less);
        assert_eq!(cmp_continued_fraction(5u8, 3, 8, 5), Ordering::Greater);
    }

    #[test]
    fn u128_above_i128_range_compares_with_signed() {
        let huge = Rational::from_integer(u128::MAX);
        assert!(huge != Rational::from_integer(-1i8));
        assert!(huge != -1i32);
        assert!(huge > -1i32);
        assert!(-1i64 < huge);
        assert!(huge > Rational::new(i128::MAX, 1).unwrap());

        let tiny = Rational::new(1u128, u128::MAX).unwrap();
        assert!(tiny > 0i8);
        assert!(tiny < Rational::new(1i64, 1_000_000).unwrap());
        assert!(tiny == Rational::new(1u128, u128::MAX).unwrap());
    }

    #[test]
    #[should_panic(expected = "does not fit the common representation")]
    fn arithmetic_beyond_common_range_panics() {
        let _ = Rational::from_integer(u128::MAX) + Rational::from_integer(1i8);
    }

    #[test]
    fn sort_is_numeric() {
        let mut v = vec![q(3, 4), q(-1, 2), q(1, 3), q(2, 1), q(0, 1)];
        v.sort();
        assert_eq!(v, vec![q(-1, 2), q(0, 1), q(1, 3), q(3, 4), q(2, 1)]);
    }
}
