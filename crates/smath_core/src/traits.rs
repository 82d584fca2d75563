//! Numeric trait layer.
//!
//! Three concerns, all resolved at the type level (no runtime cost):
//! - **Classification**: `Numeric` / `Integral` / `Float` bundle the
//!   `num_traits` capabilities the helpers need and are implemented for the ten
//!   fixed-width integers and for `f32`/`f64`; `Numeric::INTEGRAL` tells them
//!   apart.
//! - **Promotion**: `Promote<Rhs>` names the common type two integer
//!   representations are combined in. The rule table is closed and symmetric:
//!   same signedness picks the wider type; a signed type strictly wider than
//!   the unsigned one wins; otherwise the narrowest signed type wider than the
//!   unsigned one is used, capped at `i128`.
//! - **Width selection**: `GreaterOf<T, U>` / `LesserOf<T, U>` pick by storage
//!   width; on equal width both pick `T`.

use core::fmt::{Debug, Display};
use core::hash::Hash;

use num_traits::{AsPrimitive, FloatConst, Num, NumCast, PrimInt};

/* -------------------------------------------------------------------------- */
/*                               Classification                               */
/* -------------------------------------------------------------------------- */

/// Any primitive number the helpers accept.
pub trait Numeric:
    Num + Copy + PartialOrd + Debug + Display + AsPrimitive<f32> + AsPrimitive<f64>
{
    /// `true` for integer representations, `false` for floating point.
    const INTEGRAL: bool;
}

/// Fixed-width integer representation usable as a rational's numerator/denominator.
pub trait Integral:
    Numeric + PrimInt + Hash + AsPrimitive<i128> + AsPrimitive<u128>
{
    const SIGNED: bool;
    const BITS: u32 = (core::mem::size_of::<Self>() * 8) as u32;

    #[inline]
    fn is_negative(self) -> bool {
        self < Self::zero()
    }

    /// `|self|`. Identity for unsigned types; overflows on `MIN` like the primitive.
    #[inline]
    fn abs_value(self) -> Self {
        if self.is_negative() {
            Self::zero() - self
        } else {
            self
        }
    }

    /// `-self`. Only called on negative values, so unsigned types never reach it.
    #[inline]
    fn negate(self) -> Self {
        Self::zero() - self
    }
}

/// Floating-point representation a rational can be projected onto.
pub trait Float: Numeric + num_traits::Float + FloatConst {
    /// Direct integer conversion, so `f32` never goes through `f64`.
    fn from_integral<R: Integral>(x: R) -> Self;

    /// Nearest representable value of `numer / denom`.
    #[inline]
    fn from_ratio<R: Integral>(numer: R, denom: R) -> Self {
        Self::from_integral(numer) / Self::from_integral(denom)
    }
}

/// Is `T` an integer representation?
#[inline]
pub fn is_integral<T: Numeric>() -> bool {
    T::INTEGRAL
}

/// Are both `T` and `U` integer representations?
#[inline]
pub fn are_integral<T: Numeric, U: Numeric>() -> bool {
    T::INTEGRAL && U::INTEGRAL
}

#[inline]
pub fn is_floating_point<T: Numeric>() -> bool {
    !T::INTEGRAL
}

macro_rules! impl_integral {
    ($signed:literal: $($t:ty),*) => { $(
        impl Numeric for $t {
            const INTEGRAL: bool = true;
        }

        impl Integral for $t {
            const SIGNED: bool = $signed;
        }
    )* };
}

impl_integral!(true: i8, i16, i32, i64, i128);
impl_integral!(false: u8, u16, u32, u64, u128);

macro_rules! impl_float {
    ($($t:ty),*) => { $(
        impl Numeric for $t {
            const INTEGRAL: bool = false;
        }

        impl Float for $t {
            #[inline]
            fn from_integral<R: Integral>(x: R) -> Self {
                AsPrimitive::<$t>::as_(x)
            }
        }
    )* };
}

impl_float!(f32, f64);

/* -------------------------------------------------------------------------- */
/*                                  Promotion                                 */
/* -------------------------------------------------------------------------- */

/// Common representation for combining `Self` with `Rhs`.
///
/// `Promote<U> for T` and `Promote<T> for U` always name the same `Output`.
/// Conversions are checked: the one lossy pairing (`u128` with a signed type,
/// promoted to `i128`) reports values above `i128::MAX` as `None`.
pub trait Promote<Rhs: Integral = Self>: Integral {
    type Output: Integral;

    /// Convert the left operand into the common type.
    fn checked_promote(self) -> Option<<Self as Promote<Rhs>>::Output>;

    /// Convert the right operand into the common type.
    fn checked_promote_rhs(rhs: Rhs) -> Option<<Self as Promote<Rhs>>::Output>;

    /// `checked_promote`, panicking like an overflowing primitive when the
    /// value does not fit.
    #[inline]
    fn promote(self) -> <Self as Promote<Rhs>>::Output {
        match self.checked_promote() {
            Some(v) => v,
            None => panic!("{} does not fit the common representation", self),
        }
    }

    #[inline]
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output {
        match Self::checked_promote_rhs(rhs) {
            Some(v) => v,
            None => panic!("{} does not fit the common representation", rhs),
        }
    }
}

/// The type `T` and `U` are promoted to for mixed arithmetic.
pub type CommonType<T, U> = <T as Promote<U>>::Output;

macro_rules! promote_table {
    ($($lhs:ty => { $($rhs:ty : $out:ty),* $(,)? })*) => { $($(
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn checked_promote(self) -> Option<$out> { <$out as NumCast>::from(self) }
            #[inline]
            fn checked_promote_rhs(rhs: $rhs) -> Option<$out> { <$out as NumCast>::from(rhs) }
        }
    )*)* };
}

promote_table! {
    i8   => { i8: i8,     i16: i16,   i32: i32,   i64: i64,   i128: i128,
              u8: i16,    u16: i32,   u32: i64,   u64: i128,  u128: i128 }
    i16  => { i8: i16,    i16: i16,   i32: i32,   i64: i64,   i128: i128,
              u8: i16,    u16: i32,   u32: i64,   u64: i128,  u128: i128 }
    i32  => { i8: i32,    i16: i32,   i32: i32,   i64: i64,   i128: i128,
              u8: i32,    u16: i32,   u32: i64,   u64: i128,  u128: i128 }
    i64  => { i8: i64,    i16: i64,   i32: i64,   i64: i64,   i128: i128,
              u8: i64,    u16: i64,   u32: i64,   u64: i128,  u128: i128 }
    i128 => { i8: i128,   i16: i128,  i32: i128,  i64: i128,  i128: i128,
              u8: i128,   u16: i128,  u32: i128,  u64: i128,  u128: i128 }
    u8   => { i8: i16,    i16: i16,   i32: i32,   i64: i64,   i128: i128,
              u8: u8,     u16: u16,   u32: u32,   u64: u64,   u128: u128 }
    u16  => { i8: i32,    i16: i32,   i32: i32,   i64: i64,   i128: i128,
              u8: u16,    u16: u16,   u32: u32,   u64: u64,   u128: u128 }
    u32  => { i8: i64,    i16: i64,   i32: i64,   i64: i64,   i128: i128,
              u8: u32,    u16: u32,   u32: u32,   u64: u64,   u128: u128 }
    u64  => { i8: i128,   i16: i128,  i32: i128,  i64: i128,  i128: i128,
              u8: u64,    u16: u64,   u32: u64,   u64: u64,   u128: u128 }
    u128 => { i8: i128,   i16: i128,  i32: i128,  i64: i128,  i128: i128,
              u8: u128,   u16: u128,  u32: u128,  u64: u128,  u128: u128 }
}

/* -------------------------------------------------------------------------- */
/*                               Width selection                              */
/* -------------------------------------------------------------------------- */

/// Storage-width class of a numeric type (1, 2, 4, 8 or 16 bytes).
pub trait Width {
    type Bytes;
}

pub mod width {
    //! Marker types backing `GreaterOf` / `LesserOf`.

    pub struct B1;
    pub struct B2;
    pub struct B4;
    pub struct B8;
    pub struct B16;

    /// Selects the left operand.
    pub struct Left;
    /// Selects the right operand.
    pub struct Right;

    pub trait Pick {
        type Of<T, U>;
    }

    impl Pick for Left {
        type Of<T, U> = T;
    }

    impl Pick for Right {
        type Of<T, U> = U;
    }

    /// Ordering between two width classes, expressed as which side to pick.
    pub trait Compare<Rhs> {
        type Greater: Pick;
        type Lesser: Pick;
    }

    macro_rules! compare_table {
        ($($a:ident => { $($b:ident : $g:ident $l:ident),* })*) => { $($(
            impl Compare<$b> for $a {
                type Greater = $g;
                type Lesser = $l;
            }
        )*)* };
    }

    compare_table! {
        B1  => { B1: Left Left,   B2: Right Left,  B4: Right Left,  B8: Right Left,  B16: Right Left }
        B2  => { B1: Left Right,  B2: Left Left,   B4: Right Left,  B8: Right Left,  B16: Right Left }
        B4  => { B1: Left Right,  B2: Left Right,  B4: Left Left,   B8: Right Left,  B16: Right Left }
        B8  => { B1: Left Right,  B2: Left Right,  B4: Left Right,  B8: Left Left,   B16: Right Left }
        B16 => { B1: Left Right,  B2: Left Right,  B4: Left Right,  B8: Left Right,  B16: Left Left }
    }
}

macro_rules! impl_width {
    ($($t:ty => $b:ident),*) => { $(
        impl Width for $t {
            type Bytes = width::$b;
        }
    )* };
}

impl_width!(
    i8 => B1, u8 => B1,
    i16 => B2, u16 => B2,
    i32 => B4, u32 => B4, f32 => B4,
    i64 => B8, u64 => B8, f64 => B8,
    i128 => B16, u128 => B16
);

/// The wider of `T` and `U` (`T` on a tie).
pub type GreaterOf<T, U> =
    <<<T as Width>::Bytes as width::Compare<<U as Width>::Bytes>>::Greater as width::Pick>::Of<T, U>;

/// The narrower of `T` and `U` (`T` on a tie).
pub type LesserOf<T, U> =
    <<<T as Width>::Bytes as width::Compare<<U as Width>::Bytes>>::Lesser as width::Pick>::Of<T, U>;

/* ---------------------------------- Tests --------------------------------- */
