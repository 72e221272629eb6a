//! The primitive integer types [`IntNp`](crate::IntNp) can wrap.

use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{BitAnd, BitOr, BitXor, Not},
};

use paste::paste;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer type: `u8` through `u64`, `i8` through `i64`, `usize`
/// and `isize`.
///
/// This trait is sealed. Every value of every implementing type fits in an
/// `i128`, which is what mixed-type compound assignment computes in.
pub trait Integral:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// The size of this type in bits.
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Panics if `rhs` is zero.
    fn wrapping_div(self, rhs: Self) -> Self;
    /// Panics if `rhs` is zero.
    fn wrapping_rem(self, rhs: Self) -> Self;
    fn wrapping_shl(self, amount: u32) -> Self;
    fn wrapping_shr(self, amount: u32) -> Self;

    /// Widens the value without loss.
    fn to_i128(self) -> i128;

    /// Keeps the low [`BITS`](Self::BITS) bits of `value`, like an `as` cast.
    fn truncate_from_i128(value: i128) -> Self;
}

macro_rules! impl_integral {
    ($($ty:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Integral for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                impl_integral!(@forward $ty: add sub mul div rem);

                #[inline(always)]
                fn wrapping_shl(self, amount: u32) -> Self {
                    <$ty>::wrapping_shl(self, amount)
                }

                #[inline(always)]
                fn wrapping_shr(self, amount: u32) -> Self {
                    <$ty>::wrapping_shr(self, amount)
                }

                #[inline(always)]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline(always)]
                fn truncate_from_i128(value: i128) -> Self {
                    value as $ty
                }
            }
        )*
    };
    (@forward $ty:ident: $($op:ident)*) => {
        paste! {
            $(
                #[inline(always)]
                fn [<wrapping_ $op>](self, rhs: Self) -> Self {
                    <$ty>::[<wrapping_ $op>](self, rhs)
                }
            )*
        }
    };
}

impl_integral!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
