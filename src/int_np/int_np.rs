use core::{
    fmt::{self, Display},
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
        DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
        SubAssign,
    },
};

use paste::paste;

use super::Integral;

/// An integer that never takes part in implicit promotion or conversion.
///
/// Binary operators only accept another `IntNp` of the same primitive type
/// and produce that same type, so there is never a question of what the
/// result type is. Arithmetic wraps around at the boundary of the type.
///
/// Operations whose right-hand side is not a value of the same kind (shifts
/// and compound assignment) accept any [`Integral`]: the left-hand side
/// always decides the result type.
///
/// A compound assignment with a right-hand side of another type computes the
/// exact result at full (`i128`) width and then keeps the low bits of `T`. No
/// operand is first converted to the other operand's type, so a signed value
/// divided by an unsigned one divides the signed value: `-7` divided by `2u64`
/// gives `-3`. Converting both operands to a common unsigned type first
/// would turn `-7` into a huge value and give `-4` after truncation.
///
/// ```
/// use stack_tools::IntNp16;
///
/// let mut x = IntNp16::new(-7);
/// x /= 2u64;
/// assert_eq!(x.get(), -3);
///
/// let mut y = IntNp16::new(-7);
/// y %= 4u32;
/// assert_eq!(y.get(), -3);
/// ```
///
/// # Examples
///
/// ```
/// use stack_tools::{IntNp, UintNp8};
///
/// let a = UintNp8::new(200);
/// let b = UintNp8::new(100);
/// assert_eq!((a + b).get(), 44);
///
/// let mut c = a;
/// c += 1000u32;
/// assert_eq!(c.get(), 176);
/// ```
///
/// Mixing types does not compile:
///
/// ```compile_fail
/// use stack_tools::UintNp8;
///
/// let sum = UintNp8::new(1) + 1u16;
/// ```
///
/// ```compile_fail
/// use stack_tools::UintNp8;
///
/// let x: UintNp8 = 5u16.into();
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct IntNp<T: Integral>(T);

macro_rules! define_aliases {
    ($($bits:literal),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("Non-promoting `u", $bits, "`.")]
                pub type [<UintNp $bits>] = IntNp<[<u $bits>]>;

                #[doc = concat!("Non-promoting `i", $bits, "`.")]
                pub type [<IntNp $bits>] = IntNp<[<i $bits>]>;

                impl From<IntNp<[<u $bits>]>> for [<u $bits>] {
                    #[inline(always)]
                    fn from(value: IntNp<[<u $bits>]>) -> Self {
                        value.get()
                    }
                }

                impl From<IntNp<[<i $bits>]>> for [<i $bits>] {
                    #[inline(always)]
                    fn from(value: IntNp<[<i $bits>]>) -> Self {
                        value.get()
                    }
                }
            )*
        }
    };
}

define_aliases!(8, 16, 32, 64);

impl From<IntNp<usize>> for usize {
    #[inline(always)]
    fn from(value: IntNp<usize>) -> Self {
        value.get()
    }
}

impl From<IntNp<isize>> for isize {
    #[inline(always)]
    fn from(value: IntNp<isize>) -> Self {
        value.get()
    }
}

impl<T: Integral> IntNp<T> {
    /// Wraps a value of exactly the primitive type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::IntNp16;
    ///
    /// const LIMIT: IntNp16 = IntNp16::new(-300);
    /// assert_eq!(LIMIT.get(), -300);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Converts any primitive integer, keeping the low bits like an `as` cast.
    ///
    /// This is the only way to build an `IntNp` from a different type.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::{IntNp8, UintNp8};
    ///
    /// assert_eq!(UintNp8::from_integral(300u32).get(), 44);
    /// assert_eq!(IntNp8::from_integral(-1i64).get(), -1);
    /// assert_eq!(UintNp8::from_integral(-1i64).get(), 255);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_integral<U: Integral>(value: U) -> Self {
        Self(T::truncate_from_i128(value.to_i128()))
    }

    #[inline(always)]
    #[must_use]
    pub const fn get(self) -> T {
        self.0
    }

    /// Adds one in place, wrapping, and returns the updated value.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.0 = self.0.wrapping_add(T::ONE);
        self
    }

    /// Subtracts one in place, wrapping, and returns the updated value.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.0 = self.0.wrapping_sub(T::ONE);
        self
    }

    /// Adds one in place and returns the value from before the update.
    ///
    /// Use [`increment`](Self::increment) when the previous value is not
    /// needed.
    #[inline]
    #[must_use = "use `increment` if the previous value is not needed"]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// Subtracts one in place and returns the value from before the update.
    #[inline]
    #[must_use = "use `decrement` if the previous value is not needed"]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }

    /// Combines with a right-hand side of any primitive type at full width
    /// and truncates the result back to `T`.
    #[inline]
    fn combine_wide<R: Integral>(self, rhs: R, op: fn(i128, i128) -> i128) -> Self {
        Self(T::truncate_from_i128(op(self.0.to_i128(), rhs.to_i128())))
    }
}

impl<T: Integral> From<T> for IntNp<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Integral> Display for IntNp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Integral> Not for IntNp<T> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

/// Same-type arithmetic, plus compound assignment from either the same type or
/// any primitive integer.
macro_rules! arithmetic_op {
    ($($trait:ident $method:ident $wrapping:ident;)*) => {
        paste! {
            $(
                impl<T: Integral> $trait for IntNp<T> {
                    type Output = Self;

                    #[inline]
                    fn $method(self, rhs: Self) -> Self {
                        Self(self.0.$wrapping(rhs.0))
                    }
                }

                impl<T: Integral> [<$trait Assign>] for IntNp<T> {
                    #[inline]
                    fn [<$method _assign>](&mut self, rhs: Self) {
                        self.0 = self.0.$wrapping(rhs.0);
                    }
                }

                impl<T: Integral, R: Integral> [<$trait Assign>]<R> for IntNp<T> {
                    #[inline]
                    fn [<$method _assign>](&mut self, rhs: R) {
                        *self = self.combine_wide(rhs, i128::$wrapping);
                    }
                }
            )*
        }
    };
}

arithmetic_op! {
    Add add wrapping_add;
    Sub sub wrapping_sub;
    Mul mul wrapping_mul;
    Div div wrapping_div;
    Rem rem wrapping_rem;
}

/// Bitwise operators only ever combine two values of the same type.
macro_rules! bitwise_op {
    ($($trait:ident $method:ident $op:tt;)*) => {
        paste! {
            $(
                impl<T: Integral> $trait for IntNp<T> {
                    type Output = Self;

                    #[inline]
                    fn $method(self, rhs: Self) -> Self {
                        Self(self.0 $op rhs.0)
                    }
                }

                impl<T: Integral> [<$trait Assign>] for IntNp<T> {
                    #[inline]
                    fn [<$method _assign>](&mut self, rhs: Self) {
                        self.0 = self.0 $op rhs.0;
                    }
                }
            )*
        }
    };
}

bitwise_op! {
    BitAnd bitand &;
    BitOr bitor |;
    BitXor bitxor ^;
}

/// Reduces a shift amount of any type modulo the bit width of `T`.
#[inline]
fn shift_amount<T: Integral, R: Integral>(amount: R) -> u32 {
    // rem_euclid keeps negative amounts in range; the result is below BITS.
    amount.to_i128().rem_euclid(i128::from(T::BITS)) as u32
}

/// Shifts operate on the left-hand side; the amount may be of any type.
macro_rules! shift_op {
    ($($trait:ident $method:ident $wrapping:ident;)*) => {
        paste! {
            $(
                impl<T: Integral, R: Integral> $trait<R> for IntNp<T> {
                    type Output = Self;

                    #[inline]
                    fn $method(self, rhs: R) -> Self {
                        Self(self.0.$wrapping(shift_amount::<T, R>(rhs)))
                    }
                }

                impl<T: Integral> $trait for IntNp<T> {
                    type Output = Self;

                    #[inline]
                    fn $method(self, rhs: Self) -> Self {
                        Self(self.0.$wrapping(shift_amount::<T, T>(rhs.0)))
                    }
                }

                impl<T: Integral, R: Integral> [<$trait Assign>]<R> for IntNp<T> {
                    #[inline]
                    fn [<$method _assign>](&mut self, rhs: R) {
                        *self = $trait::$method(*self, rhs);
                    }
                }

                impl<T: Integral> [<$trait Assign>] for IntNp<T> {
                    #[inline]
                    fn [<$method _assign>](&mut self, rhs: Self) {
                        *self = $trait::$method(*self, rhs);
                    }
                }
            )*
        }
    };
}

shift_op! {
    Shl shl wrapping_shl;
    Shr shr wrapping_shr;
}
