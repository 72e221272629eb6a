//! `const` constructors standing in for typed literals.
//!
//! Each function truncates its argument to the target width, so they can be
//! used to spell a constant of a given non-promoting type:
//!
//! ```
//! use stack_tools::literals::*;
//!
//! const MASK: stack_tools::UintNp16 = npu16(0x0ff0);
//! assert_eq!((MASK >> 4u8).get(), 0x00ff);
//! assert_eq!(np8(0xff).get(), -1);
//! ```

use paste::paste;

use super::IntNp;

macro_rules! define_literals {
    ($($bits:literal),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("Builds a [`UintNp", $bits, "`](crate::UintNp", $bits, "), keeping the low ", $bits, " bits.")]
                #[inline(always)]
                #[must_use]
                pub const fn [<npu $bits>](value: u64) -> IntNp<[<u $bits>]> {
                    IntNp::new(value as [<u $bits>])
                }

                #[doc = concat!("Builds an [`IntNp", $bits, "`](crate::IntNp", $bits, "), keeping the low ", $bits, " bits.")]
                #[inline(always)]
                #[must_use]
                pub const fn [<np $bits>](value: u64) -> IntNp<[<i $bits>]> {
                    IntNp::new(value as [<i $bits>])
                }
            )*
        }
    };
}

define_literals!(8, 16, 32, 64);
