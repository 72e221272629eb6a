//! Allocation-free building blocks for systems code.
//!
//! - [`StackVector`]: a fixed-capacity vector whose storage lives inline.
//! - [`IntNp`]: an integer wrapper that never promotes or implicitly converts.
//! - [`OversizedArray`] and the `to_static_*` macros: materialize a value
//!   computed by a `const fn` into a right-sized `'static` array or string.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "stack_vector")]
mod trace;

#[cfg(feature = "stack_vector")]
mod stack_vector;

#[cfg(feature = "stack_vector")]
pub use stack_vector::*;

#[cfg(feature = "int_np")]
mod int_np;

#[cfg(feature = "int_np")]
pub use int_np::*;

#[cfg(feature = "static_views")]
mod static_views;

#[cfg(feature = "static_views")]
pub use static_views::*;
