mod int_np;
mod integral;
pub mod literals;

pub use int_np::*;
pub use integral::Integral;
