mod error;
mod stack_vector_macros;
mod vector;

pub use error::*;
pub use vector::*;
