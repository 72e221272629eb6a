use thiserror::Error;

/// Errors returned by the fallible [`StackVector`](crate::StackVector) operations.
///
/// A failed operation never modifies the vector it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackVectorError {
    /// The operation needs more live elements than the static capacity allows.
    #[error("{operation} would exceed static capacity {capacity} (requested length {requested})")]
    CapacityExceeded {
        operation: &'static str,
        requested: usize,
        capacity: usize,
    },

    /// Checked access with an index that is not less than the current length.
    #[error("index {index} is past the end of a stack vector of length {len}")]
    OutOfRange { index: usize, len: usize },
}
