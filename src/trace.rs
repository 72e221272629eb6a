/// Records a rejected container operation.
///
/// Expands to a `tracing::debug!` event when the `tracing` feature is enabled
/// and to nothing otherwise.
macro_rules! rejected {
    ($($field:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($field)*);
    };
}

pub(crate) use rejected;
