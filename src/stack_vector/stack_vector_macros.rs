/// Internal helper macro used by `stack_vec!` to count the number of
/// comma-separated expressions at compile time.
///
/// This macro expands to a `usize` constant expression and never evaluates
/// the expressions it is given.
///
/// ```
/// use stack_tools::*;
/// const N: usize = __count!(1, 2, 3, 4);
/// assert_eq!(N, 4);
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => { 0usize };
    ($head:expr $(, $tail:expr)*) => {
        1usize + $crate::__count!($($tail),*)
    };
}

/// Creates a `StackVector`, checking the capacity at compile time.
///
/// ## Forms
///
/// ### Empty vector
/// ```
/// use stack_tools::*;
/// let v: StackVector<u32, 3> = stack_vec![];
/// assert!(v.is_empty());
/// ```
///
/// ### Empty vector with explicit capacity
/// ```
/// use stack_tools::*;
/// let mut v = stack_vec![8;];
/// v.push(42).unwrap();
/// assert_eq!(v.capacity(), 8);
/// ```
///
/// ### Vector from elements (capacity is the element count)
/// ```
/// use stack_tools::*;
/// let v = stack_vec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
/// assert!(v.is_full());
/// ```
///
/// ### Vector from elements with explicit capacity
/// ```
/// use stack_tools::*;
/// let v = stack_vec![8; 1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 8);
/// ```
///
/// The last form fails to compile when the capacity is smaller than the
/// number of elements:
///
/// ```compile_fail
/// use stack_tools::*;
/// let v = stack_vec![2; 1, 2, 3];
/// ```
///
/// The element type must implement `Default`, since the slots past the
/// elements are default-constructed.
#[macro_export]
macro_rules! stack_vec {
    () => {
        $crate::StackVector::new()
    };

    ($cap:expr;) => {
        $crate::StackVector::<_, $cap>::new()
    };

    ($($elem:expr),+ $(,)?) => {
        $crate::StackVector::<_, { $crate::__count!($($elem),+) }>::from_array([$($elem),+])
    };

    ($cap:expr; $($elem:expr),+ $(,)?) => {{
        const _: () = assert!(
            $cap >= $crate::__count!($($elem),+),
            concat!(
                "stack_vec!: capacity ",
                stringify!($cap),
                " is smaller than the number of elements"
            )
        );

        $crate::StackVector::<_, $cap>::from_array([$($elem),+])
    }};
}
