/// Evaluates a `const` producer of an [`OversizedArray`](crate::OversizedArray)
/// and yields a `&'static [T; LEN]` holding exactly its content.
///
/// The producer runs once, at compile time, and the resulting array lives in a
/// `static`, so every evaluation of the macro expression returns the same
/// address. The producer must be a constant expression of type
/// `OversizedArray<T>` using the default capacity.
///
/// # Examples
///
/// ```
/// use stack_tools::{to_static_array, OversizedArray};
///
/// const fn powers_of_two() -> OversizedArray<u16> {
///     let mut out = OversizedArray::new(0);
///     let mut value = 1u16;
///     while value <= 64 {
///         out.push(value);
///         value *= 2;
///     }
///     out
/// }
///
/// let powers: &'static [u16; 7] = to_static_array!(u16, powers_of_two());
/// assert_eq!(powers, &[1, 2, 4, 8, 16, 32, 64]);
/// ```
///
/// A producer that overflows the scratch buffer fails to compile:
///
/// ```compile_fail
/// use stack_tools::{to_static_array, OversizedArray, OVERSIZED_SIZE};
///
/// const fn too_many() -> OversizedArray<u8> {
///     let mut out = OversizedArray::new(0);
///     let mut i = 0;
///     while i <= OVERSIZED_SIZE {
///         out.push(0);
///         i += 1;
///     }
///     out
/// }
///
/// let _ = to_static_array!(u8, too_many());
/// ```
#[macro_export]
macro_rules! to_static_array {
    ($ty:ty, $producer:expr $(,)?) => {{
        const OVERSIZED: $crate::OversizedArray<$ty> = $producer;
        const LEN: usize = OVERSIZED.len();
        static DATA: [$ty; LEN] = OVERSIZED.to_right_sized_array::<LEN>();
        &DATA
    }};
}

/// Like [`to_static_array!`](crate::to_static_array), but yields a
/// `&'static [T]`.
///
/// # Examples
///
/// ```
/// use stack_tools::{to_static_slice, OversizedArray};
///
/// const fn evens() -> OversizedArray<u32> {
///     let mut out = OversizedArray::new(0);
///     let mut i = 0;
///     while i < 10 {
///         if i % 2 == 0 {
///             out.push(i);
///         }
///         i += 1;
///     }
///     out
/// }
///
/// let evens: &'static [u32] = to_static_slice!(u32, evens());
/// assert_eq!(evens, [0, 2, 4, 6, 8]);
/// ```
#[macro_export]
macro_rules! to_static_slice {
    ($ty:ty, $producer:expr $(,)?) => {{
        let array: &'static [$ty] = $crate::to_static_array!($ty, $producer);
        array
    }};
}

/// Evaluates a `const` producer of an `OversizedArray<u8>` holding UTF-8 text
/// and yields a `&'static str` of exactly that text.
///
/// Invalid UTF-8 is rejected at compile time.
///
/// # Examples
///
/// ```
/// use stack_tools::{to_static_str, OversizedArray};
///
/// const fn greeting(name: &str) -> OversizedArray<u8> {
///     let mut out = OversizedArray::from_text("Hello, ");
///     out.push_str(name);
///     out.push(b'!');
///     out
/// }
///
/// let text: &'static str = to_static_str!(greeting("World"));
/// assert_eq!(text, "Hello, World!");
/// ```
///
/// ```compile_fail
/// use stack_tools::{to_static_str, OversizedArray};
///
/// let _ = to_static_str!(OversizedArray::from_slice(&[0xff, 0xfe], 0));
/// ```
#[macro_export]
macro_rules! to_static_str {
    ($producer:expr $(,)?) => {{
        const OVERSIZED: $crate::OversizedArray<u8> = $producer;
        const LEN: usize = OVERSIZED.len();
        const BYTES: [u8; LEN] = OVERSIZED.to_right_sized_array::<LEN>();
        const SLICE: &[u8] = &BYTES;
        const VIEW: &str = match ::core::str::from_utf8(SLICE) {
            Ok(view) => view,
            Err(_) => panic!("to_static_str!: producer yielded invalid UTF-8"),
        };
        VIEW
    }};
}
