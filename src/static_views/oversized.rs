use core::{fmt, str::Utf8Error};

/// The largest number of elements the `to_static_*` macros can materialize.
pub const OVERSIZED_SIZE: usize = 10 * 1024;

/// A scratch buffer for computing a sequence inside a `const fn`.
///
/// The length of a computed sequence is only known once it has been built, so
/// it is first built into an `OversizedArray` of generous capacity and then
/// copied into an array of exactly the right size with
/// [`to_right_sized_array`](Self::to_right_sized_array). The
/// [`to_static_array!`](crate::to_static_array), [`to_static_slice!`](crate::to_static_slice)
/// and [`to_static_str!`](crate::to_static_str) macros do both steps at
/// compile time.
///
/// All operations that can fail panic, which turns into a compilation error
/// when they are evaluated in a constant.
///
/// # Examples
///
/// ```
/// use stack_tools::OversizedArray;
///
/// const fn squares() -> OversizedArray<u32> {
///     let mut out = OversizedArray::new(0);
///     let mut i = 1;
///     while i <= 4 {
///         out.push(i * i);
///         i += 1;
///     }
///     out
/// }
///
/// const SQUARES: [u32; 4] = squares().to_right_sized_array::<4>();
/// assert_eq!(SQUARES, [1, 4, 9, 16]);
/// ```
#[derive(Clone, Copy)]
pub struct OversizedArray<T: Copy, const CAP: usize = OVERSIZED_SIZE> {
    data: [T; CAP],
    len: usize,
    fill: T,
}

impl<T: Copy, const CAP: usize> OversizedArray<T, CAP> {
    /// Creates an empty buffer whose unused slots hold `fill`.
    #[must_use]
    pub const fn new(fill: T) -> Self {
        OversizedArray {
            data: [fill; CAP],
            len: 0,
            fill,
        }
    }

    /// Creates a buffer holding a copy of `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is longer than `CAP`.
    #[must_use]
    pub const fn from_slice(values: &[T], fill: T) -> Self {
        let mut result = Self::new(fill);
        result.extend_from_slice(values);
        result
    }

    /// Returns the number of elements pushed so far.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::OversizedArray;
    ///
    /// const BUFFER: OversizedArray<u8, 8> = OversizedArray::from_slice(&[1, 2, 3], 0);
    /// const LEN: usize = BUFFER.len();
    /// assert_eq!(LEN, 3);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been pushed.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::OversizedArray;
    ///
    /// let mut buffer = OversizedArray::<char, 4>::new(' ');
    /// assert!(buffer.is_empty());
    /// buffer.push('a');
    /// assert!(!buffer.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `CAP`, the most elements the buffer can hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::{OversizedArray, OVERSIZED_SIZE};
    ///
    /// assert_eq!(OversizedArray::<u8, 16>::new(0).capacity(), 16);
    /// assert_eq!(OversizedArray::<u8>::new(0).capacity(), OVERSIZED_SIZE);
    /// ```
    #[must_use]
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Appends one element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full.
    pub const fn push(&mut self, value: T) {
        assert!(self.len < CAP, "OversizedArray: capacity exceeded");
        self.data[self.len] = value;
        self.len += 1;
    }

    /// Appends a copy of every element of `values`.
    ///
    /// # Panics
    ///
    /// Panics if the elements do not fit.
    pub const fn extend_from_slice(&mut self, values: &[T]) {
        assert!(
            values.len() <= CAP - self.len,
            "OversizedArray: capacity exceeded"
        );
        let mut i = 0;
        while i < values.len() {
            self.data[self.len] = values[i];
            self.len += 1;
            i += 1;
        }
    }

    /// The elements pushed so far.
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        self.data.split_at(self.len).0
    }

    /// Copies the contents into an array of exactly `N` elements.
    ///
    /// # Panics
    ///
    /// Panics if `N` is not the current length.
    #[must_use]
    pub const fn to_right_sized_array<const N: usize>(&self) -> [T; N] {
        assert!(
            self.len == N,
            "OversizedArray: target array length differs from the content length"
        );
        let mut result = [self.fill; N];
        let mut i = 0;
        while i < N {
            result[i] = self.data[i];
            i += 1;
        }
        result
    }
}

impl<const CAP: usize> OversizedArray<u8, CAP> {
    /// Creates a byte buffer holding the UTF-8 encoding of `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `CAP` bytes.
    #[must_use]
    pub const fn from_text(text: &str) -> Self {
        Self::from_slice(text.as_bytes(), 0)
    }

    /// Appends the UTF-8 encoding of `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text` does not fit.
    pub const fn push_str(&mut self, text: &str) {
        self.extend_from_slice(text.as_bytes());
    }

    /// Views the bytes pushed so far as a string.
    ///
    /// # Errors
    ///
    /// Returns the UTF-8 error if the bytes are not valid UTF-8.
    pub const fn as_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_slice())
    }
}

impl<T: Copy + fmt::Debug, const CAP: usize> fmt::Debug for OversizedArray<T, CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OversizedArray")
            .field("len", &self.len)
            .field("data", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn countdown(from: u8) -> OversizedArray<u8, 16> {
        let mut result = OversizedArray::new(0);
        let mut i = from;
        while i > 0 {
            result.push(i);
            i -= 1;
        }
        result
    }

    #[test]
    fn builds_in_const_context() {
        const BUILT: OversizedArray<u8, 16> = countdown(3);
        const EXACT: [u8; 3] = BUILT.to_right_sized_array::<3>();

        assert_eq!(BUILT.len(), 3);
        assert_eq!(BUILT.capacity(), 16);
        assert_eq!(EXACT, [3, 2, 1]);
    }

    #[test]
    fn default_capacity() {
        let buffer = OversizedArray::<u16>::new(0);
        assert_eq!(buffer.capacity(), OVERSIZED_SIZE);
        assert!(buffer.is_empty());
    }

    #[test]
    fn text_helpers() {
        let mut text = OversizedArray::<u8, 32>::from_text("static ");
        text.push_str("views");
        assert_eq!(text.as_str(), Ok("static views"));

        text.push(0xff);
        assert!(text.as_str().is_err());
    }

    #[test]
    fn empty_right_sized_array() {
        let empty = OversizedArray::<u64, 4>::new(9);
        assert_eq!(empty.to_right_sized_array::<0>(), []);
    }

    #[test]
    #[should_panic]
    fn push_past_capacity_panics() {
        let mut buffer = OversizedArray::<u8, 2>::from_slice(&[1, 2], 0);
        buffer.push(3);
    }

    #[test]
    #[should_panic]
    fn wrong_target_length_panics() {
        let buffer = OversizedArray::<u8, 4>::from_slice(&[1, 2], 0);
        let _ = buffer.to_right_sized_array::<3>();
    }

    #[test]
    fn debug_shows_content_only() {
        let buffer = OversizedArray::<u8, 8>::from_slice(&[1, 2], 0);
        assert_eq!(
            format!("{buffer:?}"),
            "OversizedArray { len: 2, data: [1, 2] }"
        );
    }
}
