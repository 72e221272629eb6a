use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    iter::{FusedIterator, Take},
    ops::{Deref, DerefMut, Index, IndexMut},
    slice::{self, SliceIndex},
};

use super::StackVectorError;
use crate::trace::rejected;

/// A fixed-capacity vector whose storage is embedded inline.
///
/// `StackVector<T, N>` holds up to `N` elements and never allocates. All `N`
/// slots are default-constructed when the vector is created and live exactly
/// as long as the vector itself:
///
/// - removing elements (`pop_back`, `clear`, shrinking `resize`) only moves the
///   logical end, the removed values stay in their slots until overwritten;
/// - no method ever relocates the storage, so a slot keeps its address for the
///   lifetime of the vector.
///
/// Slots past [`len`](Self::len) are *stale*: initialized, but not part of the
/// vector's contents. Iteration, equality, hashing and formatting only look at
/// the live prefix.
///
/// # Examples
///
/// ```
/// use stack_tools::StackVector;
///
/// let mut v: StackVector<i32, 4> = StackVector::new();
/// v.push(1).unwrap();
/// v.push(2).unwrap();
/// assert_eq!(v, [1, 2]);
/// assert_eq!(v.capacity(), 4);
/// ```
#[derive(Clone, Copy)]
pub struct StackVector<T, const N: usize> {
    data: [T; N],
    size: usize,
}

struct FitsCapacity<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> FitsCapacity<M, N> {
    const CHECK: () = assert!(
        M <= N,
        "StackVector: array is longer than the static capacity"
    );
}

impl<T, const N: usize> StackVector<T, N> {
    /// The static capacity, equal to `N`.
    pub const CAPACITY: usize = N;

    /// Returns the number of live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v: StackVector<i32, 4> = StackVector::new();
    /// assert_eq!(v.len(), 0);
    /// v.push(1).unwrap();
    /// assert_eq!(v.len(), 1);
    /// ```
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns the static capacity. It never depends on the vector's state.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Same as [`capacity`](Self::capacity).
    #[must_use]
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns how many more elements fit before the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let v = StackVector::<u8, 5>::from_array([1, 2]);
    /// assert_eq!(v.remaining_capacity(), 3);
    /// ```
    #[must_use]
    #[inline]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.size
    }

    /// Returns `true` if there are no live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v = StackVector::<u8, 2>::from_array([9]);
    /// assert!(!v.is_empty());
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the length has reached the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v = StackVector::<u8, 2>::from_array([1]);
    /// assert!(!v.is_full());
    /// v.push(2).unwrap();
    /// assert!(v.is_full());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.size == N
    }

    /// Extracts a slice of the live elements.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.size]
    }

    /// Extracts a mutable slice of the live elements.
    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.size]
    }

    /// Returns the stale slots past the logical end.
    ///
    /// Their content is whatever was left there by earlier operations (or the
    /// default value). It can be overwritten freely but is not part of the
    /// vector until a push or resize makes the slot live again, and resizing
    /// over it resets it to the default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v: StackVector<i32, 3> = StackVector::new();
    /// v.push(1).unwrap();
    /// assert_eq!(v.spare_capacity_mut(), &[0, 0]);
    /// ```
    #[must_use]
    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [T] {
        &mut self.data[self.size..]
    }

    /// Returns the first live element.
    ///
    /// The vector must not be empty. This is checked in debug builds only; in
    /// release builds an empty vector hands out its first stale slot (or
    /// panics if `N == 0`).
    #[must_use]
    #[inline]
    pub fn front(&self) -> &T {
        debug_assert!(!self.is_empty(), "front called on an empty StackVector");
        &self.data[0]
    }

    /// Mutable counterpart of [`front`](Self::front), with the same
    /// precondition.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v = StackVector::<i32, 3>::from_array([1, 2]);
    /// *v.front_mut() = 10;
    /// assert_eq!(v, [10, 2]);
    /// ```
    #[must_use]
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "front_mut called on an empty StackVector");
        &mut self.data[0]
    }

    /// Returns the last live element.
    ///
    /// The vector must not be empty. This is checked in debug builds only; in
    /// release builds calling it on an empty vector panics.
    #[must_use]
    #[inline]
    pub fn back(&self) -> &T {
        debug_assert!(!self.is_empty(), "back called on an empty StackVector");
        &self.data[self.size.wrapping_sub(1)]
    }

    /// Mutable counterpart of [`back`](Self::back), with the same
    /// precondition.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v = StackVector::<i32, 3>::from_array([1, 2]);
    /// *v.back_mut() += 5;
    /// assert_eq!(v, [1, 7]);
    /// ```
    #[must_use]
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "back_mut called on an empty StackVector");
        &mut self.data[self.size.wrapping_sub(1)]
    }

    /// Returns a reference to the element at `index`, checking it against the
    /// current length.
    ///
    /// # Errors
    ///
    /// Returns [`StackVectorError::OutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::{StackVector, StackVectorError};
    ///
    /// let mut v: StackVector<i32, 4> = StackVector::new();
    /// v.push(7).unwrap();
    /// assert_eq!(v.at(0), Ok(&7));
    /// assert_eq!(v.at(1), Err(StackVectorError::OutOfRange { index: 1, len: 1 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, StackVectorError> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Mutable counterpart of [`at`](Self::at).
    ///
    /// # Errors
    ///
    /// Returns [`StackVectorError::OutOfRange`] if `index >= len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, StackVectorError> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Appends an element to the back of the vector and returns a mutable
    /// reference to the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`StackVectorError::CapacityExceeded`] if the vector is full,
    /// leaving it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v: StackVector<i32, 1> = StackVector::new();
    /// *v.push(10).unwrap() += 1;
    /// assert!(v.push(20).is_err());
    /// assert_eq!(v, [11]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> Result<&mut T, StackVectorError> {
        Self::check_capacity("push", self.size + 1)?;
        Ok(self.push_unchecked(value))
    }

    /// Appends the value produced by `make`.
    ///
    /// The capacity is checked before `make` is called, so a full vector never
    /// runs it.
    ///
    /// # Errors
    ///
    /// Returns [`StackVectorError::CapacityExceeded`] if the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v: StackVector<String, 2> = StackVector::new();
    /// v.emplace_with(|| "a".repeat(3)).unwrap();
    /// assert_eq!(v[0], "aaa");
    /// ```
    #[inline]
    pub fn emplace_with<F>(&mut self, make: F) -> Result<&mut T, StackVectorError>
    where
        F: FnOnce() -> T,
    {
        Self::check_capacity("emplace", self.size + 1)?;
        Ok(self.push_unchecked(make()))
    }

    /// Clones and appends all elements of `other`.
    ///
    /// Returns the newly added elements on success.
    ///
    /// # Errors
    ///
    /// Returns [`StackVectorError::CapacityExceeded`] if `other` does not fit
    /// in the remaining capacity. Nothing is appended in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v: StackVector<i32, 3> = StackVector::new();
    /// assert_eq!(v.try_extend_from_slice(&[1, 2]).unwrap(), &[1, 2]);
    /// assert!(v.try_extend_from_slice(&[3, 4]).is_err());
    /// assert_eq!(v, [1, 2]);
    /// ```
    pub fn try_extend_from_slice(&mut self, other: &[T]) -> Result<&mut [T], StackVectorError>
    where
        T: Clone,
    {
        let old_len = self.size;
        Self::check_capacity("extend", old_len.saturating_add(other.len()))?;

        for (slot, value) in self.data[old_len..].iter_mut().zip(other) {
            slot.clone_from(value);
        }
        self.size = old_len + other.len();

        Ok(&mut self.data[old_len..self.size])
    }

    /// Removes the last element by moving the logical end back by one.
    ///
    /// The removed value stays in its slot until it is overwritten. The vector
    /// must not be empty; this is checked in debug builds, and release builds
    /// leave an empty vector untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v: StackVector<i32, 3> = StackVector::from_array([10, 20]);
    /// v.pop_back();
    /// assert_eq!(v, [10]);
    /// assert_eq!(v.spare_capacity_mut(), &[20, 0]);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) {
        debug_assert!(!self.is_empty(), "pop_back called on an empty StackVector");
        self.size = self.size.saturating_sub(1);
    }

    /// Removes the last element and returns a copy of it, or `None` if the
    /// vector is empty.
    ///
    /// The original value stays in the now stale slot.
    #[inline]
    pub fn pop(&mut self) -> Option<T>
    where
        T: Clone,
    {
        let last = self.as_slice().last().cloned()?;
        self.size -= 1;
        Some(last)
    }

    /// Sets the length to zero without touching any slot.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Shortens the vector to `new_len` live elements.
    ///
    /// Has no effect if `new_len >= len()`. Slot contents are not modified.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.size {
            self.size = new_len;
        }
    }

    /// Checks that a total length of `new_capacity` elements fits in the
    /// vector.
    ///
    /// The storage always exists in full, so there is nothing to reserve.
    ///
    /// # Errors
    ///
    /// Returns [`StackVectorError::CapacityExceeded`] if `new_capacity > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let v = StackVector::<u8, 4>::from_array([1, 2, 3]);
    /// assert!(v.reserve(4).is_ok());
    /// assert!(v.reserve(5).is_err());
    /// ```
    #[inline]
    pub fn reserve(&self, new_capacity: usize) -> Result<(), StackVectorError> {
        Self::check_capacity("reserve", new_capacity)
    }

    /// Does nothing: there is no storage to release.
    #[inline]
    pub fn shrink_to_fit(&mut self) {}

    fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(!self.is_full());
        let slot = &mut self.data[self.size];
        *slot = value;
        self.size += 1;
        slot
    }

    fn check_capacity(operation: &'static str, requested: usize) -> Result<(), StackVectorError> {
        if requested > N {
            rejected!(operation, requested, capacity = N, "capacity exceeded");
            return Err(StackVectorError::CapacityExceeded {
                operation,
                requested,
                capacity: N,
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), StackVectorError> {
        if index >= self.size {
            rejected!(index, len = self.size, "checked access out of range");
            return Err(StackVectorError::OutOfRange {
                index,
                len: self.size,
            });
        }
        Ok(())
    }
}

impl<T: Default, const N: usize> StackVector<T, N> {
    /// Creates an empty vector, default-constructing all `N` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let v: StackVector<i32, 4> = StackVector::new();
    /// assert_eq!(v.len(), 0);
    /// assert_eq!(v.capacity(), 4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        StackVector {
            data: core::array::from_fn(|_| T::default()),
            size: 0,
        }
    }

    /// Creates a vector holding the elements of `values`, in order.
    ///
    /// Fails to compile if `M > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let v = StackVector::<u8, 4>::from_array([1, 2]);
    /// assert_eq!(v, [1, 2]);
    /// ```
    ///
    /// ```compile_fail
    /// use stack_tools::StackVector;
    ///
    /// let v = StackVector::<u8, 1>::from_array([1, 2]);
    /// ```
    #[must_use]
    pub fn from_array<const M: usize>(values: [T; M]) -> Self {
        let () = FitsCapacity::<M, N>::CHECK;

        let mut result = Self::new();
        for value in values {
            result.push_unchecked(value);
        }
        result
    }

    /// Creates a vector by appending every item of `iter`, converted to `T`.
    ///
    /// This covers iterator ranges as well as dynamically sized sources such
    /// as slices and `Vec`s.
    ///
    /// # Errors
    ///
    /// Returns [`StackVectorError::CapacityExceeded`] if `iter` yields more
    /// than `N` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let v = StackVector::<u64, 4>::try_from_iter([1u32, 2, 3]).unwrap();
    /// assert_eq!(v, [1, 2, 3]);
    /// assert!(StackVector::<u64, 2>::try_from_iter(0u32..3).is_err());
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, StackVectorError>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let mut result = Self::new();
        for value in iter {
            result.push(value.into())?;
        }
        Ok(result)
    }

    /// Creates a vector from another stack vector of any capacity and any
    /// element type convertible to `T`.
    ///
    /// Only the source's live length matters, not its capacity.
    ///
    /// # Errors
    ///
    /// Returns [`StackVectorError::CapacityExceeded`] if `other.len() > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let small = StackVector::<u8, 16>::from_array([1, 2, 3]);
    /// let wide = StackVector::<u32, 3>::try_convert(&small).unwrap();
    /// assert_eq!(wide, [1, 2, 3]);
    /// assert!(StackVector::<u32, 2>::try_convert(&small).is_err());
    /// ```
    pub fn try_convert<U, const M: usize>(other: &StackVector<U, M>) -> Result<Self, StackVectorError>
    where
        U: Clone + Into<T>,
    {
        Self::try_from_iter(other.iter().cloned())
    }

    /// Resizes the vector to `new_len` live elements.
    ///
    /// Shrinking only moves the logical end. Growing overwrites every newly
    /// exposed slot with `T::default()`, discarding whatever stale value it
    /// held.
    ///
    /// # Errors
    ///
    /// Returns [`StackVectorError::CapacityExceeded`] if `new_len > N`,
    /// leaving the vector unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v: StackVector<i32, 4> = StackVector::from_array([1, 2, 3]);
    /// v.resize(1).unwrap();
    /// v.resize(3).unwrap();
    /// assert_eq!(v, [1, 0, 0]);
    /// assert!(v.resize(5).is_err());
    /// ```
    pub fn resize(&mut self, new_len: usize) -> Result<(), StackVectorError> {
        if new_len <= self.size {
            self.size = new_len;
            return Ok(());
        }

        Self::check_capacity("resize", new_len)?;
        for slot in &mut self.data[self.size..new_len] {
            *slot = T::default();
        }
        self.size = new_len;
        Ok(())
    }
}

impl<T: Default, const N: usize> Default for StackVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Deref for StackVector<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for StackVector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, I, const N: usize> Index<I> for StackVector<T, N>
where
    I: SliceIndex<[T]>,
{
    type Output = <I as SliceIndex<[T]>>::Output;

    /// Indexes into the live elements, by position or by range.
    ///
    /// Panics when the index reaches past [`len`](StackVector::len); use
    /// [`StackVector::at`] for a checked lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let v = StackVector::<i32, 4>::from_array([1, 2, 3]);
    /// assert_eq!(v[1], 2);
    /// assert_eq!(&v[1..], &[2, 3]);
    /// ```
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I, const N: usize> IndexMut<I> for StackVector<T, N>
where
    I: SliceIndex<[T]>,
{
    /// Mutably indexes into the live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v = StackVector::<i32, 4>::from_array([1, 2, 3]);
    /// v[..2].fill(0);
    /// assert_eq!(v, [0, 0, 3]);
    /// ```
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, const N: usize> IntoIterator for StackVector<T, N> {
    type Item = T;

    type IntoIter = IntoIter<T, N>;

    /// Consumes the vector, yielding the live elements in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let mut v: StackVector<i32, 4> = StackVector::from_array([1, 2, 3]);
    /// v.pop_back();
    /// assert!(v.into_iter().eq([1, 2]));
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.data.into_iter().take(self.size),
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StackVector<T, N> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StackVector<T, N> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<StackVector<U, M>> for StackVector<T, N>
where
    T: PartialEq<U>,
{
    /// Two vectors are equal when their live elements are, whatever their
    /// capacities.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let a = StackVector::<i32, 5>::from_array([1, 2, 3]);
    /// let b = StackVector::<i32, 8>::from_array([1, 2, 3]);
    /// assert!(a == b);
    /// ```
    fn eq(&self, other: &StackVector<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for StackVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<&[U; M]> for StackVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for StackVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for StackVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: Eq, const N: usize> Eq for StackVector<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for StackVector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, const N: usize> Ord for StackVector<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, const N: usize> Hash for StackVector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug, const N: usize> Debug for StackVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_slice(), f)
    }
}

impl<T, const N: usize> AsRef<[T]> for StackVector<T, N> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> AsMut<[T]> for StackVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Borrow<[T]> for StackVector<T, N> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> BorrowMut<[T]> for StackVector<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Default, const N: usize, const M: usize> From<[T; M]> for StackVector<T, N> {
    /// See [`StackVector::from_array`]; fails to compile if `M > N`.
    fn from(values: [T; M]) -> Self {
        Self::from_array(values)
    }
}

impl<T, U, const N: usize> TryFrom<&[U]> for StackVector<T, N>
where
    T: Default,
    U: Clone + Into<T>,
{
    type Error = StackVectorError;

    /// # Examples
    ///
    /// ```
    /// use stack_tools::StackVector;
    ///
    /// let source = vec![1u8, 2, 3];
    /// let v = StackVector::<u16, 3>::try_from(source.as_slice()).unwrap();
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    fn try_from(slice: &[U]) -> Result<Self, Self::Error> {
        Self::try_from_iter(slice.iter().cloned())
    }
}

impl<T, U, const N: usize, const M: usize> TryFrom<&StackVector<U, M>> for StackVector<T, N>
where
    T: Default,
    U: Clone + Into<T>,
{
    type Error = StackVectorError;

    fn try_from(other: &StackVector<U, M>) -> Result<Self, Self::Error> {
        Self::try_convert(other)
    }
}

/// An iterator that moves the live elements out of a [`StackVector`].
///
/// Created by [`StackVector::into_iter`]. The stale slots are dropped along
/// with the iterator.
#[derive(Clone, Debug)]
pub struct IntoIter<T, const N: usize> {
    inner: Take<core::array::IntoIter<T, N>>,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

#[cfg(test)]
mod tests {
    use crate::stack_vec;
    use core::cell::Cell;
    use std::borrow::{Borrow, BorrowMut};
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    #[test]
    fn macro_forms() {
        let words = stack_vec!["ab".to_owned(), "cd".to_owned(), "ef".to_owned()];
        assert_eq!(words.capacity(), 3);
        assert!(words.is_full());
        assert_eq!(words, ["ab", "cd", "ef"]);

        let mut roomy = stack_vec![6; 'x', 'y'];
        assert_eq!(roomy.len(), 2);
        assert_eq!(roomy.remaining_capacity(), 4);
        assert_eq!(roomy.spare_capacity_mut(), &['\0'; 4]);

        let mut sized = stack_vec![2;];
        sized.push(1.5f32).unwrap();
        assert_eq!(sized.capacity(), 2);
        assert_eq!(sized.back(), &1.5);

        let empty: StackVector<u16, 0> = stack_vec![];
        assert!(empty.is_empty() && empty.is_full());
    }

    #[test]
    fn push_until_full_then_pop_and_push_again() {
        let mut v = StackVector::<i32, 3>::new();
        v.push(10).unwrap();
        v.push(20).unwrap();
        v.push(30).unwrap();
        assert_eq!(v.len(), 3);

        assert_eq!(
            v.push(40),
            Err(StackVectorError::CapacityExceeded {
                operation: "push",
                requested: 4,
                capacity: 3,
            })
        );
        assert_eq!(v.len(), 3);
        assert_eq!(v, [10, 20, 30]);

        v.pop_back();
        assert_eq!(v.len(), 2);
        assert!(v.iter().eq(&[10, 20]));

        v.push(99).unwrap();
        assert_eq!(v, [10, 20, 99]);
    }

    #[test]
    fn resize_overwrites_exposed_slots_with_defaults() {
        let mut v = StackVector::<i32, 4>::new();
        v.resize(2).unwrap();
        assert_eq!(v, [0, 0]);

        v.push(5).unwrap();
        assert_eq!(v, [0, 0, 5]);

        v.resize(1).unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(*v.front(), 0);

        v.resize(3).unwrap();
        assert_eq!(v, [0, 0, 0]);
    }

    #[test]
    fn resize_above_capacity_fails_without_change() {
        let mut v = StackVector::<i32, 3>::from_array([1, 2]);
        let err = v.resize(4).unwrap_err();
        assert_eq!(
            err,
            StackVectorError::CapacityExceeded {
                operation: "resize",
                requested: 4,
                capacity: 3,
            }
        );
        assert_eq!(v, [1, 2]);
        assert_eq!(v.spare_capacity_mut(), &[0]);
    }

    #[test]
    fn pop_and_clear_keep_stale_content() {
        let mut v = StackVector::<i32, 4>::from_array([1, 2, 3]);
        v.pop_back();
        assert_eq!(v.spare_capacity_mut(), &[3, 0]);

        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.spare_capacity_mut(), &[1, 2, 3, 0]);

        // growing through resize discards the stale values
        v.resize(2).unwrap();
        assert_eq!(v, [0, 0]);
    }

    #[test]
    fn pop_returns_copy_of_last() {
        let mut v = StackVector::<String, 2>::new();
        v.push("a".to_owned()).unwrap();
        v.push("b".to_owned()).unwrap();

        assert_eq!(v.pop().as_deref(), Some("b"));
        assert_eq!(v.pop().as_deref(), Some("a"));
        assert_eq!(v.pop(), None);
        assert_eq!(v.spare_capacity_mut(), &["a", "b"]);
    }

    #[test]
    fn at_checks_against_len_not_capacity() {
        let mut v = StackVector::<i32, 4>::from_array([5, 6]);
        assert_eq!(v.at(1), Ok(&6));
        assert_eq!(
            v.at(2),
            Err(StackVectorError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            v.at(9),
            Err(StackVectorError::OutOfRange { index: 9, len: 2 })
        );

        *v.at_mut(0).unwrap() = 50;
        assert_eq!(v, [50, 6]);
        assert!(v.at_mut(2).is_err());
    }

    #[test]
    fn front_back_and_index() {
        let mut v = StackVector::<i32, 4>::from_array([7, 8, 9]);
        assert_eq!(*v.front(), 7);
        assert_eq!(*v.back(), 9);

        *v.front_mut() = 1;
        *v.back_mut() = 3;
        v[1] = 2;
        assert_eq!(v[1], 2);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(&v[1..], &[2, 3]);
    }

    #[test]
    #[should_panic]
    fn index_past_len_panics_even_below_capacity() {
        let v = StackVector::<i32, 4>::from_array([1]);
        let _ = v[2];
    }

    #[test]
    fn range_indexing_covers_live_elements() {
        let mut v = StackVector::<i32, 6>::from_array([1, 2, 3, 4]);
        v.pop_back();
        assert_eq!(&v[1..], &[2, 3]);
        assert_eq!(&v[..2], &[1, 2]);
        assert_eq!(&v[..], &[1, 2, 3]);
        assert!(v.get(3).is_none());

        v[1..].copy_from_slice(&[20, 30]);
        assert_eq!(v, [1, 20, 30]);
    }

    #[test]
    #[should_panic]
    fn range_past_len_panics() {
        let v = StackVector::<i32, 6>::from_array([1, 2]);
        let _ = &v[..3];
    }

    #[test]
    fn emplace_checks_capacity_before_constructing() {
        let calls = Cell::new(0);
        let mut v = StackVector::<i32, 1>::new();

        v.emplace_with(|| {
            calls.set(calls.get() + 1);
            4
        })
        .unwrap();
        assert!(v
            .emplace_with(|| {
                calls.set(calls.get() + 1);
                5
            })
            .is_err());

        assert_eq!(calls.get(), 1);
        assert_eq!(v, [4]);
    }

    #[test]
    fn reserve_and_shrink_to_fit() {
        let mut v = StackVector::<u8, 4>::new();
        assert!(v.reserve(4).is_ok());
        assert_eq!(
            v.reserve(5),
            Err(StackVectorError::CapacityExceeded {
                operation: "reserve",
                requested: 5,
                capacity: 4,
            })
        );
        v.push(1).unwrap();
        v.shrink_to_fit();
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.max_size(), 4);
        assert_eq!(StackVector::<u8, 4>::CAPACITY, 4);
    }

    #[test]
    fn try_extend_from_slice_is_all_or_nothing() {
        let mut v = StackVector::<i32, 4>::new();
        let added = v.try_extend_from_slice(&[1, 2]).unwrap();
        added[0] = 10;
        assert_eq!(v, [10, 2]);

        assert!(v.try_extend_from_slice(&[3, 4, 5]).is_err());
        assert_eq!(v, [10, 2]);
        assert_eq!(v.spare_capacity_mut(), &[0, 0]);
    }

    #[test]
    fn constructors() {
        let from_iter = StackVector::<u32, 5>::try_from_iter(1u8..=3).unwrap();
        assert_eq!(from_iter, [1, 2, 3]);

        let too_long = StackVector::<u32, 2>::try_from_iter(1u8..=3);
        assert_eq!(
            too_long,
            Err(StackVectorError::CapacityExceeded {
                operation: "push",
                requested: 3,
                capacity: 2,
            })
        );

        let dynamic = vec![String::from("x"), String::from("y")];
        let strings = StackVector::<String, 2>::try_from(dynamic.as_slice()).unwrap();
        assert_eq!(strings, ["x", "y"]);

        let from_array: StackVector<i32, 6> = [4, 5].into();
        assert_eq!(from_array, [4, 5]);
    }

    #[test]
    fn converting_between_capacities_and_types() {
        let source = StackVector::<u16, 8>::from_array([1, 2, 3]);

        let exact = StackVector::<u64, 3>::try_convert(&source).unwrap();
        assert_eq!(exact, [1, 2, 3]);

        let larger = StackVector::<u32, 32>::try_from(&source).unwrap();
        assert_eq!(larger, [1, 2, 3]);
        assert_eq!(larger.capacity(), 32);

        let smaller = StackVector::<u16, 2>::try_convert(&source);
        assert!(smaller.is_err());
    }

    #[test]
    fn equality_ignores_capacity() {
        let a = StackVector::<i32, 5>::from_array([1, 2, 3]);
        let b = StackVector::<i32, 8>::from_array([1, 2, 3]);
        let shorter = StackVector::<i32, 8>::from_array([1, 2]);
        let different = StackVector::<i32, 8>::from_array([1, 2, 4]);

        assert_eq!(a, b);
        assert_ne!(a, shorter);
        assert_ne!(a, different);
        assert_eq!(a, &[1, 2, 3][..]);
        assert_eq!(a, &[1, 2, 3]);
    }

    #[test]
    fn equality_ignores_stale_slots() {
        let mut a = StackVector::<i32, 4>::from_array([1, 2, 3]);
        a.pop_back();
        let b = StackVector::<i32, 4>::from_array([1, 2]);
        assert_eq!(a, b);

        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn iteration_covers_live_range_only() {
        let mut v = StackVector::<i32, 6>::from_array([1, 2, 3, 4]);
        v.truncate(3);

        assert!(v.iter().eq(&[1, 2, 3]));
        assert!(v.iter().rev().eq(&[3, 2, 1]));

        for x in &mut v {
            *x *= 10;
        }
        assert_eq!(v, [10, 20, 30]);

        let mut into = v.into_iter();
        assert_eq!(into.len(), 3);
        assert_eq!(into.next(), Some(10));
        assert_eq!(into.next_back(), Some(30));
        assert_eq!(into.next(), Some(20));
        assert_eq!(into.next(), None);
        assert_eq!(into.next_back(), None);
    }

    #[test]
    fn slots_keep_their_address() {
        let mut v = StackVector::<i32, 4>::new();
        let first = v.push(1).unwrap() as *const i32;
        v.push(2).unwrap();
        v.pop_back();
        v.clear();
        v.resize(3).unwrap();
        assert_eq!(first, v.front() as *const i32);
        assert_eq!(first, v.as_slice().as_ptr());
    }

    #[test]
    fn copies_are_independent() {
        let mut a = StackVector::<i32, 3>::from_array([1, 2]);
        let b = a;
        a[0] = 100;
        a.pop_back();
        assert_eq!(a, [100]);
        assert_eq!(b, [1, 2]);

        let mut s = StackVector::<String, 2>::from_array(["x".to_owned()]);
        let t = s.clone();
        s[0].push('!');
        assert_eq!(s, ["x!"]);
        assert_eq!(t, ["x"]);
    }

    #[test]
    fn zero_capacity() {
        let mut v = StackVector::<u8, 0>::new();
        assert!(v.is_empty());
        assert!(v.is_full());
        assert!(v.push(1).is_err());
        assert!(v.resize(0).is_ok());
        assert!(v.resize(1).is_err());
        assert!(v.at(0).is_err());
    }

    #[test]
    fn ord_and_borrow_traits() {
        let a = StackVector::<i32, 3>::from_array([1, 2]);
        let b = StackVector::<i32, 3>::from_array([1, 3]);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));

        let mut c = a;
        let borrowed: &[i32] = c.borrow();
        assert_eq!(borrowed, &[1, 2]);
        let borrowed_mut: &mut [i32] = c.borrow_mut();
        borrowed_mut[1] = 9;
        assert_eq!(c.as_ref(), &[1, 9]);
    }

    #[test]
    fn default_and_clone_and_debug() {
        let mut v = StackVector::<i32, 4>::default();
        v.push(3).unwrap();
        v.push(4).unwrap();
        v.pop_back();
        let c = v.clone();
        assert_eq!(c.as_slice(), &[3]);
        assert_eq!(format!("{:?}", c), "[3]");
    }
}
