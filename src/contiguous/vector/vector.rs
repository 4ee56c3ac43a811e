use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::{EmptyContainer, IndexOutOfRange};
use crate::contiguous::buffer::Buffer;

/// The capacity a Vector grows to from a capacity of 0.
const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, backed by an owned allocation with an explicitly tracked
/// length and capacity.
///
/// Slots `0..size()` always hold initialized elements, slots `size()..capacity()` are allocated
/// but empty. The capacity is only ever changed by the operations that document it, and is always
/// exactly the value they describe.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `size` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)`* |
/// | `erase` | `O(n-i)` |
/// | `clear` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n+m)` |
/// | `swap` | `O(1)` |
/// | `assign` | `O(m)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, it grows first, which takes
/// `O(n)`. Because the capacity doubles, this happens `O(log n)` times over `n` pushes.
///
/// \** If the Vector already has the requested capacity, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with size and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.size(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// assert!(vec.is_empty());
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.capacity(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::with_cap(cap),
            len: 0,
        }
    }

    /// Returns the number of elements in the Vector.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let vec = Vector::from([1_u8, 2, 3]);
    /// assert_eq!(vec.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns the number of elements the Vector can hold before it needs to grow.
    pub const fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is negative or not less than [`size`](Vector::size).
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let vec = Vector::from(["a", "b", "c"]);
    /// assert_eq!(vec.at(1), Ok(&"b"));
    /// assert!(vec.at(-1).is_err());
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: isize) -> Result<&T, IndexOutOfRange> {
        let index = check_index(index, self.len)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is negative or not less than [`size`](Vector::size).
    pub fn at_mut(&mut self, index: isize) -> Result<&mut T, IndexOutOfRange> {
        let index = check_index(index, self.len)?;
        Ok(&mut self[index])
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the Vector is empty.
    pub fn front(&self) -> Result<&T, EmptyContainer> {
        self.data().first().ok_or(EmptyContainer)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the Vector is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        self.data_mut().first_mut().ok_or(EmptyContainer)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the Vector is empty.
    pub fn back(&self) -> Result<&T, EmptyContainer> {
        self.data().last().ok_or(EmptyContainer)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the Vector is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        self.data_mut().last_mut().ok_or(EmptyContainer)
    }

    /// Returns a slice over the elements of the Vector, in the Vector's own memory rather than a
    /// copy. The same view is available through [`Deref`].
    pub fn data(&self) -> &[T] {
        self
    }

    /// Returns a mutable slice over the elements of the Vector. Writes through the slice modify
    /// the Vector directly.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.data_mut()[1] = 20;
    /// assert_eq!(vec.at(1), Ok(&20));
    /// ```
    pub fn data_mut(&mut self) -> &mut [T] {
        self
    }

    /// Returns the first index of the Vector, always 0.
    pub const fn begin(&self) -> usize {
        0
    }

    /// Returns the index one past the last element of the Vector, equal to its size. Together with
    /// [`begin`](Vector::begin) this forms the half-open range of valid indices.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let vec = Vector::from([10, 20, 30]);
    /// let mut total = 0;
    /// for i in vec.begin()..vec.end() {
    ///     total += vec[i];
    /// }
    /// assert_eq!(total, 60);
    /// ```
    pub const fn end(&self) -> usize {
        self.len
    }

    /// Push the provided value onto the end of the Vector, growing the capacity if the Vector is
    /// full. An empty capacity grows to 1, any other capacity doubles.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// let mut caps = Vec::new();
    /// for i in 0..5 {
    ///     vec.push_back(i);
    ///     caps.push(vec.capacity());
    /// }
    /// assert_eq!(vec.data(), &[0, 1, 2, 3, 4]);
    /// assert_eq!(caps, [1, 2, 4, 4, 8]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// The caller must ensure that `size() < capacity()`.
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that len < cap, so the slot is within the
        // allocation and currently uninitialized.
        unsafe { self.buf.as_ptr().add(self.len).write(value) }
        self.len += 1;
    }

    /// Removes the last element of the Vector and returns it. The capacity is left unchanged.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the Vector is empty.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// assert_eq!(vec.pop_back(), Ok(2));
    /// assert_eq!(vec.pop_back(), Ok(1));
    /// assert!(vec.pop_back().is_err());
    /// assert_eq!(vec.capacity(), 2);
    /// ```
    pub fn pop_back(&mut self) -> Result<T, EmptyContainer> {
        if self.len == 0 {
            return Err(EmptyContainer);
        }

        // Decrement len before reading.
        self.len -= 1;

        // SAFETY: The slot at the new len is within the capacity and initialized. Reducing len
        // first means the value is no longer considered part of the Vector, so this read acts as
        // a move.
        Ok(unsafe { self.buf.as_ptr().add(self.len).read() })
    }

    /// Inserts the provided value at `index`, shifting all following elements one position to the
    /// right. An `index` equal to [`size`](Vector::size) appends the value.
    ///
    /// If the Vector is full, it grows using the same policy as [`push_back`](Vector::push_back).
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` isn't within `0..=size()`. The Vector is left
    /// unchanged.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// vec.insert(1, 100).unwrap();
    /// vec.insert(1, 200).unwrap();
    /// vec.insert(5, 300).unwrap();
    /// assert_eq!(vec.data(), &[0, 200, 100, 1, 2, 300]);
    /// assert!(vec.insert(7, 400).is_err());
    /// ```
    pub fn insert(&mut self, index: isize, value: T) -> Result<(), IndexOutOfRange> {
        let index = check_index(index, self.len + 1)?;

        if self.len == self.capacity() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both the source range index..len and the destination
        // range index + 1..len + 1 are within the allocation. ptr::copy handles the overlap. The
        // slot at index is logically uninitialized after the copy and is immediately written.
        unsafe {
            let slot = self.buf.as_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, moving all following elements one position to
    /// the left to fill the gap.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` isn't within `0..size()`. The Vector is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3, 4, 5]);
    /// assert_eq!(vec.erase(1), Ok(2));
    /// assert_eq!(vec.data(), &[1, 3, 4, 5]);
    /// assert!(vec.erase(4).is_err());
    /// ```
    pub fn erase(&mut self, index: isize) -> Result<T, IndexOutOfRange> {
        let index = check_index(index, self.len)?;

        // SAFETY: index < len, so the slot is initialized and index + 1..len is within the
        // allocation. The value is read out before its slot is overwritten by the shift.
        let value = unsafe {
            let slot = self.buf.as_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };

        self.len -= 1;
        Ok(value)
    }

    /// Drops all elements of the Vector. The allocation is kept, so the capacity remains the same
    /// as it was before clearing.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3, 4, 5]);
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Ensures that the capacity of the Vector is at least `new_cap`. If the capacity is smaller,
    /// the Vector is reallocated with a capacity of exactly `new_cap`. The capacity is never
    /// reduced.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.reserve(10);
    /// assert_eq!(vec.capacity(), 10);
    /// vec.reserve(5);
    /// assert_eq!(vec.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.capacity() {
            self.buf.realloc(new_cap);
        }
    }

    /// Shrinks the Vector so that its capacity is equal to its size.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn shrink_to_fit(&mut self) {
        self.buf.realloc(self.len);
    }

    /// Exchanges the entire contents of two Vectors, including their capacities, without moving
    /// any elements.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let mut a = Vector::from([1, 2, 3]);
    /// let mut b = Vector::with_cap(8);
    /// b.push_back(4);
    /// a.swap(&mut b);
    /// assert_eq!((a.data(), a.capacity()), (&[4][..], 8));
    /// assert_eq!((b.data(), b.capacity()), (&[1, 2, 3][..], 3));
    /// ```
    pub fn swap(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }

    /// Replaces the contents of the Vector with `values`. Afterwards, both the size and the
    /// capacity are equal to the number of values provided.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut vec: Vector<T> = values.into_iter().collect();
        vec.shrink_to_fit();
        *self = vec;
    }

    /// Drops all elements from `new_len` onwards. Does nothing if `new_len >= size()`.
    pub(crate) fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        // SAFETY: new_len < len, so the tail new_len..len is within the allocation and entirely
        // initialized.
        let tail = unsafe {
            ptr::slice_from_raw_parts_mut(self.buf.as_ptr().add(new_len), self.len - new_len)
        };

        // Shorten before dropping so a panicking drop can't cause a double drop.
        self.len = new_len;

        // SAFETY: The tail is no longer part of the Vector and is dropped exactly once here.
        unsafe { ptr::drop_in_place(tail) }
    }

    /// Grows the Vector so that it can take at least one more element. A capacity of 0 grows to
    /// [`MIN_CAP`], anything else is multiplied by [`GROWTH_FACTOR`].
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`], or
    /// the capacity of a zero-sized Vector would exceed [`usize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = match self.capacity() {
            0 => MIN_CAP,
            // Only reachable for zero-sized types, any other overflow is caught by the layout.
            cap => match cap.checked_mul(GROWTH_FACTOR) {
                Some(new_cap) => new_cap,
                None => panic!("Capacity overflow!"),
            },
        };

        self.buf.realloc(new_cap);
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a new Vector holding `count` clones of `value`, with a capacity of exactly `count`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let vec = Vector::repeat("hello", 3);
    /// assert_eq!(vec.data(), &["hello"; 3]);
    /// ```
    pub fn repeat(value: T, count: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(count);
        for _ in 0..count {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(value.clone()) }
        }
        vec
    }

    /// Changes the size of the Vector to `new_len`. If the Vector shrinks, the elements from
    /// `new_len` onwards are dropped and the capacity is left unchanged. If it grows, the capacity
    /// is raised to at least `new_len` and the new slots are filled with clones of `value`.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.resize(5, 0);
    /// assert_eq!(vec.data(), &[1, 2, 3, 0, 0]);
    /// vec.resize(2, 0);
    /// assert_eq!(vec.data(), &[1, 2]);
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        match new_len.cmp(&self.len) {
            Ordering::Less => self.truncate(new_len),
            Ordering::Equal => (),
            Ordering::Greater => {
                self.reserve(new_len);
                while self.len < new_len {
                    // SAFETY: The capacity has been reserved for new_len elements.
                    unsafe { self.push_unchecked(value.clone()) }
                }
            },
        }
    }
}

/// Converts a signed `index` into a position within `0..end`.
fn check_index(index: isize, end: usize) -> Result<usize, IndexOutOfRange> {
    match usize::try_from(index) {
        Ok(position) if position < end => Ok(position),
        _ => Err(IndexOutOfRange {
            index,
            range: 0..end,
        }),
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(self.len.saturating_add(iter.size_hint().0));

        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);
        for item in value {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(item) }
        }
        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        let mut vec = Vector::with_cap(value.len());
        for item in value {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(item.clone()) }
        }
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and are dropped exactly once, here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len));
        }

        // Implicitly drop self.buf, which deallocates the memory without touching its contents.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within the allocation.
        // The borrow checker enforces that self isn't mutated for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and self is borrowed mutably so the slice is unique.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.capacity());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which holds at least len values.
            unsafe { vec.push_unchecked(value.clone()) }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &self.data())
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vector[")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " ")?;
            }
            Display::fmt(value, f)?;
        }
        write!(f, "]")
    }
}
