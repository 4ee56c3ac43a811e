use std::iter::FusedIterator;
use std::mem::{self, ManuallyDrop};
use std::ptr;
use std::slice;

use super::Vector;
use crate::contiguous::buffer::Buffer;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // The Vector's Drop would drop the elements now owned by the iterator.
        let mut vec = ManuallyDrop::new(self);
        IntoIter {
            buf: mem::replace(&mut vec.buf, Buffer::new()),
            head: 0,
            tail: vec.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// Elements that haven't been yielded yet are dropped along with the iterator.
pub struct IntoIter<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: head..tail are initialized values within the allocation, which is owned by self.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.head), self.tail - self.head) }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values in head..tail are initialized and haven't been moved out yet.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(self.head),
                self.tail - self.head,
            ));
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head < self.tail {
            // SAFETY: head < tail, so the slot is initialized. Incrementing head afterwards means
            // the value is never read or dropped again, effectively moving it out.
            let value = unsafe { self.buf.as_ptr().add(self.head).read() };
            self.head += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tail - self.head;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head < self.tail {
            self.tail -= 1;
            // SAFETY: The newly decremented tail is still >= head, so the slot is initialized.
            let value = unsafe { self.buf.as_ptr().add(self.tail).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
