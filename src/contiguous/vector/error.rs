use std::ops::Range;

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The provided index falls outside of the range that an operation accepts.
///
/// The valid range is half-open and depends on the operation: `0..size` for element access and
/// removal, `0..size + 1` for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Error)]
#[display("Index {index} out of range {}..{}!", range.start, range.end)]
pub struct IndexOutOfRange {
    /// The index that was rejected.
    pub index: isize,
    /// The range of indices that the operation would have accepted.
    pub range: Range<usize>,
}

/// An operation required at least one element, but the Vector was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
#[display("Vector is empty!")]
pub struct EmptyContainer;

/// Any error produced by a [`Vector`](super::Vector) operation, useful when a caller combines
/// several fallible operations with `?`.
///
/// # Examples
/// ```
/// # use dynamic_array::contiguous::{Vector, VectorError};
/// fn move_last_to_front(vec: &mut Vector<u8>) -> Result<(), VectorError> {
///     let value = vec.pop_back()?;
///     vec.insert(0, value)?;
///     Ok(())
/// }
///
/// let mut vec = Vector::from([1, 2, 3]);
/// move_last_to_front(&mut vec).unwrap();
/// assert_eq!(vec.data(), &[3, 1, 2]);
///
/// let err = move_last_to_front(&mut Vector::new()).unwrap_err();
/// assert!(err.is_empty_container());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum VectorError {
    /// See [`IndexOutOfRange`].
    IndexOutOfRange(IndexOutOfRange),
    /// See [`EmptyContainer`].
    EmptyContainer(EmptyContainer),
}
