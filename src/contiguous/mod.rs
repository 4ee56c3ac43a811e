//! Contiguous collection types. Namely [`Vector`], a growable array, and the [`VectorOption`]s used
//! to configure a new one.
#![warn(missing_docs)]

pub(crate) mod buffer;
pub mod vector;

#[doc(inline)]
pub use vector::{EmptyContainer, IndexOutOfRange, Vector, VectorError, VectorOption, VectorOptions};
