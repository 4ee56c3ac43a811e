//! A module containing [`Vector`] and associated types.
//!
//! Alongside Vector itself, this includes [`IntoIter`] for owned iteration, the construction
//! options [`VectorOption`] and [`VectorOptions`], and the errors returned by fallible Vector
//! operations. [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`]
//! are used for borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod error;
mod iter;
mod options;
mod vector;

pub use error::*;
pub use iter::*;
pub use options::*;
pub use vector::*;
