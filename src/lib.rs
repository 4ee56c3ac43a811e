//! A growable, contiguous array type written on top of raw allocations, along with a small set of
//! construction options for setting up its initial state.
//!
//! # Purpose
//! [`Vector`](contiguous::Vector) behaves like a classic dynamic array: amortized `O(1)` appends,
//! bounds-checked access, in-place insertion and removal, explicit capacity reservation and an
//! `O(1)` swap of entire contents. It doesn't wrap [`Vec`]; it owns its own allocation and tracks
//! length and capacity itself, so the growth policy is fully deterministic:
//!
//! - A Vector with capacity 0 grows to capacity 1.
//! - Any other full Vector doubles its capacity.
//! - Growth only ever happens when the length equals the capacity, right before a new element is
//!   written.
//!
//! # Construction
//! New Vectors can be created directly ([`Vector::new`](contiguous::Vector::new),
//! [`Vector::with_cap`](contiguous::Vector::with_cap), [`From`] impls) or from an ordered list of
//! [`VectorOption`](contiguous::VectorOption)s. Options are absolute rather than additive: each one
//! replaces the state created by any option before it, so the last option always wins.
//!
//! ```
//! # use dynamic_array::contiguous::{Vector, VectorOption};
//! let vec = Vector::with_options([
//!     VectorOption::Capacity(10),
//!     VectorOption::values([1, 2, 3]),
//! ]);
//! assert_eq!(vec.size(), 3);
//! assert_eq!(vec.capacity(), 3);
//! assert_eq!(vec.to_string(), "Vector[1 2 3]");
//! ```
//!
//! # Error Handling
//! Every operation that can fail because of its arguments or the current state of the Vector
//! returns a [`Result`]. The errors are strongly typed structs, so that a caller only ever has to
//! handle the failure an operation can actually produce:
//!
//! - [`IndexOutOfRange`](contiguous::IndexOutOfRange) from `at`, `insert` and `erase`.
//! - [`EmptyContainer`](contiguous::EmptyContainer) from `front`, `back` and `pop_back`.
//!
//! Both convert into [`VectorError`](contiguous::VectorError) for callers that mix operations and
//! want to use `?`.
//!
//! Running out of address space is not treated as a recoverable error. Any capacity whose memory
//! layout would exceed [`isize::MAX`] bytes panics, and allocation failure is reported through
//! [`handle_alloc_error`](std::alloc::handle_alloc_error).
//!
//! # Threading
//! Vectors are plain single-threaded values. They are [`Send`] and [`Sync`] whenever their
//! elements are, and the borrow checker guarantees that no view into a Vector outlives a mutation.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod contiguous;

pub(crate) mod util;
